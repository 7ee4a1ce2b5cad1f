//! Helper crate for fast log initializing.
//!
//! This crate reexports all macros from [`log`] crate and uses [`env_logger`]
//! crate for logger initializing.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger();
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable for log style setting.
const LOG_STYLE_ENV: &str = "LOG_STYLE";

/// Environment variable with path of a file to write logs into instead of
/// stderr.
const LOG_FILE_ENV: &str = "LOG_FILE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::Record;
use std::{env, fs::File, io, path::Path};

/// Logger initializer. Run this function in binary crate to initialize logging.
/// This function should be ran only once.
///
/// Logs go to stderr unless `LOG_FILE` environment variable names a file.
pub fn init_logger() {
	let mut builder = builder();
	if let Some(path) = env::var_os(LOG_FILE_ENV) {
		match File::create(&path) {
			Ok(file) => pipe(&mut builder, file),
			Err(e) => eprintln!("Can't open log file {:?}: {}", path, e),
		}
	}
	builder.init();
}

/// Like [`init_logger`], but always write into the file at `path`, which is
/// truncated first.
///
/// Use it when stderr is shared with something drawing on the terminal.
pub fn init_file_logger(path: impl AsRef<Path>) -> io::Result<()> {
	let mut builder = builder();
	pipe(&mut builder, File::create(path)?);
	builder.init();
	Ok(())
}

fn builder() -> Builder {
	let log_level = match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	};

	let mut builder = Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, log_level)
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	);
	builder.format(format);
	builder
}

/// Send output to `file` without color codes.
fn pipe(builder: &mut Builder, file: File) {
	builder
		.target(Target::Pipe(Box::new(file)))
		.write_style(WriteStyle::Never);
}

/// Logging output format.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use env_logger::fmt::Color;
	use log::Level;
	use std::io::Write;

	let mut level_style = buf.style();
	match record.level() {
		Level::Error => level_style.set_color(Color::Red).set_bold(true),
		Level::Warn => level_style.set_color(Color::Yellow),
		Level::Info => level_style.set_color(Color::Cyan),
		Level::Debug => level_style.set_color(Color::Magenta),
		Level::Trace => level_style.set_color(Color::Blue),
	};

	writeln!(
		buf,
		"{}\t{}\t{}",
		level_style.value(record.level()),
		record.target(),
		record.args()
	)
}
