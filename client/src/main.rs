mod terminal;

use clap::{App as CliApp, Arg, ArgMatches};
use game::prelude::*;
use logger::*;
use std::{
    path::PathBuf,
    process,
    time::{Duration, Instant},
};
use terminal::{Key, Terminal};

/// How long to wait for input before running the driver again.
const FRAME: Duration = Duration::from_millis(16);

/// Log file name, placed in the temporary directory unless `--log` is given.
const LOG_FILE: &str = "snake.log";

fn main() {
    let options = match Options::from_matches(&init_cli()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = logger::init_file_logger(&options.log_file) {
        eprintln!("Can't write logs to {}: {}", options.log_file.display(), e);
    }

    if let Err(e) = run(options) {
        error!("Error while running the game: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_cli() -> ArgMatches<'static> {
    CliApp::new("Snake")
        .about("Plays snake in the terminal")
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .value_name("LEVEL")
                .possible_values(&["easy", "medium", "hard"])
                .help(&format!(
                    "Picks board size and speed. Default is {}",
                    Difficulty::default()
                )),
        )
        .arg(
            Arg::with_name("size")
                .short("g")
                .long("size")
                .value_name("CELLS")
                .help("Overrides length of the board side"),
        )
        .arg(
            Arg::with_name("tick")
                .short("t")
                .long("tick")
                .value_name("DURATION")
                .help("Overrides time of a single move, like 100ms"),
        )
        .arg(
            Arg::with_name("queue")
                .short("q")
                .long("queue")
                .value_name("NUMBER")
                .help(&format!(
                    "How many turns may be typed ahead. Default is {}",
                    Settings::QUEUE_BOUND
                )),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("NUMBER")
                .help("Makes food placement repeatable"),
        )
        .arg(
            Arg::with_name("scores")
                .short("s")
                .long("scores")
                .value_name("PATH")
                .help(&format!(
                    "File keeping the best score. Default is {}",
                    JsonFileStore::FILE_NAME
                )),
        )
        .arg(
            Arg::with_name("log")
                .short("l")
                .long("log")
                .value_name("PATH")
                .help(&format!(
                    "File to write logs into. Default is {} in the temporary directory",
                    LOG_FILE
                )),
        )
        .get_matches()
}

struct Options {
    settings: Settings,
    seed: Option<u64>,
    scores: PathBuf,
    log_file: PathBuf,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> game::Result<Self> {
        let difficulty = match matches.value_of("difficulty") {
            Some(val) => val.parse::<Difficulty>()?,
            None => Difficulty::default(),
        };

        let mut settings = Settings::from(difficulty);
        if let Some(val) = matches.value_of("size") {
            settings.size = val.parse()?;
        }
        if let Some(val) = matches.value_of("tick") {
            settings.tick_interval = val.parse::<humantime::Duration>()?.into();
        }
        if let Some(val) = matches.value_of("queue") {
            settings.queue_bound = val.parse()?;
        }
        settings.validate()?;

        Ok(Self {
            settings,
            seed: match matches.value_of("seed") {
                Some(val) => Some(val.parse()?),
                None => None,
            },
            scores: matches
                .value_of("scores")
                .unwrap_or(JsonFileStore::FILE_NAME)
                .into(),
            log_file: match matches.value_of("log") {
                Some(val) => val.into(),
                None => std::env::temp_dir().join(LOG_FILE),
            },
        })
    }
}

fn run(options: Options) -> game::Result<()> {
    let mut store = JsonFileStore::new(options.scores);
    let mut best = store.load()?;

    let mut game = match options.seed {
        Some(seed) => Game::with_seed(options.settings, seed)?,
        None => Game::new(options.settings)?,
    };
    let mut driver = Driver::new(game.settings().tick_interval);
    let mut score_recorded = false;

    let mut screen = Terminal::enter()?;
    let clock = Instant::now();
    screen.draw(&game, best)?;

    loop {
        match screen.poll_key(FRAME)? {
            Some(Key::Quit) => break,
            Some(Key::Restart) if game.is_finished() => {
                game.reset();
                driver.reset();
                score_recorded = false;
                screen.draw(&game, best)?;
                continue;
            }
            Some(Key::Named(name)) => {
                if let Some(direction) = direction_for_key(name) {
                    game.turn(direction);
                }
            }
            _ => {}
        }

        if !driver.is_running() {
            continue;
        }

        let frame = driver.frame(clock.elapsed(), &mut game);
        if !frame.next_frame && !score_recorded {
            if record_high_score(&mut store, game.score())? {
                best = game.score();
            }
            score_recorded = true;
            info!("Game over with score {}, best is {}", game.score(), best);
        }
        if frame.ticks > 0 || !frame.next_frame {
            screen.draw(&game, best)?;
        }
    }

    if !score_recorded {
        record_high_score(&mut store, game.score())?;
    }

    Ok(())
}
