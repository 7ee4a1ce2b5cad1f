//! Terminal screen and keyboard.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use game::{
    input::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP},
    prelude::*,
};
use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

/// Title shown above the board while playing.
const SCORE_TITLE: &str = "SCORE";

/// Title shown above the board when the game is over.
const GAME_OVER_TITLE: &str = "GAME OVER - FINAL SCORE";

/// Row of the first grid line.
const GRID_TOP: u16 = 2;

/// Key pressed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Leave the game.
    Quit,

    /// Start a new game.
    Restart,

    /// Steering key, named like [`ARROW_LEFT`] and friends.
    Named(&'static str),
}

/// Raw mode alternate screen. Terminal state is restored on drop.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        enable_raw_mode()?;
        Ok(Self { stdout })
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(event) if event.kind == KeyEventKind::Press => Ok(key_for(event)),
            Event::Resize(..) => {
                queue!(self.stdout, Clear(ClearType::All))?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Draw the score line, the board and the hint line.
    pub fn draw(&mut self, game: &Game, best: u32) -> io::Result<()> {
        let board = game.board();

        let title = match board.outcome() {
            Some(_) => GAME_OVER_TITLE,
            None => SCORE_TITLE,
        };
        queue!(
            self.stdout,
            MoveTo(0, 0),
            Print(format!("{}: {}    BEST: {}", title, board.score(), best.max(board.score()))),
            Clear(ClearType::UntilNewLine)
        )?;

        let mut y = GRID_TOP;
        for row in board.grid().rows() {
            queue!(self.stdout, MoveTo(0, y))?;
            for tag in row {
                queue!(
                    self.stdout,
                    PrintStyledContent(tag.glyph().with(color(*tag))),
                    Print(' ')
                )?;
            }
            y += 1;
        }

        let hint = match board.outcome() {
            Some(outcome) => format!("The snake {}. r: restart  q: quit", outcome),
            None => String::from("arrows/wasd: steer  q: quit"),
        };
        queue!(
            self.stdout,
            MoveTo(0, y + 1),
            Print(hint),
            Clear(ClearType::UntilNewLine)
        )?;

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
    }
}

fn key_for(event: KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char('r') => Some(Key::Restart),
        KeyCode::Left | KeyCode::Char('a') => Some(Key::Named(ARROW_LEFT)),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::Named(ARROW_RIGHT)),
        KeyCode::Up | KeyCode::Char('w') => Some(Key::Named(ARROW_UP)),
        KeyCode::Down | KeyCode::Char('s') => Some(Key::Named(ARROW_DOWN)),
        _ => None,
    }
}

fn color(tag: CellTag) -> Color {
    match tag {
        CellTag::Empty | CellTag::Edge => Color::DarkGrey,
        CellTag::Pickup => Color::Red,
        CellTag::HeadUp | CellTag::HeadDown | CellTag::HeadLeft | CellTag::HeadRight => {
            Color::Yellow
        }
        _ => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn steering_keys_map_to_directions() {
        for (code, direction) in [
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
        ] {
            match key_for(press(code)) {
                Some(Key::Named(name)) => assert_eq!(direction_for_key(name), Some(direction)),
                other => panic!("{:?} mapped to {:?}", code, other),
            }
        }
    }

    #[test]
    fn control_keys() {
        assert_eq!(key_for(press(KeyCode::Esc)), Some(Key::Quit));
        assert_eq!(key_for(press(KeyCode::Char('r'))), Some(Key::Restart));
        assert_eq!(
            key_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
        assert_eq!(key_for(press(KeyCode::Char('c'))), None);
    }
}
