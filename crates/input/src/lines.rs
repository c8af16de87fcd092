//! Line-oriented input: one direction token per line.
//!
//! Token mapping:
//!
//! | Token | Direction |
//! |-------|-----------|
//! | `j` | Left |
//! | `l` | Right |
//! | `i` | Up |
//! | `k` | Down |
//!
//! Surrounding whitespace is ignored. Anything else, including a blank line, is
//! rejected.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::types::Direction;

#[derive(Debug, Error)]
pub enum InputError {
    /// The token does not name a direction.
    #[error("unknown direction: {0}")]
    UnknownToken(String),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Map one input token to a direction
///
/// ```
/// use tui_2048_input::direction_from_token;
/// use tui_2048_types::Direction;
///
/// assert_eq!(direction_from_token("j").unwrap(), Direction::Left);
/// assert_eq!(direction_from_token(" k\n").unwrap(), Direction::Down);
/// assert!(direction_from_token("x").is_err());
/// ```
pub fn direction_from_token(token: &str) -> Result<Direction, InputError> {
    match token.trim() {
        "j" => Ok(Direction::Left),
        "l" => Ok(Direction::Right),
        "i" => Ok(Direction::Up),
        "k" => Ok(Direction::Down),
        other => Err(InputError::UnknownToken(other.to_string())),
    }
}

/// Iterator over directions read line by line from `reader`
///
/// Yields `Err(UnknownToken)` for rejected lines and keeps going; an IO failure is
/// yielded once and ends the iteration.
pub struct LineInput<R> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineInput<R> {
    type Item = Result<Direction, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(direction_from_token(&self.buf)),
            Err(err) => {
                self.done = true;
                Some(Err(InputError::Io(err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reference_tokens() {
        assert_eq!(direction_from_token("j").unwrap(), Direction::Left);
        assert_eq!(direction_from_token("l").unwrap(), Direction::Right);
        assert_eq!(direction_from_token("i").unwrap(), Direction::Up);
        assert_eq!(direction_from_token("k").unwrap(), Direction::Down);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        for token in ["", "left", "J", "jj", "w"] {
            match direction_from_token(token) {
                Err(InputError::UnknownToken(t)) => assert_eq!(t, token),
                other => panic!("{:?} should be rejected, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_line_input_yields_each_line() {
        let input = Cursor::new("j\nx\r\nk\n\ni");
        let results: Vec<_> = LineInput::new(input).collect();

        assert_eq!(results.len(), 5);
        assert!(matches!(results[0], Ok(Direction::Left)));
        assert!(matches!(&results[1], Err(InputError::UnknownToken(t)) if t == "x"));
        assert!(matches!(results[2], Ok(Direction::Down)));
        assert!(matches!(&results[3], Err(InputError::UnknownToken(t)) if t.is_empty()));
        assert!(matches!(results[4], Ok(Direction::Up)));
    }

    #[test]
    fn test_error_message() {
        let err = direction_from_token("q").unwrap_err();
        assert_eq!(err.to_string(), "unknown direction: q");
    }
}
