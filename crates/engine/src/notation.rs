//! Square and move notation: files `a`-`h` left to right, ranks `8`-`1`
//! top to bottom, so Red's Octagon starts on `d1`.

use crate::board::Position;
use crate::constants::BOARD_SIZE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected a square like e2, got '{0}'")]
    BadSquare(String),
    #[error("expected a move like b2b4, got '{0}'")]
    BadMove(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.row)
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || NotationError::BadSquare(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(bad());
        };
        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => (f as u8 - b'a') as usize,
            _ => return Err(bad()),
        };
        let row = match rank.to_digit(10) {
            Some(r @ 1..=8) => BOARD_SIZE - r as usize,
            _ => return Err(bad()),
        };
        Ok(Position::new(row, col))
    }
}

/// Parses `b2b4`, `b2xb4` or `a2a3=S` into its two squares. Whatever
/// follows `=` is ignored; the rules decide what a merge produces.
pub fn parse_move(text: &str) -> Result<(Position, Position), NotationError> {
    let trimmed = text.trim();
    let body = trimmed.split('=').next().unwrap_or_default();
    let squares: String = body.chars().filter(|&c| c != 'x' && c != '-').collect();
    if squares.len() != 4 || !squares.is_ascii() {
        return Err(NotationError::BadMove(trimmed.to_string()));
    }
    let from = squares[0..2].parse()?;
    let to = squares[2..4].parse()?;
    Ok((from, to))
}
