//! Defines the representation of a move in the engine.

use crate::board::Position;
use crate::constants::{Piece, Tier};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Slide onto an empty square.
    Simple,
    /// Take an enemy piece; the attacker ends on its square.
    Capture,
    /// Slide onto a friendly piece of the same tier; one piece of the
    /// given tier is left on the destination.
    Merge(Tier),
}

/// Represents a single move. Moves are plain descriptions produced by the
/// rules engine, so applying one never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Position, to: Position, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    pub fn is_capture(&self) -> bool {
        self.kind == MoveKind::Capture
    }

    pub fn is_merge(&self) -> bool {
        matches!(self.kind, MoveKind::Merge(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            MoveKind::Simple => write!(f, "{}{}", self.from, self.to),
            MoveKind::Capture => write!(f, "{}x{}", self.from, self.to),
            MoveKind::Merge(tier) => write!(f, "{}{}={}", self.from, self.to, tier.to_char()),
        }
    }
}

/// A move tagged with the piece that makes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedMove {
    pub piece: Piece,
    pub mv: Move,
}
