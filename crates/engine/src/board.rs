//! The core board representation for the polygon engine.

use crate::constants::{BOARD_SIZE, Color, Direction, NUM_SQUARES, Piece, Tier};
use crate::r#move::{Move, MoveKind};
use std::fmt;

/// Layout of a fresh game: Black Triangles on rows 0-1 with the Octagon on
/// e8, Red Triangles on rows 6-7 with the Octagon on d1.
pub const STANDARD_LAYOUT: &str = "ttttottt/tttttttt/8/8/8/8/TTTTTTTT/TTTOTTTT";

/// A square on the board. Row 0 is the top (Black's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    pub fn from_index(sq: usize) -> Self {
        Self::new(sq / BOARD_SIZE, sq % BOARD_SIZE)
    }

    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// The square `steps` cells away in `dir`, if it is on the board.
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let r = self.row as isize + dr * steps as isize;
        let c = self.col as isize + dc * steps as isize;
        if (0..BOARD_SIZE as isize).contains(&r) && (0..BOARD_SIZE as isize).contains(&c) {
            Some(Position { row: r as usize, col: c as usize })
        } else {
            None
        }
    }

    /// Unit direction pointing from `self` towards `other`.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::from_delta(
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }
}

/// What `Board::make_move` displaced, enough to put the board back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    pub moved: Piece,
    pub replaced: Option<Piece>,
}

/// Represents the state of the 8x8 board. Each square holds at most one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    pub fn standard() -> Self {
        Self::from_layout(STANDARD_LAYOUT)
    }

    /// Builds a board from a layout string: eight `/`-separated ranks from
    /// row 0 down, `TSHO` for Red, `tsho` for Black, digits for empty runs.
    ///
    /// Panics on a malformed layout.
    pub fn from_layout(layout: &str) -> Self {
        let mut board = Board::new();
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        assert_eq!(ranks.len(), BOARD_SIZE, "layout needs {BOARD_SIZE} ranks: {layout}");

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for ch in rank.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run as usize;
                } else {
                    let piece = match Piece::from_layout_char(ch) {
                        Some(piece) => piece,
                        None => panic!("unknown piece '{ch}' in layout {layout}"),
                    };
                    assert!(col < BOARD_SIZE, "rank {row} overflows in layout {layout}");
                    board.set(Position::new(row, col), Some(piece));
                    col += 1;
                }
            }
            assert_eq!(col, BOARD_SIZE, "rank {row} has {col} squares in layout {layout}");
        }
        board
    }

    pub fn to_layout(&self) -> String {
        let mut layout = String::with_capacity(72);
        for row in 0..BOARD_SIZE {
            let mut empty_count = 0;
            for col in 0..BOARD_SIZE {
                match self.squares[row * BOARD_SIZE + col] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            layout.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        layout.push(piece.to_layout_char());
                    }
                }
            }
            if empty_count > 0 {
                layout.push_str(&empty_count.to_string());
            }
            if row < BOARD_SIZE - 1 {
                layout.push('/');
            }
        }
        layout
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_none()
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, piece)| piece.map(|p| (Position::from_index(sq), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: Color, tier: Tier) -> usize {
        self.pieces_of(color).filter(|(_, piece)| piece.tier == tier).count()
    }

    pub fn octagon_count(&self, color: Color) -> usize {
        self.count(color, Tier::Octagon)
    }

    /// The game ends as soon as either side has no Octagon left.
    pub fn is_game_over(&self) -> bool {
        Color::ALL.iter().any(|&color| self.octagon_count(color) == 0)
    }

    /// Applies a move produced by the rules engine.
    ///
    /// Panics if the origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let Some(moved) = self.get(mv.from) else {
            panic!("no piece to move on {}", mv.from);
        };
        let replaced = self.get(mv.to);

        let arriving = match mv.kind {
            MoveKind::Simple | MoveKind::Capture => moved,
            MoveKind::Merge(tier) => Piece::new(moved.color, tier),
        };
        self.set(mv.from, None);
        self.set(mv.to, Some(arriving));

        Undo { mv, moved, replaced }
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        self.set(undo.mv.from, Some(undo.moved));
        self.set(undo.mv.to, undo.replaced);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} | ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let c = self.squares[row * BOARD_SIZE + col].map_or('.', Piece::to_layout_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}
