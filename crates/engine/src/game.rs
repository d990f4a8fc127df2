//! Game context owned by the host: whose turn it is, what has been played,
//! undo/redo and the outcome. The rules and the search never look at it.

use crate::board::{Board, Position, Undo};
use crate::constants::Color;
use crate::notation::{self, NotationError};
use crate::r#move::Move;
use crate::{move_gen, rules};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryReason {
    /// The loser has no Octagon left.
    OctagonsEliminated { loser: Color },
    /// The winner merged its Octagons down to exactly one.
    OctagonConsolidated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victory {
    pub winner: Color,
    pub reason: VictoryReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over, {winner:?} has won")]
    GameOver { winner: Color },
    #[error("there is no piece on {0}")]
    EmptySquare(Position),
    #[error("the piece on {square} is {owner:?}, but {to_move:?} is to move")]
    NotYourPiece {
        square: Position,
        owner: Color,
        to_move: Color,
    },
    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Position, to: Position },
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error(transparent)]
    Notation(#[from] NotationError),
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Color,
    history: Vec<Undo>,
    redo_stack: Vec<Move>,
    outcome: Option<Victory>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard setup, Red to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Red)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
            redo_stack: Vec::new(),
            outcome: eliminated(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn outcome(&self) -> Option<Victory> {
        self.outcome
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|undo| undo.mv)
    }

    /// Destinations to highlight when the piece on `pos` is selected.
    /// Empty unless that piece belongs to the side to move.
    pub fn legal_moves_from(&self, pos: Position) -> Vec<Move> {
        match self.board.get(pos) {
            Some(piece) if piece.color == self.to_move => rules::legal_moves(piece, pos, &self.board),
            _ => Vec::new(),
        }
    }

    /// Whether the side to move has anything to play.
    pub fn has_legal_move(&self) -> bool {
        !move_gen::generate_moves(&self.board, self.to_move).is_empty()
    }

    /// Looks up the legal move between two squares.
    pub fn find_move(&self, from: Position, to: Position) -> Result<Move, GameError> {
        if let Some(victory) = self.outcome {
            return Err(GameError::GameOver { winner: victory.winner });
        }
        let Some(piece) = self.board.get(from) else {
            return Err(GameError::EmptySquare(from));
        };
        if piece.color != self.to_move {
            return Err(GameError::NotYourPiece {
                square: from,
                owner: piece.color,
                to_move: self.to_move,
            });
        }
        rules::legal_moves(piece, from, &self.board)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(GameError::IllegalMove { from, to })
    }

    /// Plays `mv` for the side to move and returns the outcome, if the move
    /// decided the game.
    pub fn play(&mut self, mv: Move) -> Result<Option<Victory>, GameError> {
        let legal = self.find_move(mv.from, mv.to)?;
        if legal != mv {
            return Err(GameError::IllegalMove { from: mv.from, to: mv.to });
        }
        self.redo_stack.clear();
        Ok(self.apply(mv))
    }

    /// Plays a move given in notation, e.g. `b2b4`.
    pub fn play_notation(&mut self, text: &str) -> Result<Move, GameError> {
        let (from, to) = notation::parse_move(text)?;
        let mv = self.find_move(from, to)?;
        self.play(mv)?;
        Ok(mv)
    }

    pub fn undo(&mut self) -> Result<Move, GameError> {
        let undo = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board.unmake_move(undo);
        self.to_move = self.to_move.opponent();
        // Moves are only accepted while the game is undecided.
        self.outcome = None;
        self.redo_stack.push(undo.mv);
        Ok(undo.mv)
    }

    pub fn redo(&mut self) -> Result<Move, GameError> {
        let mv = self.redo_stack.pop().ok_or(GameError::NothingToRedo)?;
        self.apply(mv);
        Ok(mv)
    }

    fn apply(&mut self, mv: Move) -> Option<Victory> {
        let mover = self.to_move;
        let octagons_before = self.board.octagon_count(mover);
        let undo = self.board.make_move(mv);
        self.history.push(undo);
        self.to_move = mover.opponent();

        self.outcome = eliminated(&self.board).or_else(|| {
            let octagons_after = self.board.octagon_count(mover);
            (mv.is_merge() && octagons_before > octagons_after && octagons_after == 1).then_some(
                Victory {
                    winner: mover,
                    reason: VictoryReason::OctagonConsolidated,
                },
            )
        });
        if let Some(victory) = self.outcome {
            log::info!("{:?} wins after {} ({:?})", victory.winner, mv, victory.reason);
        }
        self.outcome
    }
}

fn eliminated(board: &Board) -> Option<Victory> {
    Color::ALL
        .into_iter()
        .find(|&color| board.octagon_count(color) == 0)
        .map(|loser| Victory {
            winner: loser.opponent(),
            reason: VictoryReason::OctagonsEliminated { loser },
        })
}
