//! Evaluates a board position and returns a score.

use crate::board::Board;
use crate::config::Config;
use crate::constants::{Color, Direction};
use crate::move_gen;

/// Evaluation terms for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideScore {
    pub material: i32,
    pub mobility: i32,
    pub merge_potential: i32,
}

impl SideScore {
    pub fn total(&self) -> i32 {
        self.material + self.mobility + self.merge_potential
    }
}

pub fn side_score(board: &Board, color: Color, config: &Config) -> SideScore {
    SideScore {
        material: calculate_material_score(board, color),
        mobility: calculate_mobility_score(board, color, config),
        merge_potential: calculate_merge_potential(board, color, config),
    }
}

/// Scores `board` for `perspective`: each term for that side minus the same
/// term for the opponent. Terminal positions get no special bonus.
pub fn evaluate(board: &Board, perspective: Color, config: &Config) -> i32 {
    side_score(board, perspective, config).total()
        - side_score(board, perspective.opponent(), config).total()
}

fn calculate_material_score(board: &Board, color: Color) -> i32 {
    board.pieces_of(color).map(|(_, piece)| piece.value()).sum()
}

fn calculate_mobility_score(board: &Board, color: Color, config: &Config) -> i32 {
    move_gen::count_moves(board, color) as i32 * config.mobility_weight
}

/// Bonus for same-tier friendly pieces sitting orthogonally next to each
/// other. Each pair is counted once by only looking east and south.
fn calculate_merge_potential(board: &Board, color: Color, config: &Config) -> i32 {
    let mut pairs = 0;
    for (pos, piece) in board.pieces_of(color) {
        for dir in [Direction::E, Direction::S] {
            if let Some(neighbour) = pos.offset(dir, 1).and_then(|p| board.get(p)) {
                if neighbour == piece {
                    pairs += 1;
                }
            }
        }
    }
    pairs * config.merge_pair_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARDS: [&str; 5] = [
        crate::board::STANDARD_LAYOUT,
        "4o3/8/2s5/8/8/8/TT6/3O4",
        "3oo3/1hh5/8/2S1s3/8/4H3/TT1TT3/3O4",
        "8/8/8/3t4/8/8/8/3O4",
        "o7/tsht4/8/8/8/8/8/SSHO4",
    ];

    #[test]
    fn evaluation_is_zero_sum() {
        let config = Config::default();
        for layout in BOARDS {
            let board = Board::from_layout(layout);
            assert_eq!(
                evaluate(&board, Color::Red, &config),
                -evaluate(&board, Color::Black, &config),
                "{layout}"
            );
        }
    }

    #[test]
    fn standard_position_is_balanced() {
        let board = Board::standard();
        assert_eq!(evaluate(&board, Color::Red, &Config::default()), 0);
    }

    #[test]
    fn material_uses_tier_values() {
        let board = Board::from_layout("o7/tsht4/8/8/8/8/8/SSHO4");
        let config = Config::default();
        assert_eq!(side_score(&board, Color::Red, &config).material, 300 + 300 + 900 + 2700);
        assert_eq!(side_score(&board, Color::Black, &config).material, 2700 + 100 + 300 + 900 + 100);
    }

    #[test]
    fn merge_pairs_are_orthogonal_only() {
        let config = Config::default();
        // One horizontal pair.
        let board = Board::from_layout("4o3/8/8/8/8/8/TT6/3O4");
        assert_eq!(side_score(&board, Color::Red, &config).merge_potential, 50);
        // Diagonal neighbours do not count.
        let board = Board::from_layout("4o3/8/8/8/8/T7/1T6/3O4");
        assert_eq!(side_score(&board, Color::Red, &config).merge_potential, 0);
        // An L of three gives two pairs; the mixed-tier neighbour none.
        let board = Board::from_layout("4o3/8/8/8/8/T7/TTS5/3O4");
        assert_eq!(side_score(&board, Color::Red, &config).merge_potential, 100);
    }

    #[test]
    fn mobility_scales_with_move_count() {
        let config = Config::default();
        let board = Board::from_layout("8/8/8/8/8/8/8/O7");
        assert_eq!(side_score(&board, Color::Red, &config).mobility, 210);
        assert_eq!(side_score(&board, Color::Black, &config), SideScore::default());
    }
}
