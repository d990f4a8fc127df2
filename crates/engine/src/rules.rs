//! Movement and combat rules: sliding, directional captures and merges.

use crate::board::{Board, Position};
use crate::constants::{Color, Direction, NUM_SQUARES, Piece, Tier};
use crate::r#move::{Move, MoveKind};
use once_cell::sync::Lazy;

use Direction::*;

/// Pre-computed rays for every square, nearest square first.
/// Initialised once and then shared by every slide.
pub struct RayTables {
    pub rays: [[Vec<Position>; 8]; NUM_SQUARES], // [square][direction]
}

impl RayTables {
    fn new() -> Self {
        let rays: [[Vec<Position>; 8]; NUM_SQUARES] = std::array::from_fn(|sq| {
            let origin = Position::from_index(sq);
            std::array::from_fn(|d| {
                let dir = Direction::ALL[d];
                (1..)
                    .map_while(|steps| origin.offset(dir, steps))
                    .collect()
            })
        });
        RayTables { rays }
    }
}

pub static RAY_TABLES: Lazy<RayTables> = Lazy::new(RayTables::new);

/// Squares reachable from `from` walking in `dir` on an empty board.
pub fn ray(from: Position, dir: Direction) -> &'static [Position] {
    &RAY_TABLES.rays[from.index()][dir.index()]
}

// --- Capture tables ---
// Attack directions (attacker -> defender) that succeed, per pairing.
const RED_SQUARE_ON_TRIANGLE: [Direction; 5] = [S, W, E, SW, SE];
const BLACK_SQUARE_ON_TRIANGLE: [Direction; 5] = [N, W, E, NW, NE];
const RED_HEXAGON_ON_TRIANGLE: [Direction; 3] = [S, SW, SE];
const BLACK_HEXAGON_ON_TRIANGLE: [Direction; 3] = [N, NW, NE];
const RED_OCTAGON_ON_TRIANGLE: [Direction; 5] = [S, W, E, NW, NE];
const BLACK_OCTAGON_ON_TRIANGLE: [Direction; 5] = [N, W, E, SW, SE];
const OCTAGON_ON_SQUARE: [Direction; 4] = [NW, NE, SW, SE];
const OCTAGON_ON_HEXAGON: [Direction; 2] = [W, E];

/// The explicit direction table for this pairing, or `None` when the
/// facing/corner-count rule decides.
pub fn capture_table(attacker: Piece, defender: Piece) -> Option<&'static [Direction]> {
    match (defender.tier, attacker.tier, attacker.color) {
        (Tier::Triangle, Tier::Square, Color::Red) => Some(&RED_SQUARE_ON_TRIANGLE),
        (Tier::Triangle, Tier::Square, Color::Black) => Some(&BLACK_SQUARE_ON_TRIANGLE),
        (Tier::Triangle, Tier::Hexagon, Color::Red) => Some(&RED_HEXAGON_ON_TRIANGLE),
        (Tier::Triangle, Tier::Hexagon, Color::Black) => Some(&BLACK_HEXAGON_ON_TRIANGLE),
        (Tier::Triangle, Tier::Octagon, Color::Red) => Some(&RED_OCTAGON_ON_TRIANGLE),
        (Tier::Triangle, Tier::Octagon, Color::Black) => Some(&BLACK_OCTAGON_ON_TRIANGLE),
        (Tier::Square, Tier::Octagon, _) => Some(&OCTAGON_ON_SQUARE),
        (Tier::Hexagon, Tier::Octagon, _) => Some(&OCTAGON_ON_HEXAGON),
        _ => None,
    }
}

/// Whether `attacker` on `attacker_pos` may take `defender` on `defender_pos`.
pub fn can_capture(
    attacker: Piece,
    attacker_pos: Position,
    defender: Piece,
    defender_pos: Position,
) -> bool {
    if attacker.color == defender.color {
        return false;
    }
    let Some(dir) = attacker_pos.direction_to(defender_pos) else {
        panic!("attacker and defender share square {attacker_pos}");
    };

    match capture_table(attacker, defender) {
        Some(allowed) => allowed.contains(&dir),
        None => {
            // Flank and rear attacks always land; head-on ones need the
            // attacker to have no more corners than the defender.
            let head_on = defender.front_directions().contains(&dir);
            !head_on || attacker.tier.corner_count() <= defender.tier.corner_count()
        }
    }
}

/// The piece left behind when `a` slides onto `b`, if they merge.
pub fn merge_with(a: Piece, b: Piece) -> Option<Piece> {
    if a.color == b.color && a.tier == b.tier {
        Some(Piece::new(a.color, a.tier.merged()))
    } else {
        None
    }
}

/// Every move `piece` can make from `from`.
pub fn legal_moves(piece: Piece, from: Position, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    push_legal_moves(piece, from, board, &mut moves);
    moves
}

/// Appends the moves of `piece` on `from` to `moves`.
///
/// Each direction is scanned outward up to the tier's step limit and stops
/// at the first occupied square, which yields at most one merge or capture.
pub fn push_legal_moves(piece: Piece, from: Position, board: &Board, moves: &mut Vec<Move>) {
    let limit = piece.tier.step_limit();
    for &dir in piece.directions() {
        for &to in ray(from, dir).iter().take(limit) {
            let Some(target) = board.get(to) else {
                moves.push(Move::new(from, to, MoveKind::Simple));
                continue;
            };
            if target.color == piece.color {
                if let Some(merged) = merge_with(piece, target) {
                    moves.push(Move::new(from, to, MoveKind::Merge(merged.tier)));
                }
            } else if can_capture(piece, from, target, to) {
                moves.push(Move::new(from, to, MoveKind::Capture));
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_TRI: Piece = Piece::new(Color::Red, Tier::Triangle);
    const BLACK_TRI: Piece = Piece::new(Color::Black, Tier::Triangle);

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Defender placed one step from the attacker in `dir`.
    fn captures_towards(attacker: Piece, defender: Piece, dir: Direction) -> bool {
        let from = pos(3, 3);
        let to = from.offset(dir, 1).unwrap();
        can_capture(attacker, from, defender, to)
    }

    fn allowed_set(attacker: Piece, defender: Piece) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| captures_towards(attacker, defender, d))
            .collect()
    }

    #[test]
    fn rays_shrink_towards_edges() {
        assert_eq!(ray(pos(0, 0), N).len(), 0);
        assert_eq!(ray(pos(0, 0), S).len(), 7);
        assert_eq!(ray(pos(3, 3), NE), &[pos(2, 4), pos(1, 5), pos(0, 6)]);
    }

    #[test]
    fn triangle_defence_table_is_exact() {
        use Tier::*;
        let cases: [(Tier, Color, &[Direction]); 6] = [
            (Square, Color::Red, &[S, W, E, SW, SE]),
            (Square, Color::Black, &[N, W, E, NW, NE]),
            (Hexagon, Color::Red, &[S, SW, SE]),
            (Hexagon, Color::Black, &[N, NW, NE]),
            (Octagon, Color::Red, &[S, W, E, NW, NE]),
            (Octagon, Color::Black, &[N, W, E, SW, SE]),
        ];
        for (tier, color, expected) in cases {
            let attacker = Piece::new(color, tier);
            let defender = Piece::new(color.opponent(), Triangle);
            let mut got = allowed_set(attacker, defender);
            let mut want = expected.to_vec();
            got.sort_by_key(|d| d.index());
            want.sort_by_key(|d| d.index());
            assert_eq!(got, want, "{color:?} {tier:?} attacking a Triangle");
        }
    }

    #[test]
    fn black_square_takes_triangle_from_the_south_red_square_cannot_strike_north() {
        let black_square = Piece::new(Color::Black, Tier::Square);
        let red_square = Piece::new(Color::Red, Tier::Square);
        // Black square below the triangle, striking northwards.
        assert!(can_capture(black_square, pos(5, 2), RED_TRI, pos(4, 2)));
        // Red square below a triangle, striking northwards.
        assert!(!can_capture(red_square, pos(5, 2), BLACK_TRI, pos(4, 2)));
    }

    #[test]
    fn octagon_only_takes_squares_diagonally_and_hexagons_sideways() {
        for color in Color::ALL {
            let oct = Piece::new(color, Tier::Octagon);
            let square = Piece::new(color.opponent(), Tier::Square);
            let hexagon = Piece::new(color.opponent(), Tier::Hexagon);
            assert_eq!(allowed_set(oct, square), vec![NE, NW, SE, SW]);
            assert_eq!(allowed_set(oct, hexagon), vec![E, W]);
        }
    }

    #[test]
    fn fallback_rule_uses_facing_and_corners() {
        let red_hex = Piece::new(Color::Red, Tier::Hexagon);
        let black_square = Piece::new(Color::Black, Tier::Square);
        // Squares face every orthogonal, so a six-cornered attacker only
        // gets through on a diagonal.
        assert_eq!(allowed_set(red_hex, black_square), vec![NE, NW, SE, SW]);

        // Fewer corners always win, head-on or not.
        let red_tri = RED_TRI;
        let black_oct = Piece::new(Color::Black, Tier::Octagon);
        assert_eq!(allowed_set(red_tri, black_oct).len(), 8);
        assert_eq!(allowed_set(black_square, Piece::new(Color::Red, Tier::Hexagon)).len(), 8);

        // Equal tiers of opposite color always trade.
        for tier in Tier::ALL {
            let a = Piece::new(Color::Red, tier);
            let d = Piece::new(Color::Black, tier);
            assert_eq!(allowed_set(a, d).len(), 8, "{tier:?}");
        }
    }

    #[test]
    fn never_captures_own_color() {
        for a in Tier::ALL {
            for d in Tier::ALL {
                let attacker = Piece::new(Color::Black, a);
                let defender = Piece::new(Color::Black, d);
                assert!(allowed_set(attacker, defender).is_empty());
            }
        }
    }

    #[test]
    fn merge_is_symmetric_and_tier_bound() {
        for color in Color::ALL {
            for a in Tier::ALL {
                for b in Tier::ALL {
                    let pa = Piece::new(color, a);
                    let pb = Piece::new(color, b);
                    assert_eq!(merge_with(pa, pb), merge_with(pb, pa));
                    if a == b {
                        assert_eq!(merge_with(pa, pb), Some(Piece::new(color, a.merged())));
                    } else {
                        assert_eq!(merge_with(pa, pb), None);
                    }
                }
            }
        }
        let red_oct = Piece::new(Color::Red, Tier::Octagon);
        assert_eq!(merge_with(red_oct, red_oct), Some(red_oct));
        assert_eq!(merge_with(RED_TRI, BLACK_TRI), None);
    }

    #[test]
    fn red_triangle_slides_north_and_back_diagonals() {
        let board = Board::from_layout("4o3/8/8/8/8/3T4/8/3O4");
        let moves = legal_moves(RED_TRI, pos(5, 3), &board);
        let targets: Vec<Position> = moves.iter().map(|m| m.to).collect();
        // N for three steps, SW and SE until the edge.
        assert_eq!(
            targets,
            vec![pos(4, 3), pos(3, 3), pos(2, 3), pos(6, 2), pos(7, 1), pos(6, 4), pos(7, 5)]
        );
        assert!(moves.iter().all(|m| m.kind == MoveKind::Simple));
    }

    #[test]
    fn friendly_blocker_of_another_tier_blocks_without_a_move() {
        let board = Board::from_layout("4o3/8/8/8/8/3S4/3T4/3O4");
        let moves = legal_moves(RED_TRI, pos(6, 3), &board);
        assert!(moves.iter().all(|m| m.to != pos(5, 3) && m.to.row >= 6));
    }

    #[test]
    fn same_tier_friend_yields_merge_and_stops_scan() {
        let board = Board::from_layout("4o3/8/8/3T4/8/3T4/8/3O4");
        let moves = legal_moves(RED_TRI, pos(5, 3), &board);
        let north: Vec<&Move> = moves.iter().filter(|m| m.to.col == 3 && m.to.row < 5).collect();
        assert_eq!(north.len(), 2);
        assert_eq!(north[1].kind, MoveKind::Merge(Tier::Square));
        assert_eq!(north[1].to, pos(3, 3));
    }

    #[test]
    fn enemy_blocker_stops_scan_even_without_capture() {
        // Red square moving north into a black triangle: not in its table.
        let board = Board::from_layout("4o3/3t4/8/8/3S4/8/8/3O4");
        let red_square = Piece::new(Color::Red, Tier::Square);
        let moves = legal_moves(red_square, pos(4, 3), &board);
        assert!(moves.iter().all(|m| !(m.to.col == 3 && m.to.row <= 1)));
        assert!(moves.iter().any(|m| m.to == pos(2, 3)));
    }

    #[test]
    fn octagon_slides_the_whole_board() {
        let board = Board::from_layout("8/8/8/8/8/8/8/O7");
        let red_oct = Piece::new(Color::Red, Tier::Octagon);
        assert_eq!(legal_moves(red_oct, pos(7, 0), &board).len(), 21);
    }
}
