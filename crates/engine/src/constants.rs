//! Constants used in the polygon engine: colors, tiers, directions and the
//! per-tier lookup tables every rule is driven from.

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Get the opponent of this color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Index into per-color arrays (0 for Red, 1 for Black).
    pub fn index(self) -> usize {
        if self == Color::Red { 0 } else { 1 }
    }
}

/// Piece rank. Two pieces of one tier merge into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    Triangle = 0,
    Square = 1,
    Hexagon = 2,
    Octagon = 3,
}

// --- Per-tier tables ---
// Indexed by `tier as usize`.
pub const STEP_LIMITS: [usize; 4] = [3, 4, 6, 8];
pub const CORNER_COUNTS: [u8; 4] = [3, 4, 6, 8];
pub const MATERIAL_VALUES: [i32; 4] = [
    100,  // TRIANGLE
    300,  // SQUARE
    900,  // HEXAGON
    2700, // OCTAGON
];

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Triangle, Tier::Square, Tier::Hexagon, Tier::Octagon];

    /// Maximum slide distance.
    pub fn step_limit(self) -> usize {
        STEP_LIMITS[self as usize]
    }

    pub fn corner_count(self) -> u8 {
        CORNER_COUNTS[self as usize]
    }

    /// Material value used by the evaluator.
    pub fn value(self) -> i32 {
        MATERIAL_VALUES[self as usize]
    }

    /// The tier produced by merging two pieces of this tier.
    /// Octagons stay Octagons.
    pub fn merged(self) -> Tier {
        match self {
            Tier::Triangle => Tier::Square,
            Tier::Square => Tier::Hexagon,
            Tier::Hexagon | Tier::Octagon => Tier::Octagon,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tier::Triangle => 'T',
            Tier::Square => 'S',
            Tier::Hexagon => 'H',
            Tier::Octagon => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Tier> {
        match c.to_ascii_uppercase() {
            'T' => Some(Tier::Triangle),
            'S' => Some(Tier::Square),
            'H' => Some(Tier::Hexagon),
            'O' => Some(Tier::Octagon),
            _ => None,
        }
    }
}

/// The eight compass directions. Row 0 is the top of the board, so `N`
/// decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

use Direction::*;

impl Direction {
    pub const ALL: [Direction; 8] = [N, S, E, W, NE, NW, SE, SW];

    /// (row delta, col delta) of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            N => (-1, 0),
            S => (1, 0),
            E => (0, 1),
            W => (0, -1),
            NE => (-1, 1),
            NW => (-1, -1),
            SE => (1, 1),
            SW => (1, -1),
        }
    }

    /// Maps a step of any length to its unit direction.
    /// Returns `None` for the null step.
    pub fn from_delta(dr: isize, dc: isize) -> Option<Direction> {
        match (dr.signum(), dc.signum()) {
            (-1, 0) => Some(N),
            (1, 0) => Some(S),
            (0, 1) => Some(E),
            (0, -1) => Some(W),
            (-1, 1) => Some(NE),
            (-1, -1) => Some(NW),
            (1, 1) => Some(SE),
            (1, -1) => Some(SW),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

// --- Direction sets ---
const RED_TRIANGLE_MOVES: [Direction; 3] = [N, SW, SE];
const BLACK_TRIANGLE_MOVES: [Direction; 3] = [S, NW, NE];
const SQUARE_MOVES: [Direction; 4] = [N, S, E, W];
const HEXAGON_MOVES: [Direction; 6] = [N, S, NE, NW, SE, SW];
const OCTAGON_MOVES: [Direction; 8] = Direction::ALL;

// --- Front (facing) directions ---
const RED_TRIANGLE_FRONT: [Direction; 1] = [N];
const BLACK_TRIANGLE_FRONT: [Direction; 1] = [S];
const SQUARE_FRONT: [Direction; 4] = [N, E, S, W];
const RED_HEXAGON_FRONT: [Direction; 3] = [N, NE, NW];
const BLACK_HEXAGON_FRONT: [Direction; 3] = [S, SE, SW];
const OCTAGON_FRONT: [Direction; 8] = Direction::ALL;

/// Directions a piece of `tier` and `color` may slide in, in generation order.
pub fn direction_set(tier: Tier, color: Color) -> &'static [Direction] {
    match (tier, color) {
        (Tier::Triangle, Color::Red) => &RED_TRIANGLE_MOVES,
        (Tier::Triangle, Color::Black) => &BLACK_TRIANGLE_MOVES,
        (Tier::Square, _) => &SQUARE_MOVES,
        (Tier::Hexagon, _) => &HEXAGON_MOVES,
        (Tier::Octagon, _) => &OCTAGON_MOVES,
    }
}

/// Attack directions that count as hitting the piece head-on.
pub fn front_directions(tier: Tier, color: Color) -> &'static [Direction] {
    match (tier, color) {
        (Tier::Triangle, Color::Red) => &RED_TRIANGLE_FRONT,
        (Tier::Triangle, Color::Black) => &BLACK_TRIANGLE_FRONT,
        (Tier::Square, _) => &SQUARE_FRONT,
        (Tier::Hexagon, Color::Red) => &RED_HEXAGON_FRONT,
        (Tier::Hexagon, Color::Black) => &BLACK_HEXAGON_FRONT,
        (Tier::Octagon, _) => &OCTAGON_FRONT,
    }
}

/// A piece on the board. Pieces are plain values; a merge produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub tier: Tier,
}

impl Piece {
    pub const fn new(color: Color, tier: Tier) -> Self {
        Self { color, tier }
    }

    pub fn value(self) -> i32 {
        self.tier.value()
    }

    pub fn directions(self) -> &'static [Direction] {
        direction_set(self.tier, self.color)
    }

    pub fn front_directions(self) -> &'static [Direction] {
        front_directions(self.tier, self.color)
    }

    /// Layout character: upper case for Red, lower case for Black.
    pub fn to_layout_char(self) -> char {
        let c = self.tier.to_char();
        match self.color {
            Color::Red => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_layout_char(c: char) -> Option<Piece> {
        let tier = Tier::from_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Black };
        Some(Piece::new(color, tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_tables_escalate() {
        assert_eq!(Tier::ALL.map(Tier::step_limit), [3, 4, 6, 8]);
        assert_eq!(Tier::ALL.map(Tier::corner_count), [3, 4, 6, 8]);
        assert_eq!(Tier::ALL.map(Tier::value), [100, 300, 900, 2700]);
    }

    #[test]
    fn merged_tier_caps_at_octagon() {
        assert_eq!(Tier::Triangle.merged(), Tier::Square);
        assert_eq!(Tier::Square.merged(), Tier::Hexagon);
        assert_eq!(Tier::Hexagon.merged(), Tier::Octagon);
        assert_eq!(Tier::Octagon.merged(), Tier::Octagon);
    }

    #[test]
    fn hexagons_never_slide_sideways() {
        for color in Color::ALL {
            let dirs = direction_set(Tier::Hexagon, color);
            assert_eq!(dirs.len(), 6);
            assert!(!dirs.contains(&E) && !dirs.contains(&W));
        }
    }

    #[test]
    fn from_delta_normalises_long_steps() {
        assert_eq!(Direction::from_delta(-5, 0), Some(N));
        assert_eq!(Direction::from_delta(3, -3), Some(SW));
        assert_eq!(Direction::from_delta(0, 0), None);
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(Direction::from_delta(dr * 2, dc * 2), Some(dir));
        }
    }

    #[test]
    fn layout_chars_carry_color() {
        let red_oct = Piece::new(Color::Red, Tier::Octagon);
        assert_eq!(red_oct.to_layout_char(), 'O');
        assert_eq!(Piece::from_layout_char('h'), Some(Piece::new(Color::Black, Tier::Hexagon)));
        assert_eq!(Piece::from_layout_char('x'), None);
    }
}
