use crate::consts::{COLLISION_THRESHOLD, COL_WIDTH, ROW_HEIGHT};
use std::ops::{Add, Sub};

/// The top-left corner of a cell-sized box on the playfield.
///
/// The origin is the top-left corner of the playfield, and y increases
/// downwards.  Coordinates may be negative once the snake has run off the
/// playfield.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Move the position up & left onto the nearest cell boundary
    pub(crate) fn snap_to_grid(self) -> Position {
        Position {
            x: self.x.div_euclid(COL_WIDTH) * COL_WIDTH,
            y: self.y.div_euclid(ROW_HEIGHT) * ROW_HEIGHT,
        }
    }

    /// Does the cell at `self` overlap the cell at `other` by more than
    /// [`COLLISION_THRESHOLD`]?
    pub(crate) fn collides_with(self, other: Position) -> bool {
        intersection(self, other) > COLLISION_THRESHOLD
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Return the area of the overlap between the cell-sized boxes with top-left
/// corners at `a` and `b`
pub(crate) fn intersection(a: Position, b: Position) -> i32 {
    let left = a.x.max(b.x);
    let top = a.y.max(b.y);
    let right = (a.x + COL_WIDTH).min(b.x + COL_WIDTH);
    let bottom = (a.y + ROW_HEIGHT).min(b.y + ROW_HEIGHT);
    (right - left).max(0) * (bottom - top).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(100, 100), Position::new(100, 100), 169)]
    #[case(Position::new(100, 100), Position::new(113, 100), 0)]
    #[case(Position::new(100, 100), Position::new(106, 100), 91)]
    #[case(Position::new(106, 100), Position::new(100, 100), 91)]
    #[case(Position::new(100, 100), Position::new(106, 106), 49)]
    #[case(Position::new(100, 100), Position::new(111, 106), 14)]
    #[case(Position::new(100, 100), Position::new(150, 20), 0)]
    #[case(Position::new(-5, -5), Position::new(0, 0), 64)]
    fn test_intersection(#[case] a: Position, #[case] b: Position, #[case] area: i32) {
        assert_eq!(intersection(a, b), area);
        assert_eq!(intersection(b, a), area);
    }

    #[rstest]
    #[case(Position::new(100, 100), Position::new(100, 100), true)]
    #[case(Position::new(100, 100), Position::new(113, 100), false)]
    #[case(Position::new(100, 100), Position::new(106, 100), true)]
    #[case(Position::new(100, 100), Position::new(111, 106), false)]
    // 2 × 10 = 20, which is not above the threshold
    #[case(Position::new(100, 100), Position::new(111, 103), false)]
    #[case(Position::new(100, 100), Position::new(111, 102), true)]
    fn test_collides_with(#[case] a: Position, #[case] b: Position, #[case] collides: bool) {
        assert_eq!(a.collides_with(b), collides);
    }

    #[rstest]
    #[case(Position::new(0, 0), Position::new(0, 0))]
    #[case(Position::new(12, 25), Position::new(0, 13))]
    #[case(Position::new(13, 26), Position::new(13, 26))]
    #[case(Position::new(481, 234), Position::new(481, 234))]
    #[case(Position::new(-1, 5), Position::new(-13, 0))]
    fn test_snap_to_grid(#[case] before: Position, #[case] after: Position) {
        assert_eq!(before.snap_to_grid(), after);
    }
}
