use super::geometry::Position;
use crate::consts::{self, COL_WIDTH, ROW_HEIGHT};
use crate::random::{random_in, random_position};
use rand::Rng;
use std::fmt;

/// The dimensions of the area the snake moves around in, measured in cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Playfield {
    columns: u16,
    rows: u16,
}

impl Playfield {
    /// Return `None` if either dimension is outside the range that the
    /// terminal display can show
    pub(crate) fn new(columns: u16, rows: u16) -> Option<Playfield> {
        ((consts::MIN_COLUMNS..=consts::MAX_COLUMNS).contains(&columns)
            && (consts::MIN_ROWS..=consts::MAX_ROWS).contains(&rows))
        .then_some(Playfield { columns, rows })
    }

    pub(crate) fn columns(self) -> u16 {
        self.columns
    }

    pub(crate) fn rows(self) -> u16 {
        self.rows
    }

    /// Width in playfield units
    pub(crate) fn width(self) -> i32 {
        i32::from(self.columns) * COL_WIDTH
    }

    /// Height in playfield units
    pub(crate) fn height(self) -> i32 {
        i32::from(self.rows) * ROW_HEIGHT
    }

    /// Has a head at `pos` hit or passed the border?
    pub(crate) fn hits_border(self, pos: Position) -> bool {
        pos.x <= 0 || pos.y <= 0 || pos.x >= self.width() || pos.y >= self.height()
    }

    /// Is `pos` far enough from the border for food to be placed there?
    pub(crate) fn food_allowed_at(self, pos: Position) -> bool {
        pos.x != 0
            && pos.y != 0
            && pos.x < self.width() - 2 * COL_WIDTH
            && pos.y < self.height() - 2 * ROW_HEIGHT
    }

    /// Draw a random grid-aligned position that could hold food, without
    /// regard for where the snake is
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        random_position(rng, self.width() - COL_WIDTH, self.height() - ROW_HEIGHT).snap_to_grid()
    }

    /// Choose a random grid-aligned position for the head of a new snake such
    /// that the head and the
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] − 1 segments
    /// trailing to its left are all off the border
    pub(crate) fn random_snake_start<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        let col = random_in(
            rng,
            consts::INITIAL_SNAKE_LENGTH,
            i32::from(self.columns) - 2,
        );
        let row = random_in(rng, 1, i32::from(self.rows) - 2);
        Position::new(col * COL_WIDTH, row * ROW_HEIGHT)
    }

    /// Iterate over the top-left corners of every cell, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Position> {
        let Playfield { columns, rows } = self;
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |col| {
                Position::new(i32::from(col) * COL_WIDTH, i32::from(row) * ROW_HEIGHT)
            })
        })
    }
}

impl Default for Playfield {
    fn default() -> Playfield {
        Playfield {
            columns: consts::DEFAULT_COLUMNS,
            rows: consts::DEFAULT_ROWS,
        }
    }
}

impl fmt::Display for Playfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} cells", self.columns, self.rows)
    }
}
