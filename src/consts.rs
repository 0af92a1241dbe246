//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of one playfield cell, in playfield units
pub(crate) const COL_WIDTH: i32 = 13;

/// Height of one playfield cell, in playfield units
pub(crate) const ROW_HEIGHT: i32 = 13;

/// Distance the snake's head travels each tick
pub(crate) const STEP_DISTANCE: i32 = COL_WIDTH;

/// Two cells collide when the area of their overlap is greater than this
pub(crate) const COLLISION_THRESHOLD: i32 = 20;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(300);

/// Number of segments (including the head) in a new snake.  The head of a new
/// snake is placed at this column or further right so that the segments
/// trailing it stay off the left border.
pub(crate) const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Default number of degrees the heading changes by on each turn
pub(crate) const DEFAULT_TURN_STEP: u16 = 30;

/// Largest permitted turn step, in degrees
pub(crate) const MAX_TURN_STEP: u16 = 360;

/// Amount by which the turn step is adjusted from the keyboard
pub(crate) const TURN_STEP_INCREMENT: u16 = 5;

/// Number of random food positions to try before falling back to scanning
/// every cell of the playfield
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Default playfield width, in cells
pub(crate) const DEFAULT_COLUMNS: u16 = 38;

/// Default playfield height, in cells
pub(crate) const DEFAULT_ROWS: u16 = 19;

/// Smallest & largest permitted playfield widths, in cells
pub(crate) const MIN_COLUMNS: u16 = 6;
pub(crate) const MAX_COLUMNS: u16 = 38;

// A new snake's head must fit between its trailing body and the right border
// on the narrowest playfield
const _: () = assert!(
    INITIAL_SNAKE_LENGTH <= MIN_COLUMNS as i32 - 2,
    "playfield too narrow for a new snake"
);

/// Smallest & largest permitted playfield heights, in cells
pub(crate) const MIN_ROWS: u16 = 5;
pub(crate) const MAX_ROWS: u16 = 19;

/// Number of terminal columns used to draw one playfield cell
pub(crate) const CELL_DISPLAY_WIDTH: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▒▒";

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyphs for the snake's head when it's collided with the border or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
