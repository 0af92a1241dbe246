use crate::consts;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The direction in which the snake is travelling, in degrees clockwise from
/// the positive x axis.  Always in `0..360`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Heading(i32);

impl Heading {
    /// Facing right, towards increasing x
    pub(crate) const EAST: Heading = Heading(0);

    /// Create a heading of `degrees`, normalized into `0..360`
    pub(crate) fn new(degrees: i32) -> Heading {
        Heading(degrees.rem_euclid(360))
    }

    pub(crate) fn degrees(self) -> i32 {
        self.0
    }

    pub(crate) fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    /// Return the heading after turning in direction `turn` by `step`
    pub(crate) fn turned(self, turn: Turn, step: TurnStep) -> Heading {
        let step = i32::from(step.get());
        match turn {
            Turn::Left => Heading::new(self.0 - step),
            Turn::Right => Heading::new(self.0 + step),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A turn command.  Since the playfield's y axis points down, a left turn is
/// counterclockwise on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Turn {
    Left,
    Right,
}

/// The number of degrees by which a single turn changes the heading
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TurnStep(u16);

impl TurnStep {
    pub(crate) fn new(degrees: u16) -> Option<TurnStep> {
        (degrees <= consts::MAX_TURN_STEP).then_some(TurnStep(degrees))
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }

    pub(crate) fn increase(&mut self) {
        self.0 = self
            .0
            .saturating_add(consts::TURN_STEP_INCREMENT)
            .min(consts::MAX_TURN_STEP);
    }

    pub(crate) fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(consts::TURN_STEP_INCREMENT);
    }
}

impl Default for TurnStep {
    fn default() -> TurnStep {
        TurnStep(consts::DEFAULT_TURN_STEP)
    }
}

impl fmt::Display for TurnStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl TryFrom<u16> for TurnStep {
    type Error = TurnStepError;

    fn try_from(value: u16) -> Result<TurnStep, TurnStepError> {
        TurnStep::new(value).ok_or(TurnStepError::OutOfRange(value))
    }
}

impl FromStr for TurnStep {
    type Err = TurnStepError;

    fn from_str(s: &str) -> Result<TurnStep, TurnStepError> {
        s.trim().parse::<u16>()?.try_into()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum TurnStepError {
    #[error("turn step must be between 0 and {max} degrees, got {0}", max = consts::MAX_TURN_STEP)]
    OutOfRange(u16),
    #[error("turn step is not a valid number of degrees")]
    Parse(#[from] std::num::ParseIntError),
}
