mod geometry;
mod heading;
mod motion;
mod playfield;
mod snake;
pub(crate) use self::geometry::Position;
pub(crate) use self::heading::{Heading, Turn, TurnStep, TurnStepError};
pub(crate) use self::playfield::Playfield;
use self::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::fmt;

/// Gameplay settings that carry over from one round to the next
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) turn_step: TurnStep,
    pub(crate) playfield: Playfield,
}

/// The state of the game, independent of how it is displayed or how input is
/// received.
///
/// The host calls [`Game::advance()`] once per tick while the round is
/// running, and calls [`Game::turn()`] & [`Game::restart()`] in response to
/// input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: Settings,
    snake: Snake,
    heading: Heading,
    food: Position,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, mut rng: R) -> Game<R> {
        let snake = Snake::new(settings.playfield.random_snake_start(&mut rng));
        let mut game = Game {
            rng,
            settings,
            snake,
            heading: Heading::EAST,
            food: Position::default(),
            state: GameState::Running,
        };
        game.place_food();
        game.log_start();
        game
    }

    /// Discard the current round and start a new one with a fresh snake &
    /// food.  The turn step is kept.
    pub(crate) fn restart(&mut self) {
        self.snake = Snake::new(self.settings.playfield.random_snake_start(&mut self.rng));
        self.heading = Heading::EAST;
        self.state = GameState::Running;
        self.place_food();
        self.log_start();
    }

    /// Move the snake forwards one step and react to whatever it runs into.
    /// Does nothing once the round is over.
    pub(crate) fn advance(&mut self) {
        if !self.running() {
            return;
        }
        self.snake.advance(self.heading);
        let head = self.snake.head();
        if self.settings.playfield.hits_border(head) {
            self.end(Ending::HitBorder);
        } else if self.snake.hits_itself() {
            self.end(Ending::HitSelf);
        } else if head.collides_with(self.food) {
            self.snake.grow();
            log::debug!(
                "Food at {:?} eaten; snake length is now {}",
                self.food,
                self.snake.len()
            );
            self.place_food();
        }
    }

    /// Move the food to a random cell that is off the border and clear of the
    /// snake.  If there is no such cell, the round ends.
    fn place_food(&mut self) {
        match self.find_food_position() {
            Some(pos) => self.food = pos,
            None => self.end(Ending::NoRoom),
        }
    }

    fn find_food_position(&mut self) -> Option<Position> {
        let playfield = self.settings.playfield;
        for _ in 0..consts::MAX_FOOD_ATTEMPTS {
            let pos = playfield.random_cell(&mut self.rng);
            if self.food_allowed_at(pos) {
                return Some(pos);
            }
        }
        log::debug!(
            "No place for food found in {} tries; scanning the whole playfield",
            consts::MAX_FOOD_ATTEMPTS
        );
        let snake = &self.snake;
        playfield
            .cells()
            .filter(|&p| playfield.food_allowed_at(p) && !snake.covers(p))
            .choose(&mut self.rng)
    }
}

impl<R> Game<R> {
    /// Change the heading by the current turn step.  Accepted even after the
    /// round is over, though it then has no effect on play.
    pub(crate) fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turned(turn, self.settings.turn_step);
    }

    pub(crate) fn set_turn_step(&mut self, step: TurnStep) {
        if step != self.settings.turn_step {
            log::debug!("Turn step set to {step}");
            self.settings.turn_step = step;
        }
    }

    /// Positions of the snake's segments, head first
    pub(crate) fn segments(&self) -> &[Position] {
        self.snake.segments()
    }

    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn turn_step(&self) -> TurnStep {
        self.settings.turn_step
    }

    pub(crate) fn playfield(&self) -> Playfield {
        self.settings.playfield
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn is_game_over(&self) -> bool {
        !self.running()
    }

    /// Return why the round ended, or `None` if it's still running
    pub(crate) fn ending(&self) -> Option<Ending> {
        match self.state {
            GameState::Running => None,
            GameState::GameOver(ending) => Some(ending),
        }
    }

    /// Start a round with a fresh snake facing east with its head at `head`
    /// and with the food at `food`
    #[cfg(test)]
    pub(crate) fn stage(&mut self, head: Position, food: Position) {
        self.snake = Snake::new(head);
        self.heading = Heading::EAST;
        self.food = food;
        self.state = GameState::Running;
    }

    fn food_allowed_at(&self, pos: Position) -> bool {
        self.settings.playfield.food_allowed_at(pos) && !self.snake.covers(pos)
    }

    fn end(&mut self, ending: Ending) {
        log::info!(
            "Round over: {ending}; snake length was {}",
            self.snake.len()
        );
        self.state = GameState::GameOver(ending);
    }

    fn log_start(&self) {
        log::info!(
            "New round on {} playfield: head at {:?}, food at {:?}",
            self.settings.playfield,
            self.snake.head(),
            self.food
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    GameOver(Ending),
}

/// Why a round ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The snake's head hit the edge of the playfield
    HitBorder,
    /// The snake's head ran into the rest of its body
    HitSelf,
    /// The snake has filled the playfield and there is nowhere left to place
    /// food.
    NoRoom,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Ending::HitBorder => "the snake hit the wall",
            Ending::HitSelf => "the snake bit itself",
            Ending::NoRoom => "there is no room left for food",
        };
        f.pad(msg)
    }
}
