use super::geometry::Position;
use super::heading::Heading;
use super::motion::move_by;
use crate::consts::{self, COL_WIDTH, STEP_DISTANCE};

/// A chain of cell-sized segments that moves as one
///
/// All positions are relative to the top-left corner of the playfield.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the snake's segments, head first.  Never
    /// empty.
    pub(super) segments: Vec<Position>,
}

impl Snake {
    /// Create a new snake with its head at `head` and the rest of its
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] segments
    /// trailing one cell apart to the left, as befits a snake facing
    /// [`Heading::EAST`]
    pub(super) fn new(head: Position) -> Snake {
        let segments = (0..consts::INITIAL_SNAKE_LENGTH)
            .scan(head, |pos, _| {
                let p = *pos;
                pos.x -= COL_WIDTH;
                Some(p)
            })
            .collect();
        Snake { segments }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.segments[0]
    }

    /// Return the positions of the segments after the head
    pub(super) fn body(&self) -> &[Position] {
        &self.segments[1..]
    }

    /// Return the positions of all segments, head first
    pub(super) fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Move the head one step along `heading`.  Every other segment moves to
    /// where the segment in front of it was before the move.
    pub(super) fn advance(&mut self, heading: Heading) {
        let new_head = move_by(self.head(), STEP_DISTANCE, heading);
        self.segments.rotate_right(1);
        self.segments[0] = new_head;
    }

    /// Has the head run into the rest of the body?
    pub(super) fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body().iter().any(|&p| head.collides_with(p))
    }

    /// Does any segment, including the head, collide with a cell at `pos`?
    pub(super) fn covers(&self, pos: Position) -> bool {
        self.segments.iter().any(|&p| p.collides_with(pos))
    }

    /// Add a segment beyond the tail, continuing the line from the
    /// second-to-last segment through the tail.  If those two coincide, the
    /// new segment is placed one cell to the right of the tail.
    pub(super) fn grow(&mut self) {
        let tail = self.segments[self.segments.len() - 1];
        let offset = match self.segments.len().checked_sub(2) {
            Some(i) if self.segments[i] != tail => tail - self.segments[i],
            _ => Position::new(COL_WIDTH, 0),
        };
        self.segments.push(tail + offset);
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_trails_left() {
        let snake = Snake::new(Position::new(130, 65));
        assert_eq!(
            snake.segments(),
            [
                Position::new(130, 65),
                Position::new(117, 65),
                Position::new(104, 65)
            ]
        );
        assert!(!snake.hits_itself());
    }

    #[test]
    fn advance_shifts_chain() {
        let mut snake = Snake::new(Position::new(130, 65));
        snake.advance(Heading::new(90));
        assert_eq!(
            snake.segments(),
            [
                Position::new(130, 78),
                Position::new(130, 65),
                Position::new(117, 65)
            ]
        );
        snake.advance(Heading::new(180));
        assert_eq!(
            snake.segments(),
            [
                Position::new(117, 78),
                Position::new(130, 78),
                Position::new(130, 65)
            ]
        );
        assert!(!snake.hits_itself());
        snake.advance(Heading::new(270));
        assert_eq!(snake.head(), Position::new(117, 65));
        assert!(!snake.hits_itself());
    }

    #[test]
    fn u_turn_hits_itself() {
        let mut snake = Snake::new(Position::new(130, 65));
        snake.advance(Heading::new(180));
        assert_eq!(snake.head(), Position::new(117, 65));
        assert!(snake.hits_itself());
    }

    #[test]
    fn grow_along_tail_direction() {
        let mut snake = Snake::new(Position::new(130, 65));
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments()[3], Position::new(91, 65));
        snake.advance(Heading::new(90));
        snake.advance(Heading::new(90));
        // Tail is now at (117, 65), trailing (130, 65)
        snake.grow();
        assert_eq!(snake.segments()[4], Position::new(104, 65));
    }

    #[test]
    fn grow_vertical_tail() {
        let mut snake = Snake {
            segments: vec![
                Position::new(50, 50),
                Position::new(50, 37),
                Position::new(50, 24),
            ],
        };
        snake.grow();
        assert_eq!(snake.segments()[3], Position::new(50, 11));
    }

    #[test]
    fn grow_degenerate_tail() {
        let mut snake = Snake {
            segments: vec![
                Position::new(50, 50),
                Position::new(37, 50),
                Position::new(37, 50),
            ],
        };
        snake.grow();
        assert_eq!(snake.segments()[3], Position::new(50, 50));
    }

    #[test]
    fn covers_includes_head() {
        let snake = Snake::new(Position::new(130, 65));
        assert!(snake.covers(Position::new(130, 65)));
        assert!(snake.covers(Position::new(104, 60)));
        assert!(!snake.covers(Position::new(143, 65)));
        assert!(!snake.covers(Position::new(117, 78)));
    }
}
