use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::{Ending, Game, Position, Turn};
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::{Duration, Instant};

/// The game screen: drives a [`Game`] from the terminal's event stream and a
/// fixed-period timer, and draws it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PlayScreen<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl<R: rand::Rng> PlayScreen<R> {
    pub(crate) fn new(game: Game<R>, tick_period: Duration) -> Self {
        PlayScreen {
            game,
            tick_period,
            next_tick: None,
        }
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and handle it.  While the round is over, no ticks are
    /// scheduled and this blocks until an event arrives.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.game.running() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + self.tick_period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.game.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Left => self.game.turn(Turn::Left),
            Command::Right => self.game.turn(Turn::Right),
            Command::Wider => {
                let mut step = self.game.turn_step();
                step.increase();
                self.game.set_turn_step(step);
            }
            Command::Narrower => {
                let mut step = self.game.turn_step();
                step.decrease();
                self.game.set_turn_step(step);
            }
            Command::Restart => {
                if self.game.is_game_over() {
                    self.game.restart();
                    self.next_tick = None;
                }
            }
        }
        None
    }
}

impl<R> PlayScreen<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &PlayScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;
        let display = get_display_area(area);
        let [status_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Length: {}   Heading: {}   Turn step: {}",
                game.segments().len(),
                game.heading(),
                game.turn_step()
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let playfield = game.playfield();
        let block_size = Size {
            width: playfield
                .columns()
                .saturating_mul(consts::CELL_DISPLAY_WIDTH)
                .saturating_add(2),
            height: playfield.rows().saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        canvas.draw_cell(game.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &p in &game.segments()[1..] {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(Ending::HitBorder | Ending::HitSelf) = game.ending() {
            canvas.draw_cell(
                game.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(game.head(), consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
        }

        if let Some(ending) = game.ending() {
            Span::from(format!(" — GAME OVER: {ending} —")).render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("space", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        } else {
            Line::from_iter([
                Span::raw(" Steer: "),
                Span::styled("← →", consts::KEY_STYLE),
                Span::raw("   Turn step: "),
                Span::styled("[ ]", consts::KEY_STYLE),
                Span::raw("   Quit: "),
                Span::styled("q", consts::KEY_STYLE),
            ])
            .render(msg2_area, buf);
        }
    }
}

/// Maps playfield positions to terminal cells within `area`.  Each playfield
/// cell is drawn [`CELL_DISPLAY_WIDTH`][consts::CELL_DISPLAY_WIDTH]
/// characters wide, so horizontal positions are shown to the nearest half
/// cell.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let col = (pos.x * i32::from(consts::CELL_DISPLAY_WIDTH)).div_euclid(consts::COL_WIDTH);
        let row = pos.y.div_euclid(consts::ROW_HEIGHT);
        let Ok(row) = u16::try_from(row) else {
            return;
        };
        if row >= self.area.height {
            return;
        }
        for (col, ch) in (col..).zip(symbol.chars()) {
            let Ok(col) = u16::try_from(col) else {
                continue;
            };
            if col >= self.area.width {
                continue;
            }
            let x = self.area.x.saturating_add(col);
            let y = self.area.y.saturating_add(row);
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
