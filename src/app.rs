use crate::game::{Game, Settings};
use crate::play::PlayScreen;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(settings: Settings, tick_period: Duration) -> App {
        let screen = Screen::Play(PlayScreen::new(Game::new(settings), tick_period));
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::debug!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Play(ref play) => {
                terminal.draw(|frame| play.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Play(ref mut play) => {
                if let Some(screen) = play.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Play(PlayScreen),
    Quit,
}
