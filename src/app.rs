use crate::game::Game;
use crate::highscore::HighScore;
use crate::menu::MainMenu;
use crate::options::{Difficulty, GridSize};
use crate::sound::Sound;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// State shared by all screens for the lifetime of the program
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) high_score: HighScore,
    pub(crate) sound: Box<dyn Sound>,

    /// The difficulty most recently chosen in the main menu
    pub(crate) difficulty: Difficulty,

    pub(crate) grid: GridSize,
}

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    ctx: Context,
}

impl App {
    pub(crate) fn new(ctx: Context) -> App {
        let screen = Screen::Main(MainMenu::new(&ctx));
        App { screen, ctx }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Main(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input(&mut self.ctx)?,
            Screen::Game(ref mut game) => game.process_input(&mut self.ctx)?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Game(Game),
    Quit,
}
