mod cell;
mod direction;
mod over;
mod paused;
mod snake;
mod ticker;
use self::cell::{grid_cells, Cell};
use self::direction::Direction;
use self::over::GameOver;
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use self::ticker::Ticker;
use crate::app::{Context, Screen};
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::options::{Difficulty, GridSize};
use crate::sound::Cue;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: GridSize,
    difficulty: Difficulty,
    snake: Snake,
    /// `None` only once the snake fills the entire grid
    food: Option<Cell>,
    score: u32,
    /// The high score as of the last game over, for display
    high_score: u32,
    state: GameState,
    ticker: Ticker,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(ctx: &Context) -> Self {
        Game::new_with_rng(ctx, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game that has not been started yet.  The snake and food are in
    /// place but nothing moves until [`Game::start()`] is called.
    pub(crate) fn new_with_rng(ctx: &Context, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            grid: ctx.grid,
            difficulty: ctx.difficulty,
            snake: Snake::new(),
            food: None,
            score: 0,
            high_score: ctx.high_score.get(),
            state: GameState::Ready,
            ticker: Ticker::default(),
        };
        game.food = game.generate_food();
        game
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it
    pub(crate) fn process_input(&mut self, ctx: &mut Context) -> std::io::Result<Option<Screen>> {
        let now = Instant::now();
        if self.ticker.fire(now) {
            self.update(ctx);
            return Ok(None);
        }
        match self.ticker.time_until(now) {
            Some(wait) => {
                if poll(wait)? {
                    Ok(self.handle_event(read()?, ctx, Instant::now()))
                } else {
                    Ok(None)
                }
            }
            None => Ok(self.handle_event(read()?, ctx, Instant::now())),
        }
    }

    fn handle_event(&mut self, event: Event, ctx: &mut Context, now: Instant) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.running() {
                self.toggle_pause(now);
            }
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if cmd == Command::Quit {
            return Some(Screen::Quit);
        }
        match self.state {
            GameState::Running => match cmd {
                Command::Up => self.snake.set_direction(Direction::Up),
                Command::Down => self.snake.set_direction(Direction::Down),
                Command::Left => self.snake.set_direction(Direction::Left),
                Command::Right => self.snake.set_direction(Direction::Right),
                Command::Space | Command::Esc | Command::P => self.toggle_pause(now),
                Command::Enter | Command::R => self.start(now),
                _ => (),
            },
            GameState::Paused(ref mut paused) => match paused.handle_command(cmd)? {
                PauseOpt::Resume => self.toggle_pause(now),
                PauseOpt::Restart => self.start(now),
                PauseOpt::MainMenu => return Some(Screen::Main(MainMenu::new(ctx))),
                PauseOpt::Quit => return Some(Screen::Quit),
            },
            GameState::Ready | GameState::Over(_) => match cmd {
                Command::Enter | Command::R => self.start(now),
                Command::M | Command::Esc => return Some(Screen::Main(MainMenu::new(ctx))),
                Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    /// Start (or restart) the game from scratch
    pub(crate) fn start(&mut self, now: Instant) {
        self.snake.reset();
        self.food = self.generate_food();
        self.score = 0;
        if self.ticker.is_scheduled() {
            log::debug!("Discarding clock of game in progress");
            self.ticker.cancel();
        }
        self.ticker.start(self.difficulty.tick_period(), now);
        self.state = GameState::Running;
        log::info!(
            "Starting game on {} difficulty, {} grid",
            self.difficulty,
            self.grid
        );
    }

    /// Advance the game by one tick
    fn update(&mut self, ctx: &mut Context) {
        if !self.running() {
            return;
        }
        let Some(food) = self.food else {
            return;
        };
        if self.snake.advance(food) {
            self.score += 1;
            self.food = self.generate_food();
            ctx.sound.play(Cue::Eat);
        }
        if self.snake.check_collision(self.grid) {
            self.game_over(ctx, false);
        } else if self.food.is_none() {
            self.game_over(ctx, true);
        }
    }

    /// Return a random free cell for the food, or `None` if the snake covers
    /// the whole grid
    fn generate_food(&mut self) -> Option<Cell> {
        place_food(&mut self.rng, self.grid, &self.snake)
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Pause a running game or resume a paused one.  Does nothing if no game
    /// is in progress.
    fn toggle_pause(&mut self, now: Instant) {
        match self.state {
            GameState::Running => {
                self.ticker.cancel();
                self.state = GameState::Paused(Paused::new());
            }
            GameState::Paused(_) => {
                self.ticker.start(self.difficulty.tick_period(), now);
                self.state = GameState::Running;
            }
            GameState::Ready | GameState::Over(_) => (),
        }
    }

    /// End the game: stop the clock, update the high score, and show the
    /// final score
    fn game_over(&mut self, ctx: &mut Context, board_full: bool) {
        self.ticker.cancel();
        ctx.sound.play(Cue::GameOver);
        let new_high_score = ctx.high_score.submit(self.score);
        self.high_score = ctx.high_score.get();
        log::info!("Game over; final score: {}", self.score);
        self.state = GameState::Over(GameOver {
            score: self.score,
            new_high_score,
            board_full,
        });
    }

    fn render_score_bar(&self, area: Rect, buf: &mut Buffer) {
        let left = format!(" Score: {} — High Score: {}", self.score, self.high_score);
        let right = format!("Speed: {} ", self.difficulty);
        let gap = usize::from(area.width)
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count());
        Line::styled(format!("{left}{:gap$}{right}", ""), consts::SCORE_BAR_STYLE)
            .render(area, buf);
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn collided(&self) -> bool {
        matches!(
            self.state,
            GameState::Over(GameOver {
                board_full: false,
                ..
            })
        )
    }
}

/// Pick a cell not occupied by `snake`, uniformly at random.
///
/// A bounded number of random cells are tried first; if they all land on the
/// snake, the free cells are enumerated and one of them is chosen.  Returns
/// `None` if there are no free cells.
fn place_food<R: Rng>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Cell> {
    let side = i32::from(grid.get());
    if snake.len() < grid.area() {
        for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
            let cell = Cell::new(rng.random_range(0..side), rng.random_range(0..side));
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }
    log::debug!("Choosing food position among free cells");
    grid_cells(grid)
        .filter(|&c| !snake.contains(c))
        .choose(rng)
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.render_score_bar(score_area, buf);

        let side = self.grid.get();
        let block_size = Size {
            width: side.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: side.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(food) = self.food {
            board.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for c in self.snake.cells().skip(1) {
            board.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.collided() {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_HEAD_STYLE,
            );
        }

        match self.state {
            GameState::Ready => key_help(&[("Start", "Enter"), ("Main Menu", "m"), ("Quit", "q")])
                .render(help_area, buf),
            GameState::Running => key_help(&[("Move", "←↓↑→"), ("Pause", "Space")])
                .render(help_area, buf),
            GameState::Paused(paused) => {
                let pause_area = center_rect(
                    block_area,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::Over(over) => {
                let over_area = center_rect(
                    block_area,
                    Size {
                        width: GameOver::WIDTH,
                        height: GameOver::HEIGHT,
                    },
                );
                over.render(over_area, buf);
            }
        }
    }
}

/// Build a help line of the form " Label (key) — Label (key)"
fn key_help(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::default();
    for (i, &(label, key)) in items.iter().enumerate() {
        line.push_span(if i == 0 { " " } else { " — " });
        line.push_span(label);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

/// A view of the playing field within a buffer, addressed in grid cells
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` (one character per terminal column) at grid cell `cell`.
    /// Cells outside the area are skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let Ok(x) = u16::try_from(cell.x) else {
            return;
        };
        let Ok(y) = u16::try_from(cell.y) else {
            return;
        };
        let Some(x) = x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        for (ch, x) in symbol.chars().zip(x..) {
            let pos = Position { x, y };
            if !self.area.contains(pos) {
                return;
            }
            if let Some(c) = self.buf.cell_mut(pos) {
                c.set_char(ch);
                c.set_style(Style::reset().patch(style));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    /// The game has been set up but not started
    Ready,
    Running,
    Paused(Paused),
    Over(GameOver),
}
