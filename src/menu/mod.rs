mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::{Context, Screen};
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::options::Difficulty;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
    difficulty: Difficulty,
    high_score: u32,
}

impl MainMenu {
    pub(crate) fn new(ctx: &Context) -> Self {
        MainMenu {
            selection: Selection::min(),
            difficulty: ctx.difficulty,
            high_score: ctx.high_score.get(),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self, ctx: &mut Context) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?, ctx))
    }

    fn handle_event(&mut self, event: Event, ctx: &mut Context) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) | (Selection::Quit, Command::Enter) => {
                return Some(Screen::Quit)
            }
            (Selection::Play, Command::Enter) | (_, Command::P) => {
                return Some(Screen::Game(self.play(ctx)))
            }
            (_, Command::Left) => self.difficulty.decrease(),
            (_, Command::Right) => self.difficulty.increase(),
            (Selection::Difficulty, Command::Enter | Command::Space) => self.difficulty.cycle(),
            (_, Command::Home) => self.selection = Selection::min(),
            (_, Command::End) => self.selection = Selection::max(),
            (sel, Command::Up) => self.selection = sel.prev().unwrap_or(sel),
            (sel, Command::Down) => self.selection = sel.next().unwrap_or(sel),
            (sel, Command::Next) => self.selection = sel.next().unwrap_or_else(Selection::min),
            (sel, Command::Prev) => self.selection = sel.prev().unwrap_or_else(Selection::max),
            _ => (),
        }
        None
    }

    /// Set up a new game at the chosen difficulty.  The game waits on its
    /// board for the player to start it.
    fn play(&self, ctx: &mut Context) -> Game {
        ctx.difficulty = self.difficulty;
        Game::new(ctx)
    }

    fn button_style(&self, selection: Selection) -> Style {
        if self.selection == selection {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        }
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, score_area, play_area, difficulty_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        Line::from_iter([
            Span::raw("High Score: "),
            Span::styled(self.high_score.to_string(), consts::HIGH_SCORE_STYLE),
        ])
        .centered()
        .render(score_area, buf);

        button("Play", "p", self.button_style(Selection::Play)).render(play_area, buf);
        difficulty_selector(self.difficulty, self.button_style(Selection::Difficulty))
            .render(difficulty_area, buf);
        button("Quit", "q", self.button_style(Selection::Quit)).render(quit_area, buf);
    }
}

/// Build a centered button line of the form `[Label (k)]`
fn button(label: &'static str, key: &'static str, style: Style) -> Line<'static> {
    Line::from_iter([
        Span::styled(format!("[{label} ("), style),
        Span::styled(key, consts::KEY_STYLE.patch(style)),
        Span::styled(")]", style),
    ])
    .centered()
}

/// Build a centered line of the form `Difficulty: ◀ Medium ▶`.  An arrow is
/// drawn hollow when the difficulty can't be moved any further in that
/// direction.
fn difficulty_selector(difficulty: Difficulty, style: Style) -> Line<'static> {
    let left = if difficulty.can_decrease() {
        "◀"
    } else {
        "◁"
    };
    let right = if difficulty.can_increase() {
        "▶"
    } else {
        "▷"
    };
    let s = format!(
        "Difficulty: {left} {difficulty:^width$} {right}",
        width = usize::from(Difficulty::DISPLAY_WIDTH)
    );
    Line::from(Span::styled(s, style)).centered()
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum Selection {
    Play,
    Difficulty,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::context;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::style::Color;
    use rstest::rstest;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn render_rows(menu: &MainMenu) -> (Buffer, Vec<String>) {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let rows = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect();
        (buffer, rows)
    }

    #[test]
    fn new_uses_context() {
        let mut ctx = context(12);
        ctx.difficulty = Difficulty::Hard;
        let menu = MainMenu::new(&ctx);
        assert_eq!(menu.selection, Selection::Play);
        assert_eq!(menu.difficulty, Difficulty::Hard);
        assert_eq!(menu.high_score, 12);
    }

    #[test]
    fn draw_initial() {
        let menu = MainMenu::new(&context(42));
        let (buffer, rows) = render_rows(&menu);
        let trimmed = rows.iter().map(|r| r.trim()).collect::<Vec<_>>();
        assert_eq!(trimmed[0], "____              _");
        assert_eq!(trimmed[8], "Move the snake with:");
        assert_eq!(trimmed[16], "High Score: 42");
        assert_eq!(trimmed[18], "[Play (p)]");
        assert_eq!(trimmed[20], "Difficulty: ◀ Medium ▶");
        assert_eq!(trimmed[22], "[Quit (q)]");
        assert_eq!(rows[18], format!("{:35}[Play (p)]{:35}", "", ""));
        assert_eq!(buffer[(35, 18)].modifier, consts::MENU_SELECTION_STYLE.add_modifier);
        assert_eq!(buffer[(42, 18)].fg, Color::Yellow);
        assert!(buffer[(35, 22)].modifier.is_empty());
    }

    #[rstest]
    #[case(Difficulty::Easy, "Difficulty: ◁  Easy  ▶")]
    #[case(Difficulty::Medium, "Difficulty: ◀ Medium ▶")]
    #[case(Difficulty::Hard, "Difficulty: ◀  Hard  ▷")]
    fn draw_difficulty(#[case] difficulty: Difficulty, #[case] line: &str) {
        let mut ctx = context(0);
        ctx.difficulty = difficulty;
        let (_, rows) = render_rows(&MainMenu::new(&ctx));
        assert_eq!(rows[20].trim(), line);
    }

    #[test]
    fn adjust_difficulty() {
        let mut ctx = context(0);
        let mut menu = MainMenu::new(&ctx);
        assert!(menu.handle_event(key(KeyCode::Right), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Hard);
        assert!(menu.handle_event(key(KeyCode::Right), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Hard);
        assert!(menu.handle_event(key(KeyCode::Char('h')), &mut ctx).is_none());
        assert!(menu.handle_event(key(KeyCode::Left), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Easy);
        assert!(menu.handle_event(key(KeyCode::Down), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Difficulty);
        assert!(menu.handle_event(key(KeyCode::Enter), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Medium);
        assert!(menu.handle_event(key(KeyCode::Char(' ')), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Hard);
        assert!(menu.handle_event(key(KeyCode::Char(' ')), &mut ctx).is_none());
        assert_eq!(menu.difficulty, Difficulty::Easy);
        // Nothing is committed until a game is started
        assert_eq!(ctx.difficulty, Difficulty::Medium);
        let (_, rows) = render_rows(&menu);
        assert_eq!(rows[20].trim(), "Difficulty: ◁  Easy  ▶");
    }

    #[test]
    fn navigate() {
        let mut ctx = context(0);
        let mut menu = MainMenu::new(&ctx);
        assert!(menu.handle_event(key(KeyCode::Up), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Play);
        assert!(menu.handle_event(key(KeyCode::BackTab), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Quit);
        assert!(menu.handle_event(key(KeyCode::Down), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Quit);
        assert!(menu.handle_event(key(KeyCode::Tab), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Play);
        assert!(menu.handle_event(key(KeyCode::End), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Quit);
        assert!(menu.handle_event(key(KeyCode::Home), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Play);
        assert!(menu.handle_event(key(KeyCode::Char('j')), &mut ctx).is_none());
        assert_eq!(menu.selection, Selection::Difficulty);
        let (buffer, rows) = render_rows(&menu);
        let x = rows[20]
            .chars()
            .position(|c| c == 'D')
            .and_then(|x| u16::try_from(x).ok())
            .unwrap();
        assert_eq!(buffer[(x, 20)].modifier, consts::MENU_SELECTION_STYLE.add_modifier);
        assert!(buffer[(35, 18)].modifier.is_empty());
        assert!(menu.handle_event(key(KeyCode::End), &mut ctx).is_none());
        assert!(matches!(
            menu.handle_event(key(KeyCode::Enter), &mut ctx),
            Some(Screen::Quit)
        ));
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')))]
    #[case(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))]
    fn quit(#[case] event: Event) {
        let mut ctx = context(0);
        let mut menu = MainMenu::new(&ctx);
        assert!(matches!(
            menu.handle_event(event, &mut ctx),
            Some(Screen::Quit)
        ));
    }

    #[rstest]
    #[case(KeyCode::Enter)]
    #[case(KeyCode::Char('p'))]
    fn play(#[case] code: KeyCode) {
        let mut ctx = context(0);
        let mut menu = MainMenu::new(&ctx);
        assert!(menu.handle_event(key(KeyCode::Left), &mut ctx).is_none());
        assert!(matches!(
            menu.handle_event(key(code), &mut ctx),
            Some(Screen::Game(_))
        ));
        assert_eq!(ctx.difficulty, Difficulty::Easy);
        // The chosen difficulty is remembered when returning to the menu
        assert_eq!(MainMenu::new(&ctx).difficulty, Difficulty::Easy);
    }

    #[test]
    fn ignores_other_events() {
        let mut ctx = context(0);
        let mut menu = MainMenu::new(&ctx);
        let before = menu.clone();
        assert!(menu.handle_event(key(KeyCode::Char('x')), &mut ctx).is_none());
        assert!(menu.handle_event(Event::FocusLost, &mut ctx).is_none());
        assert_eq!(menu, before);
    }
}
