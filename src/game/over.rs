use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The outcome of a finished game, displayed as a pop-up over the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    /// The final score
    pub(super) score: u32,

    /// Did the final score beat the previous high score?
    pub(super) new_high_score: bool,

    /// Did the game end because there was nowhere left to put food?
    pub(super) board_full: bool,
}

impl GameOver {
    pub(super) const HEIGHT: u16 = 8;
    pub(super) const WIDTH: u16 = 22;
}

impl Widget for GameOver {
    /*
     * ┌──── GAME OVER ─────┐
     * │ Final Score: 12    │
     * │ New High Score!    │
     * │                    │
     * │ Restart (r)        │
     * │ Main Menu (m)      │
     * │ Quit (q)           │
     * └────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.board_full {
            " YOU WIN "
        } else {
            " GAME OVER "
        };
        let block = Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let high_score = if self.new_high_score {
            Line::styled("New High Score!", consts::HIGH_SCORE_STYLE)
        } else {
            Line::default()
        };
        let lines = [
            Line::from(format!("Final Score: {}", self.score)),
            high_score,
            Line::default(),
            key_line("Restart (", "r"),
            key_line("Main Menu (", "m"),
            key_line("Quit (", "q"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

fn key_line(label: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(label),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_new_high_score() {
        let over = GameOver {
            score: 12,
            new_high_score: true,
            board_full: false,
        };
        let area = Rect::new(0, 0, GameOver::WIDTH, GameOver::HEIGHT);
        let mut buffer = Buffer::empty(area);
        over.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── GAME OVER ─────┐",
            "│ Final Score: 12    │",
            "│ New High Score!    │",
            "│                    │",
            "│ Restart (r)        │",
            "│ Main Menu (m)      │",
            "│ Quit (q)           │",
            "└────────────────────┘",
        ]);
        expected.set_style(Rect::new(2, 2, 18, 1), consts::HIGH_SCORE_STYLE);
        expected.set_style(Rect::new(11, 4, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(13, 5, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(8, 6, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_board_full() {
        let over = GameOver {
            score: 397,
            new_high_score: false,
            board_full: true,
        };
        let area = Rect::new(0, 0, GameOver::WIDTH, GameOver::HEIGHT);
        let mut buffer = Buffer::empty(area);
        over.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌───── YOU WIN ──────┐",
            "│ Final Score: 397   │",
            "│                    │",
            "│                    │",
            "│ Restart (r)        │",
            "│ Main Menu (m)      │",
            "│ Quit (q)           │",
            "└────────────────────┘",
        ]);
        expected.set_style(Rect::new(11, 4, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(13, 5, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(8, 6, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
