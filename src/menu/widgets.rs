use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = 28;

    /// Number of body cells in the picture under the title
    const BODY_LENGTH: usize = 5;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    /*
     *  ____              _
     * / ___| _ __   __ _| | _____
     * \___ \| '_ \ / _` | |/ / _ \
     *  ___) | | | | (_| |   <  __/
     * |____/|_| |_|\__,_|_|\_\___|
     *
     *       ██████████ :  ██
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, picture_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(words_area, buf);
        Line::from_iter([
            Span::styled(
                consts::SNAKE_BODY_SYMBOL.repeat(Self::BODY_LENGTH),
                consts::SNAKE_STYLE,
            ),
            Span::styled(consts::SNAKE_HEAD_RIGHT_SYMBOL, consts::SNAKE_HEAD_STYLE),
            Span::raw("  "),
            Span::styled(consts::FOOD_SYMBOL, consts::FOOD_STYLE),
        ])
        .centered()
        .render(picture_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys_line("       ", ["←", "↓", "↑", "→"]),
            keys_line("   or: ", ["h", "j", "k", "l"]),
            keys_line("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the food, but"),
            Line::from("don't hit the walls"),
            Line::from("or yourself!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

/// Build a line listing four direction keys after `lead`
fn keys_line(lead: &'static str, keys: [&'static str; 4]) -> Line<'static> {
    let mut line = Line::raw(lead);
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            line.push_span(" ");
        }
        line.push_span(Span::styled(key, consts::KEY_STYLE));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    mod logo {
        use super::*;

        #[test]
        fn test_render() {
            let mut buffer = Buffer::empty(Rect::new(0, 0, 34, 9));
            Logo.render(Rect::new(3, 1, Logo::WIDTH, Logo::HEIGHT), &mut buffer);
            #[rustfmt::skip]
            let mut expected = Buffer::with_lines([
                 "",
                 "    ____              _           ",
                 "   / ___| _ __   __ _| | _____    ",
                r"   \___ \| '_ \ / _` | |/ / _ \   ",
                 "    ___) | | | | (_| |   <  __/   ",
                r"   |____/|_| |_|\__,_|_|\_\___|   ",
                 "",
                 "         ██████████ :  ██         ",
                 "",
            ]);
            expected.set_style(Rect::new(3, 1, 28, 5), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(9, 7, 10, 1), consts::SNAKE_STYLE);
            expected.set_style(Rect::new(19, 7, 2, 1), consts::SNAKE_HEAD_STYLE);
            expected.set_style(Rect::new(23, 7, 2, 1), consts::FOOD_STYLE);
            pretty_assertions::assert_eq!(buffer, expected);
        }

        #[test]
        fn text_width() {
            assert!(Logo::TEXT
                .iter()
                .all(|ln| ln.len() == usize::from(Logo::WIDTH)));
        }
    }

    mod instructions {
        use super::*;

        #[test]
        fn test_render() {
            let area = Rect::new(0, 0, Instructions::WIDTH, Instructions::HEIGHT);
            let mut buffer = Buffer::empty(area);
            Instructions.render(area, &mut buffer);
            let mut expected = Buffer::with_lines([
                "Move the snake with:",
                "       ← ↓ ↑ →      ",
                "   or: h j k l      ",
                "   or: a s w d      ",
                "Eat the food, but   ",
                "don't hit the walls ",
                "or yourself!        ",
            ]);
            for y in 1..4 {
                for x in [7, 9, 11, 13] {
                    expected.set_style(Rect::new(x, y, 1, 1), consts::KEY_STYLE);
                }
            }
            pretty_assertions::assert_eq!(buffer, expected);
        }
    }
}
