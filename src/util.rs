use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::error::Error;

/// Iteration & stepping over the variants of a fieldless enum, in declaration
/// order
pub(crate) trait EnumExt: Enum {
    fn iter() -> impl Iterator<Item = Self>;
    fn min() -> Self;
    fn max() -> Self;
    fn next(self) -> Option<Self>;
    fn prev(self) -> Option<Self>;
}

impl<T: Enum> EnumExt for T {
    fn iter() -> impl Iterator<Item = T> {
        (0..T::LENGTH).map(T::from_usize)
    }

    fn min() -> T {
        T::from_usize(0)
    }

    fn max() -> T {
        T::from_usize(T::LENGTH.saturating_sub(1))
    }

    fn next(self) -> Option<T> {
        self.into_usize()
            .checked_add(1)
            .filter(|&i| i < T::LENGTH)
            .map(T::from_usize)
    }

    fn prev(self) -> Option<T> {
        self.into_usize().checked_sub(1).map(T::from_usize)
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`, shrunk if it
/// doesn't fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Format an error together with its chain of sources, separated by colons
pub(crate) fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(src) = source {
        msg.push_str(": ");
        msg.push_str(&src.to_string());
        source = src.source();
    }
    msg
}
