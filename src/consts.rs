//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Cells occupied by a freshly-reset snake, head first
pub(crate) const INITIAL_BODY: [(i32, i32); 3] = [(3, 1), (2, 1), (1, 1)];

/// How many random cells to try when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// Glyph for the snake's head when it is facing up; the eyes sit on the
/// facing side of the cell
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "''";

/// Glyph for the snake's head when it is facing down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "..";

/// Glyph for the snake's head when it is facing right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = " :";

/// Glyph for the snake's head when it is facing left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = ": ";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "██";

/// Glyph for the snake's head when it's collided with itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head: a solid green cell with white eyes
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the "new high score" announcement
pub(crate) const HIGH_SCORE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
