//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Time between movements while the player holds the key for the direction
/// the snake is already heading in
pub(crate) const BOOST_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Size of the arena in cells.  The status bar is laid out above the arena
/// and is not part of the grid.
pub(crate) const GRID_SIZE: Size = Size {
    width: 25,
    height: 17,
};

/// Nominal snake length before any apples have been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with itself or a wall
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style =
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Styles the snake's body cycles through, indexed from the neck backwards
pub(crate) const SNAKE_PALETTE: [Style; 2] = [
    Style::new().fg(Color::LightRed),
    Style::new().fg(Color::LightYellow),
];

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the paused/won/lost message pop-ups
pub(crate) const MESSAGE_STYLE: Style = Style::new().fg(Color::Green);
