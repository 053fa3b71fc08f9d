use crate::consts;
use ratatui::layout::{Rect, Size};
use std::time::Duration;

/// Return a rectangle of (at most) `size` centered within `area`.
///
/// Plain integer arithmetic, biased towards the top-left when the leftover
/// space is odd, so callers can predict the exact placement.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Return the sub-rectangle of the terminal that everything is drawn inside
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Format a wall-clock duration as `MM:SS` for the status bar
pub(crate) fn format_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
