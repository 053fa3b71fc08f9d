use ratatui::layout::{Position, Positions, Rect, Size};

/// The arena, measured in cells.
///
/// All gameplay positions are relative to the top-left corner of the arena.
/// The status bar above the arena is a separate layout region; its cells are
/// neither visitable nor counted here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub(super) fn new(size: Size) -> Grid {
        Grid {
            width: size.width,
            height: size.height,
        }
    }

    pub(super) fn width(self) -> u16 {
        self.width
    }

    pub(super) fn height(self) -> u16 {
        self.height
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(super) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Total number of cells in the arena
    pub(super) fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterate over every cell in the arena
    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}
