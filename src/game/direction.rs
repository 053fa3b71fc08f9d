use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction.  Returns `None` if the move
    /// would leave the arena.
    pub(super) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = y.checked_sub(1)?;
            }
            Direction::East => {
                x = x.checked_add(1).filter(|&x2| x2 < grid.width())?;
            }
            Direction::South => {
                y = y.checked_add(1).filter(|&y2| y2 < grid.height())?;
            }
            Direction::West => {
                x = x.checked_sub(1)?;
            }
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The heading a freshly spawned snake at `pos` should start with: find
    /// the nearest arena edge and head the opposite way, so the first moves
    /// run away from the wall rather than into it.  Ties go to the earlier
    /// entry in top, bottom, left, right order.
    pub(super) fn away_from_nearest_edge(pos: Position, grid: Grid) -> Direction {
        let sides = [
            (Direction::North, pos.y),
            (Direction::South, grid.height() - 1 - pos.y),
            (Direction::West, pos.x),
            (Direction::East, grid.width() - 1 - pos.x),
        ];
        sides
            .into_iter()
            .min_by_key(|&(_, distance)| distance)
            .map(|(nearest, _)| nearest.reverse())
            .expect("sides is non-empty")
    }
}
