use super::direction::Direction;
use super::grid::Grid;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the arena.
///
/// The snake is born as a lone head with a nominal length of
/// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]; the body fills
/// out behind the head as it moves, up to `len - 1` cells, so the occupied
/// cells are pairwise distinct at every tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, with the most
    /// recent (the neck) at the end
    pub(super) body: VecDeque<Position>,

    /// Nominal length, head included; grows by one per apple
    pub(super) len: usize,

    /// The direction the snake moved in on the last tick
    pub(super) heading: Direction,

    /// The direction the snake will move in on the next tick
    pub(super) pending: Direction,
}

/// What happened when the snake advanced one tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Step {
    /// Advanced into a free cell
    Moved,

    /// Advanced onto the apple and grew
    Ate,

    /// Ran into a wall or its own body
    Collided,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `heading`
    pub(super) fn spawn(head: Position, heading: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            len: consts::INITIAL_SNAKE_LENGTH,
            heading,
            pending: heading,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the direction the snake is currently heading in
    pub(super) fn heading(&self) -> Direction {
        self.heading
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Return the positions of the cells in the snake's body
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Return the snake's nominal length, head included
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Iterate over every cell the snake occupies, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    /// Does the snake occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Request a change of heading for the next tick.  A request for the
    /// exact reverse of the current heading is ignored; of several valid
    /// requests within one tick, the last one wins.
    pub(super) fn set_direction(&mut self, requested: Direction) {
        if requested != self.heading.reverse() {
            self.pending = requested;
        }
    }

    /// Move the snake forwards one cell, settling the pending heading first.
    ///
    /// The self-collision test runs against the body as it stands before the
    /// tail cell is vacated, so moving onto the cell the tail is about to
    /// leave still collides.
    pub(super) fn advance(&mut self, grid: Grid, apple: Position) -> Step {
        self.heading = self.pending;
        let Some(new_head) = self.heading.advance(self.head, grid) else {
            return Step::Collided;
        };
        if new_head == apple {
            self.len += 1;
            self.push_head(new_head);
            return Step::Ate;
        }
        let collided = self.occupies(new_head);
        self.push_head(new_head);
        if collided {
            Step::Collided
        } else {
            Step::Moved
        }
    }

    fn push_head(&mut self, new_head: Position) {
        self.body.push_back(self.head);
        self.head = new_head;
        while self.body.len() + 1 > self.len {
            let _ = self.body.pop_front();
        }
    }
}
