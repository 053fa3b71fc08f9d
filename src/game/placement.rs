use super::grid::Grid;
use rand::{seq::IndexedRandom, Rng};
use ratatui::layout::Position;
use std::collections::HashSet;

/// Give up on rejection sampling after this many misses and enumerate the
/// free cells instead
const MAX_REJECTIONS: usize = 16;

/// Pick a uniformly random cell of `grid` that is not in `occupied`, or
/// `None` if every cell is occupied.
///
/// While less than half the grid is occupied, rejection sampling almost
/// always lands in a handful of draws; past that density — or after
/// [`MAX_REJECTIONS`] misses — the free cells are enumerated and one is
/// chosen outright, so the worst case stays bounded even with a single
/// free cell left.
pub(super) fn random_free_cell<R: Rng>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let total = grid.total_cells();
    if occupied.len() >= total {
        return None;
    }
    if occupied.len() * 2 < total {
        for _ in 0..MAX_REJECTIONS {
            let pos = Position::new(
                rng.random_range(0..grid.width()),
                rng.random_range(0..grid.height()),
            );
            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }
    }
    let free = grid
        .positions()
        .filter(|p| !occupied.contains(p))
        .collect::<Vec<_>>();
    free.choose(rng).copied()
}
