//! Breadth-first queries over the four-connected grid.
//! Every query is read-only and runs in O(rows * cols) time and space.

use std::collections::VecDeque;

use crate::error::GridError;
use crate::grid::{DistanceField, Grid};
use crate::types::{Pos, WalkableSet};

/// BFS from `start` over tiles in `walkable`. The start cell itself is always entered.
pub fn distance_field(
    grid: &Grid,
    start: Pos,
    walkable: WalkableSet,
) -> Result<DistanceField, GridError> {
    Ok(bfs(grid, start, walkable, |_| false)?.field)
}

/// The last cell dequeued by a BFS from `start` over non-wall tiles.
///
/// Ties between equally distant cells resolve to whichever the traversal visits last,
/// which is fixed for a given grid because neighbours expand in up, right, down, left order.
pub fn farthest_cell(grid: &Grid, start: Pos) -> Result<Pos, GridError> {
    Ok(bfs(grid, start, WalkableSet::NON_WALL, |_| false)?.last)
}

/// Shortest non-wall route from `start` to `end`, inclusive of both ends.
/// Empty when `end` cannot be reached.
pub fn shortest_path(grid: &Grid, start: Pos, end: Pos) -> Result<Vec<Pos>, GridError> {
    let end_index = grid.index(end)?;
    let traversal = bfs(grid, start, WalkableSet::NON_WALL, |pos| pos == end)?;
    if !traversal.field.is_reached(end) {
        return Ok(Vec::new());
    }

    let mut path = vec![end];
    let mut cursor = end_index;
    while let Some(previous) = traversal.parents[cursor] {
        path.push(previous);
        cursor = grid.index(previous)?;
    }
    path.reverse();
    Ok(path)
}

/// Whether `end` is reachable from `start` moving only across tiles in `walkable`.
pub fn is_reachable(
    grid: &Grid,
    start: Pos,
    end: Pos,
    walkable: WalkableSet,
) -> Result<bool, GridError> {
    grid.index(end)?;
    let traversal = bfs(grid, start, walkable, |pos| pos == end)?;
    Ok(traversal.field.is_reached(end))
}

struct Traversal {
    field: DistanceField,
    parents: Vec<Option<Pos>>,
    last: Pos,
}

/// Core traversal shared by every query. Stops early once `stop` accepts a dequeued cell.
fn bfs(
    grid: &Grid,
    start: Pos,
    walkable: WalkableSet,
    stop: impl Fn(Pos) -> bool,
) -> Result<Traversal, GridError> {
    let start_index = grid.index(start)?;
    let mut field = DistanceField::new(grid.rows(), grid.cols());
    let mut parents = vec![None; grid.rows() * grid.cols()];
    field.set(start_index, 0);

    let mut queue = VecDeque::from([(start, start_index)]);
    let mut last = start;
    while let Some((current, current_index)) = queue.pop_front() {
        last = current;
        if stop(current) {
            break;
        }
        let next_distance = field.at_index(current_index) + 1;
        for neighbor in current.neighbors() {
            let Ok(index) = grid.index(neighbor) else {
                continue;
            };
            if field.at_index(index) != DistanceField::UNREACHED
                || !walkable.contains(grid.tiles()[index])
            {
                continue;
            }
            field.set(index, next_distance);
            parents[index] = Some(current);
            queue.push_back((neighbor, index));
        }
    }
    Ok(Traversal { field, parents, last })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    #[test]
    fn farthest_cell_is_last_visited_in_corridor() {
        let grid = Grid::from_glyph_rows(&["#######", "#.....#", "#######"]);
        assert_eq!(farthest_cell(&grid, Pos { y: 1, x: 1 }), Ok(Pos { y: 1, x: 5 }));
        assert_eq!(farthest_cell(&grid, Pos { y: 1, x: 3 }), Ok(Pos { y: 1, x: 1 }));
    }

    #[test]
    fn farthest_cell_breaks_ties_by_visit_order() {
        // Every arm of the cross is one step from the centre; the left arm expands last.
        let grid = Grid::from_glyph_rows(&["#####", "##.##", "#...#", "##.##", "#####"]);
        assert_eq!(farthest_cell(&grid, Pos { y: 2, x: 2 }), Ok(Pos { y: 2, x: 1 }));
    }

    #[test]
    fn shortest_path_includes_both_ends_and_steps_by_one() {
        let grid = Grid::from_glyph_rows(&["#####", "#...#", "#.#.#", "#...#", "#####"]);
        let path = shortest_path(&grid, Pos { y: 1, x: 1 }, Pos { y: 3, x: 3 }).expect("in bounds");
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Pos { y: 1, x: 1 }));
        assert_eq!(path.last(), Some(&Pos { y: 3, x: 3 }));
        for step in path.windows(2) {
            let delta = step[0].x.abs_diff(step[1].x) + step[0].y.abs_diff(step[1].y);
            assert_eq!(delta, 1);
            assert_ne!(grid.tile_or_wall(step[1]), TileKind::Wall);
        }
    }

    #[test]
    fn shortest_path_crosses_closed_gates() {
        let grid = Grid::from_glyph_rows(&["#####", "#.+E#", "#####"]);
        let path = shortest_path(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 }).expect("in bounds");
        assert_eq!(path, vec![Pos { y: 1, x: 1 }, Pos { y: 1, x: 2 }, Pos { y: 1, x: 3 }]);
    }

    #[test]
    fn shortest_path_to_self_is_single_cell() {
        let grid = Grid::from_glyph_rows(&["###", "#.#", "###"]);
        let cell = Pos { y: 1, x: 1 };
        assert_eq!(shortest_path(&grid, cell, cell), Ok(vec![cell]));
    }

    #[test]
    fn unreachable_end_gives_empty_path_and_false() {
        let grid = Grid::from_glyph_rows(&["#####", "#.#.#", "#####"]);
        let (a, b) = (Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 });
        assert_eq!(shortest_path(&grid, a, b), Ok(Vec::new()));
        assert_eq!(is_reachable(&grid, a, b, WalkableSet::NON_WALL), Ok(false));
    }

    #[test]
    fn closed_gate_blocks_passable_reachability() {
        let grid = Grid::from_glyph_rows(&["#####", "#.+E#", "#####"]);
        let (a, b) = (Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 });
        assert_eq!(is_reachable(&grid, a, b, WalkableSet::PASSABLE), Ok(false));
        assert_eq!(is_reachable(&grid, a, b, WalkableSet::NON_WALL), Ok(true));
    }

    #[test]
    fn distance_field_marks_unreached_cells() {
        let grid = Grid::from_glyph_rows(&["#####", "#..##", "###.#", "#####"]);
        let field =
            distance_field(&grid, Pos { y: 1, x: 1 }, WalkableSet::PASSABLE).expect("in bounds");
        assert_eq!(field.get(Pos { y: 1, x: 1 }), Some(0));
        assert_eq!(field.get(Pos { y: 1, x: 2 }), Some(1));
        assert_eq!(field.get(Pos { y: 2, x: 3 }), Some(DistanceField::UNREACHED));
        assert_eq!(field.get(Pos { y: 0, x: 0 }), Some(DistanceField::UNREACHED));
        assert_eq!(field.get(Pos { y: 9, x: 9 }), None);
    }

    #[test]
    fn queries_reject_out_of_bounds_endpoints() {
        let grid = Grid::from_glyph_rows(&["###", "#.#", "###"]);
        let outside = Pos { y: 5, x: 5 };
        assert!(farthest_cell(&grid, outside).is_err());
        assert!(shortest_path(&grid, Pos { y: 1, x: 1 }, outside).is_err());
        assert!(is_reachable(&grid, outside, Pos { y: 1, x: 1 }, WalkableSet::PASSABLE).is_err());
    }

    #[test]
    fn queries_leave_grid_untouched() {
        let grid = Grid::from_glyph_rows(&["#####", "#.+E#", "#####"]);
        let before = grid.clone();
        let _ = farthest_cell(&grid, Pos { y: 1, x: 1 });
        let _ = shortest_path(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 });
        let _ = is_reachable(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 }, WalkableSet::PASSABLE);
        assert_eq!(grid, before);
    }
}
