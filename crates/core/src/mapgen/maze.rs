//! Iterative depth-first corridor carving over the odd-offset lattice of the interior.

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::CaveRng;
use crate::types::{Pos, TileKind};

const LATTICE_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interior {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Interior {
    pub fn new(grid: &Grid, margin: usize) -> Option<Self> {
        let border = margin.checked_mul(2)?;
        if grid.rows() <= border || grid.cols() <= border {
            return None;
        }
        Some(Self {
            min_x: i32::try_from(margin).ok()?,
            min_y: i32::try_from(margin).ok()?,
            max_x: i32::try_from(grid.cols() - margin - 1).ok()?,
            max_y: i32::try_from(grid.rows() - margin - 1).ok()?,
        })
    }

    pub fn area(self) -> usize {
        let width = (self.max_x - self.min_x + 1) as usize;
        let height = (self.max_y - self.min_y + 1) as usize;
        width * height
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }

    pub fn random_lattice_cell(self, rng: &mut CaveRng) -> Pos {
        let lattice_width = ((self.max_x - self.min_x) / 2) as usize;
        let lattice_height = ((self.max_y - self.min_y) / 2) as usize;
        Pos {
            y: self.min_y + 2 * rng.range_usize(0, lattice_height) as i32,
            x: self.min_x + 2 * rng.range_usize(0, lattice_width) as i32,
        }
    }

    pub fn random_cell(self, rng: &mut CaveRng) -> Pos {
        Pos {
            y: rng.range_usize(self.min_y as usize, self.max_y as usize) as i32,
            x: rng.range_usize(self.min_x as usize, self.max_x as usize) as i32,
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Pos { y, x }))
    }
}

pub fn carve_maze(
    grid: &mut Grid,
    interior: Interior,
    start: Pos,
    rng: &mut CaveRng,
) -> Result<usize, GridError> {
    grid.set(start, TileKind::Floor)?;
    let mut carved = 1;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let mut steps = LATTICE_STEPS;
        rng.shuffle(&mut steps);

        let mut advanced = false;
        for (dx, dy) in steps {
            let target = Pos { y: current.y + dy, x: current.x + dx };
            if !interior.contains(target) || grid.get(target)? != TileKind::Wall {
                continue;
            }
            let between = Pos { y: current.y + dy / 2, x: current.x + dx / 2 };
            grid.set(between, TileKind::Floor)?;
            grid.set(target, TileKind::Floor)?;
            carved += 2;
            stack.push(target);
            advanced = true;
            break;
        }

        if !advanced {
            stack.pop();
        }
    }

    Ok(carved)
}
