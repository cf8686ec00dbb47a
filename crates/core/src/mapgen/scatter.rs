//! Spawn, exit, item, and gate placement on a carved grid.
//! Each stage reads the grid state left by the one before it.

use crate::config::ItemRule;
use crate::connectivity::{farthest_cell, shortest_path};
use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::CaveRng;
use crate::types::{ItemCategory, Pos, TileKind};

use super::maze::Interior;
use super::rooms::RoomRect;

const ATTEMPTS_PER_ITEM: usize = 50;

pub fn select_spawn(rooms: &[RoomRect], maze_start: Pos) -> Pos {
    rooms.first().map(|room| room.center()).unwrap_or(maze_start)
}

pub fn place_exit(grid: &mut Grid, spawn: Pos) -> Result<Pos, GridError> {
    let exit = farthest_cell(grid, spawn)?;
    grid.set(exit, TileKind::Exit)?;
    Ok(exit)
}

pub fn scatter_items(
    grid: &mut Grid,
    interior: Interior,
    category: ItemCategory,
    rule: ItemRule,
    rng: &mut CaveRng,
) -> Result<Vec<Pos>, GridError> {
    // No more items than interior cells can ever land.
    let wanted = rule.count.min(interior.area());
    let budget = wanted.saturating_mul(ATTEMPTS_PER_ITEM);
    let mut placed: Vec<Pos> = Vec::with_capacity(wanted);
    let mut attempts = 0;
    while placed.len() < wanted && attempts < budget {
        attempts += 1;
        let candidate = interior.random_cell(rng);
        if grid.get(candidate)? != TileKind::Floor {
            continue;
        }
        if placed.iter().any(|&other| candidate.distance(other) < rule.min_distance) {
            continue;
        }
        grid.set(candidate, category.tile())?;
        placed.push(candidate);
    }
    Ok(placed)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GatePlacement {
    pub gates: Vec<Pos>,
    pub forced_open: usize,
}

pub fn place_gates(
    grid: &mut Grid,
    interior: Interior,
    gate_chance: f64,
    spawn: Pos,
    exit: Pos,
    rng: &mut CaveRng,
) -> Result<GatePlacement, GridError> {
    let mut gates = Vec::new();
    for pos in interior.cells() {
        if grid.get(pos)? != TileKind::Floor || !is_corridor_cell(grid, pos) {
            continue;
        }
        if rng.chance(gate_chance) {
            grid.set(pos, TileKind::GateClosed)?;
            gates.push(pos);
        }
    }

    let mut forced_open = 0;
    for pos in shortest_path(grid, spawn, exit)? {
        if grid.get(pos)? == TileKind::GateClosed {
            grid.set(pos, TileKind::GateOpen)?;
            forced_open += 1;
        }
    }
    Ok(GatePlacement { gates, forced_open })
}

fn is_corridor_cell(grid: &Grid, pos: Pos) -> bool {
    pos.neighbors().into_iter().filter(|&next| grid.tile_or_wall(next) == TileKind::Floor).count()
        == 2
}
