//! Runtime gate reconfiguration that never strands the player.
//!
//! Both operations take the grid and anchor positions explicitly; the caller owns the grid
//! and must not mutate it concurrently with either call.

use crate::connectivity::{is_reachable, shortest_path};
use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::CaveRng;
use crate::types::{Pos, TileKind, WalkableSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RearrangeReport {
    pub gates: usize,
    /// Gates opened by the ratio draw.
    pub opened: usize,
    /// Gates the path repair had to open on top of the ratio draw.
    pub forced_open: usize,
}

impl RearrangeReport {
    pub fn open_total(self) -> usize {
        self.opened + self.forced_open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Kept { flipped: usize },
    RolledBack { flipped: usize },
}

/// Reshuffles which gates are open, then opens every gate on the shortest
/// `player_pos -> exit_pos` route. The realized open fraction may exceed `open_ratio`.
pub fn rearrange(
    grid: &mut Grid,
    player_pos: Pos,
    exit_pos: Pos,
    open_ratio: f64,
    rng: &mut CaveRng,
) -> Result<RearrangeReport, GridError> {
    grid.index(player_pos)?;
    grid.index(exit_pos)?;

    let mut gates = grid.positions_of(&[TileKind::GateClosed, TileKind::GateOpen]);
    if gates.is_empty() {
        return Ok(RearrangeReport::default());
    }
    rng.shuffle(&mut gates);

    let ratio = open_ratio.clamp(0.0, 1.0);
    let open_count = ((gates.len() as f64 * ratio).floor() as usize).max(1);
    for (index, &gate) in gates.iter().enumerate() {
        let tile = if index < open_count { TileKind::GateOpen } else { TileKind::GateClosed };
        grid.set(gate, tile)?;
    }

    let mut forced_open = 0;
    for pos in shortest_path(grid, player_pos, exit_pos)? {
        if grid.get(pos)? == TileKind::GateClosed {
            grid.set(pos, TileKind::GateOpen)?;
            forced_open += 1;
        }
    }

    Ok(RearrangeReport { gates: gates.len(), opened: open_count, forced_open })
}

/// Flips each listed gate with probability `toggle_prob` and keeps the result only if the
/// exit stays reachable from `player_pos`; otherwise every gate returns to its prior state.
///
/// Positions are validated before anything is written, so an out-of-bounds entry leaves
/// the grid untouched. Entries that are not gate tiles are ignored.
pub fn toggle_with_rollback(
    grid: &mut Grid,
    gates: &[Pos],
    player_pos: Pos,
    exit_pos: Pos,
    toggle_prob: f64,
    rng: &mut CaveRng,
) -> Result<ToggleOutcome, GridError> {
    grid.index(player_pos)?;
    grid.index(exit_pos)?;
    let snapshot = gates
        .iter()
        .map(|&pos| grid.get(pos).map(|tile| (pos, tile)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut flipped = 0;
    for &(pos, tile) in &snapshot {
        let Some(toggled) = tile.toggled_gate() else {
            continue;
        };
        if rng.chance(toggle_prob) {
            grid.set(pos, toggled)?;
            flipped += 1;
        }
    }

    if is_reachable(grid, player_pos, exit_pos, WalkableSet::PASSABLE)? {
        return Ok(ToggleOutcome::Kept { flipped });
    }

    for &(pos, tile) in &snapshot {
        grid.set(pos, tile)?;
    }
    Ok(ToggleOutcome::RolledBack { flipped })
}
