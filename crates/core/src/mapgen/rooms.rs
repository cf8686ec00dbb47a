//! Rectangular room placement over the carved corridor network.
//! Rejected candidates are not retried.

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::CaveRng;
use crate::types::{Pos, TileKind};

use super::maze::Interior;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn expanded(self, margin: usize) -> Self {
        let expanded_x = self.x.saturating_sub(margin);
        let expanded_y = self.y.saturating_sub(margin);
        let expanded_right = self.right().saturating_add(margin);
        let expanded_bottom = self.bottom().saturating_add(margin);
        Self {
            x: expanded_x,
            y: expanded_y,
            width: expanded_right - expanded_x + 1,
            height: expanded_bottom - expanded_y + 1,
        }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomSizes {
    pub min: usize,
    pub max: usize,
}

pub fn place_rooms(
    grid: &mut Grid,
    interior: Interior,
    attempts: usize,
    sizes: RoomSizes,
    rng: &mut CaveRng,
) -> Result<Vec<RoomRect>, GridError> {
    let interior_width = (interior.max_x - interior.min_x + 1) as usize;
    let interior_height = (interior.max_y - interior.min_y + 1) as usize;

    let mut rooms: Vec<RoomRect> = Vec::new();
    for _ in 0..attempts {
        let room_width = rng.range_usize(sizes.min, sizes.max);
        let room_height = rng.range_usize(sizes.min, sizes.max);
        if room_width > interior_width || room_height > interior_height {
            continue;
        }

        let min_x = interior.min_x as usize;
        let min_y = interior.min_y as usize;
        let x = rng.range_usize(min_x, min_x + interior_width - room_width);
        let y = rng.range_usize(min_y, min_y + interior_height - room_height);
        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        let candidate_with_margin = candidate.expanded(1);
        if rooms.iter().any(|existing_room| candidate_with_margin.intersects(existing_room)) {
            continue;
        }

        carve_room(grid, &candidate)?;
        rooms.push(candidate);
    }
    Ok(rooms)
}

pub fn carve_room(grid: &mut Grid, room: &RoomRect) -> Result<(), GridError> {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            grid.set(Pos { y: y as i32, x: x as i32 }, TileKind::Floor)?;
        }
    }
    Ok(())
}
