use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// Four-connected neighbours in up, right, down, left order.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }

    pub fn distance(self, other: Pos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    Exit,
    Map,
    Food,
    Light,
    GateClosed,
    GateOpen,
}

impl TileKind {
    pub const ALL: [TileKind; 8] = [
        TileKind::Wall,
        TileKind::Floor,
        TileKind::Exit,
        TileKind::Map,
        TileKind::Food,
        TileKind::Light,
        TileKind::GateClosed,
        TileKind::GateOpen,
    ];

    pub fn is_gate(self) -> bool {
        matches!(self, TileKind::GateClosed | TileKind::GateOpen)
    }

    /// The opposite gate state, or `None` for tiles that are not gates.
    pub fn toggled_gate(self) -> Option<TileKind> {
        match self {
            TileKind::GateClosed => Some(TileKind::GateOpen),
            TileKind::GateOpen => Some(TileKind::GateClosed),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::Exit => 'E',
            TileKind::Map => 'm',
            TileKind::Food => 'f',
            TileKind::Light => 'l',
            TileKind::GateClosed => '+',
            TileKind::GateOpen => '\'',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<TileKind> {
        TileKind::ALL.into_iter().find(|tile| tile.glyph() == glyph)
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            TileKind::Wall => 0,
            TileKind::Floor => 1,
            TileKind::Exit => 2,
            TileKind::Map => 3,
            TileKind::Food => 4,
            TileKind::Light => 5,
            TileKind::GateClosed => 6,
            TileKind::GateOpen => 7,
        }
    }
}

/// The set of tile tags a traversal treats as passable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WalkableSet(u8);

impl WalkableSet {
    /// Everything a player can stand on: closed gates and walls block.
    pub const PASSABLE: WalkableSet = WalkableSet::from_tiles(&[
        TileKind::Floor,
        TileKind::Exit,
        TileKind::Map,
        TileKind::Food,
        TileKind::Light,
        TileKind::GateOpen,
    ]);

    /// Every tag except `Wall`; gates count as passable regardless of state.
    pub const NON_WALL: WalkableSet = WalkableSet::from_tiles(&[
        TileKind::Floor,
        TileKind::Exit,
        TileKind::Map,
        TileKind::Food,
        TileKind::Light,
        TileKind::GateClosed,
        TileKind::GateOpen,
    ]);

    pub const fn from_tiles(tiles: &[TileKind]) -> Self {
        let mut bits = 0_u8;
        let mut index = 0;
        while index < tiles.len() {
            bits |= 1 << tiles[index] as u8;
            index += 1;
        }
        Self(bits)
    }

    pub fn contains(self, tile: TileKind) -> bool {
        self.0 & (1 << tile as u8) != 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Map,
    Food,
    Light,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [ItemCategory::Map, ItemCategory::Food, ItemCategory::Light];

    pub fn tile(self) -> TileKind {
        match self {
            ItemCategory::Map => TileKind::Map,
            ItemCategory::Food => TileKind::Food,
            ItemCategory::Light => TileKind::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passable_set_blocks_walls_and_closed_gates_only() {
        for tile in TileKind::ALL {
            let expected = !matches!(tile, TileKind::Wall | TileKind::GateClosed);
            assert_eq!(WalkableSet::PASSABLE.contains(tile), expected, "{tile:?}");
        }
        assert!(WalkableSet::NON_WALL.contains(TileKind::GateClosed));
        assert!(!WalkableSet::NON_WALL.contains(TileKind::Wall));
    }

    #[test]
    fn glyphs_are_unique_per_tile() {
        for tile in TileKind::ALL {
            assert_eq!(TileKind::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(TileKind::from_glyph('?'), None);
    }

    #[test]
    fn only_gates_toggle() {
        assert_eq!(TileKind::GateClosed.toggled_gate(), Some(TileKind::GateOpen));
        assert_eq!(TileKind::GateOpen.toggled_gate(), Some(TileKind::GateClosed));
        assert_eq!(TileKind::Floor.toggled_gate(), None);
    }
}
