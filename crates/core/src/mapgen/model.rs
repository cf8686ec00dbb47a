//! Public result of one generation run.

use crate::grid::Grid;
use crate::journal::GenerationJournal;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCave {
    pub grid: Grid,
    pub spawn: Pos,
    pub exit: Pos,
    pub gates: Vec<Pos>,
    pub room_count: usize,
    pub journal: GenerationJournal,
}

impl GeneratedCave {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.rows() as u32).to_le_bytes());
        bytes.extend((self.grid.cols() as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(tile.code());
        }
        bytes.extend(self.spawn.y.to_le_bytes());
        bytes.extend(self.spawn.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());

        bytes.extend((self.gates.len() as u32).to_le_bytes());
        for gate in &self.gates {
            bytes.extend(gate.y.to_le_bytes());
            bytes.extend(gate.x.to_le_bytes());
        }

        bytes
    }
}
