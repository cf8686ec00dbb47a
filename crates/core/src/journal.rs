use serde::{Deserialize, Serialize};

use crate::types::{ItemCategory, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationEvent {
    MazeCarved { start: Pos, cells: usize },
    RoomsPlaced { attempts: usize, accepted: usize },
    SpawnSelected { pos: Pos, from_room: bool },
    ExitPlaced { pos: Pos, distance: i32 },
    ItemsPlaced { category: ItemCategory, requested: usize, placed: usize },
    // Not an error: the pipeline continues with whatever was placed.
    PlacementExhausted { category: ItemCategory, requested: usize, placed: usize },
    GatesPlaced { total: usize, forced_open: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationJournal {
    pub events: Vec<GenerationEvent>,
}

impl GenerationJournal {
    pub fn record(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }

    pub fn shortfalls(&self) -> impl Iterator<Item = &GenerationEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, GenerationEvent::PlacementExhausted { .. }))
    }
}
