pub mod config;
pub mod connectivity;
pub mod error;
pub mod gates;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod rng;
pub mod types;

pub use config::{CaveConfig, ItemRule, ItemRules};
pub use connectivity::{distance_field, farthest_cell, is_reachable, shortest_path};
pub use error::{CaveError, ConfigError, GridError};
pub use gates::{RearrangeReport, ToggleOutcome, rearrange, toggle_with_rollback};
pub use grid::{DistanceField, Grid};
pub use journal::{GenerationEvent, GenerationJournal};
pub use mapgen::{CaveGenerator, GeneratedCave, generate_cave};
pub use rng::CaveRng;
pub use types::*;
