//! Procedural cave generation split into carving, room, and scatter stages.

pub mod maze;
pub mod model;
pub mod rooms;
pub mod scatter;

mod generator;

pub use generator::CaveGenerator;
pub use maze::Interior;
pub use model::GeneratedCave;
pub use rooms::RoomRect;

use crate::config::CaveConfig;
use crate::error::CaveError;

pub fn generate_cave(config: CaveConfig, seed: u64) -> Result<GeneratedCave, CaveError> {
    CaveGenerator::new(config)?.generate(seed)
}

#[cfg(test)]
mod tests {
    use super::{CaveConfig, CaveGenerator};

    #[test]
    fn generate_cave_matches_cave_generator_output() {
        let seed = 123_u64;
        let config = CaveConfig::default();

        let from_helper = super::generate_cave(config.clone(), seed).expect("helper");
        let from_generator =
            CaveGenerator::new(config).expect("config").generate(seed).expect("generator");

        assert_eq!(from_helper, from_generator);
    }
}
