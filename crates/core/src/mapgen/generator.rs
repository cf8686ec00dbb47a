//! Generation pipeline: maze, rooms, spawn and exit, items, gates.

use crate::config::CaveConfig;
use crate::connectivity::distance_field;
use crate::error::{CaveError, ConfigError};
use crate::grid::Grid;
use crate::journal::{GenerationEvent, GenerationJournal};
use crate::rng::CaveRng;
use crate::types::{ItemCategory, WalkableSet};

use super::maze::{Interior, carve_maze};
use super::model::GeneratedCave;
use super::rooms::{RoomSizes, place_rooms};
use super::scatter::{place_exit, place_gates, scatter_items, select_spawn};

pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    pub fn new(config: CaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate(&self, seed: u64) -> Result<GeneratedCave, CaveError> {
        self.generate_with(&mut CaveRng::from_seed(seed))
    }

    pub fn generate_with(&self, rng: &mut CaveRng) -> Result<GeneratedCave, CaveError> {
        let config = &self.config;
        let mut journal = GenerationJournal::default();
        let mut grid = Grid::new(config.rows, config.cols);
        let interior =
            Interior::new(&grid, config.border_margin).ok_or(ConfigError::InteriorTooSmall {
                rows: config.rows,
                cols: config.cols,
                margin: config.border_margin,
            })?;

        let maze_start = interior.random_lattice_cell(rng);
        let cells = carve_maze(&mut grid, interior, maze_start, rng)?;
        journal.record(GenerationEvent::MazeCarved { start: maze_start, cells });

        let attempts = config.room_attempts();
        let sizes = RoomSizes { min: config.min_room_size, max: config.max_room_size };
        let rooms = place_rooms(&mut grid, interior, attempts, sizes, rng)?;
        journal.record(GenerationEvent::RoomsPlaced { attempts, accepted: rooms.len() });

        let spawn = select_spawn(&rooms, maze_start);
        journal.record(GenerationEvent::SpawnSelected { pos: spawn, from_room: !rooms.is_empty() });

        let exit = place_exit(&mut grid, spawn)?;
        let distance =
            distance_field(&grid, spawn, WalkableSet::NON_WALL)?.get(exit).unwrap_or_default();
        journal.record(GenerationEvent::ExitPlaced { pos: exit, distance });

        for category in ItemCategory::ALL {
            let rule = config.items.rule(category);
            let placed = scatter_items(&mut grid, interior, category, rule, rng)?;
            journal.record(GenerationEvent::ItemsPlaced {
                category,
                requested: rule.count,
                placed: placed.len(),
            });
            if placed.len() < rule.count {
                journal.record(GenerationEvent::PlacementExhausted {
                    category,
                    requested: rule.count,
                    placed: placed.len(),
                });
            }
        }

        let gate_placement = place_gates(&mut grid, interior, config.gate_chance, spawn, exit, rng)?;
        journal.record(GenerationEvent::GatesPlaced {
            total: gate_placement.gates.len(),
            forced_open: gate_placement.forced_open,
        });

        Ok(GeneratedCave {
            grid,
            spawn,
            exit,
            gates: gate_placement.gates,
            room_count: rooms.len(),
            journal,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;
    use crate::config::ItemRules;
    use crate::connectivity::{farthest_cell, is_reachable};
    use crate::types::TileKind;

    fn generate(seed: u64) -> GeneratedCave {
        CaveGenerator::new(CaveConfig::default())
            .expect("default config")
            .generate(seed)
            .expect("generation")
    }

    #[test]
    fn same_seed_produces_byte_identical_caves() {
        let a = generate(123_456);
        let b = generate(123_456);
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_change_the_layout() {
        assert_ne!(generate(1).canonical_bytes(), generate(2).canonical_bytes());
    }

    #[test]
    fn exit_is_the_farthest_cell_from_spawn() {
        for seed in [1_u64, 2, 3, 40, 99, 1_024] {
            let cave = generate(seed);
            assert_eq!(cave.grid.tile_or_wall(cave.exit), TileKind::Exit);
            assert_eq!(farthest_cell(&cave.grid, cave.spawn), Ok(cave.exit), "seed={seed}");
        }
    }

    #[test]
    fn gate_list_matches_gate_tiles() {
        let cave = generate(77_777);
        let on_grid = cave.grid.positions_of(&[TileKind::GateClosed, TileKind::GateOpen]);
        assert_eq!(cave.gates, on_grid);
    }

    #[test]
    fn journal_records_each_stage_in_order() {
        let cave = generate(5);
        let events = &cave.journal.events;
        assert!(matches!(events[0], GenerationEvent::MazeCarved { .. }));
        assert!(matches!(events[1], GenerationEvent::RoomsPlaced { attempts: 50, .. }));
        assert!(matches!(events[2], GenerationEvent::SpawnSelected { .. }));
        assert!(matches!(events[3], GenerationEvent::ExitPlaced { pos, .. } if pos == cave.exit));
        assert!(matches!(events.last(), Some(GenerationEvent::GatesPlaced { .. })));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CaveConfig { rows: 1, ..CaveConfig::default() };
        assert!(CaveGenerator::new(config).is_err());
    }

    #[test]
    fn zero_room_density_spawns_on_maze_start() {
        let config = CaveConfig { room_density: 0.0, ..CaveConfig::default() };
        let cave = CaveGenerator::new(config).expect("config").generate(8).expect("generation");
        assert_eq!(cave.room_count, 0);
        let Some(GenerationEvent::MazeCarved { start, .. }) = cave.journal.events.first() else {
            panic!("maze event should come first");
        };
        assert_eq!(cave.spawn, *start);
    }

    #[test]
    fn oversized_item_request_is_journaled_as_a_shortfall() {
        let mut config =
            CaveConfig { rows: 15, cols: 21, items: ItemRules::none(), ..CaveConfig::default() };
        config.items.food.count = usize::MAX / 8;
        let cave = CaveGenerator::new(config).expect("config").generate(1).expect("generation");
        let shortfalls: Vec<_> = cave.journal.shortfalls().collect();
        assert!(matches!(
            shortfalls.as_slice(),
            [GenerationEvent::PlacementExhausted { category: ItemCategory::Food, .. }]
        ));
        assert!(is_reachable(&cave.grid, cave.spawn, cave.exit, WalkableSet::PASSABLE)
            .expect("in bounds"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn spawn_reaches_exit_for_any_seed(seed in any::<u64>()) {
            let cave = generate(seed);
            prop_assert!(
                is_reachable(&cave.grid, cave.spawn, cave.exit, WalkableSet::PASSABLE).unwrap_or(false),
                "seed={seed} should leave the exit reachable"
            );
            prop_assert_ne!(cave.grid.tile_or_wall(cave.spawn), TileKind::Wall);
            prop_assert_eq!(cave.grid.tile_or_wall(cave.exit), TileKind::Exit);
        }
    }
}
