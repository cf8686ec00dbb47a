use anyhow::{Result, bail};
use cave_core::{
    CaveConfig, CaveRng, Pos, TileKind, ToggleOutcome, WalkableSet, generate_cave, is_reachable,
    rearrange, toggle_with_rollback,
};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 20)]
    levels: u64,
    #[arg(short, long, default_value_t = 500)]
    steps: u32,
}

fn choose(rng: &mut CaveRng, slice: &[Pos]) -> Pos {
    slice[rng.range_usize(0, slice.len() - 1)]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CaveConfig::default();

    println!(
        "Starting gate fuzz harness on seed {} for {} levels x {} steps...",
        args.seed, args.levels, args.steps
    );
    let mut rng = CaveRng::from_seed(args.seed);
    let (mut kept, mut rolled_back, mut rearranged) = (0_u64, 0_u64, 0_u64);

    for level in 0..args.levels {
        let level_seed = args.seed.wrapping_add(level);
        let mut cave = generate_cave(config.clone(), level_seed)?;
        let floors = cave.grid.positions_of(&[TileKind::Floor]);
        if floors.is_empty() {
            bail!("Level seed {level_seed} produced no floor tiles");
        }

        let mut player = cave.spawn;
        for _ in 0..args.steps {
            // Bias towards toggles; rearranging is the rarer user action.
            if rng.chance(0.1) {
                player = choose(&mut rng, &floors);
                rearrange(&mut cave.grid, player, cave.exit, config.open_ratio, &mut rng)?;
                rearranged += 1;
            } else {
                match toggle_with_rollback(
                    &mut cave.grid,
                    &cave.gates,
                    player,
                    cave.exit,
                    config.toggle_prob,
                    &mut rng,
                )? {
                    ToggleOutcome::Kept { .. } => kept += 1,
                    ToggleOutcome::RolledBack { .. } => rolled_back += 1,
                }
            }

            // Assert invariants
            if !is_reachable(&cave.grid, player, cave.exit, WalkableSet::PASSABLE)? {
                bail!("Invariant failed: exit unreachable from {player:?} on level seed {level_seed}");
            }
            let gate_tiles = cave.grid.positions_of(&[TileKind::GateClosed, TileKind::GateOpen]);
            if gate_tiles != cave.gates {
                bail!("Invariant failed: gate set changed on level seed {level_seed}");
            }
        }
    }

    println!("Kept: {kept}, rolled back: {rolled_back}, rearranged: {rearranged}");
    println!("Fuzzing completed successfully.");
    Ok(())
}
