use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cave_core::{CaveConfig, CaveGenerator, GeneratedCave, Pos, TileKind};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file with generation parameters; missing keys use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Print the generation journal to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct CaveSummary {
    seed: u64,
    rows: usize,
    cols: usize,
    spawn: Pos,
    exit: Pos,
    gates: Vec<Pos>,
    rooms: usize,
    maps: usize,
    food: usize,
    light: usize,
}

impl CaveSummary {
    fn new(seed: u64, cave: &GeneratedCave) -> Self {
        Self {
            seed,
            rows: cave.grid.rows(),
            cols: cave.grid.cols(),
            spawn: cave.spawn,
            exit: cave.exit,
            gates: cave.gates.clone(),
            rooms: cave.room_count,
            maps: cave.grid.count(TileKind::Map),
            food: cave.grid.count(TileKind::Food),
            light: cave.grid.count(TileKind::Light),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<CaveConfig> {
    let Some(path) = path else {
        return Ok(CaveConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: CaveConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
    Ok(config)
}

fn render_with_spawn(cave: &GeneratedCave) -> String {
    let mut rendered = String::new();
    for (index, line) in cave.grid.render_ascii().lines().enumerate() {
        if index == cave.spawn.y as usize {
            rendered.extend(line.chars().enumerate().map(|(x, glyph)| {
                if x == cave.spawn.x as usize { '@' } else { glyph }
            }));
        } else {
            rendered.push_str(line);
        }
        rendered.push('\n');
    }
    rendered
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let generator = CaveGenerator::new(config).context("Invalid cave configuration")?;
    let cave = generator.generate(args.seed).context("Cave generation failed")?;

    if args.verbose {
        for event in &cave.journal.events {
            eprintln!("{event:?}");
        }
    }

    match args.format {
        OutputFormat::Ascii => {
            print!("{}", render_with_spawn(&cave));
            println!("Seed: {}", args.seed);
            println!("Spawn: {:?}", cave.spawn);
            println!("Exit: {:?}", cave.exit);
            println!("Gates: {}", cave.gates.len());
        }
        OutputFormat::Json => {
            let summary = CaveSummary::new(args.seed, &cave);
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize cave summary")?;
            println!("{json}");
        }
    }

    Ok(())
}
