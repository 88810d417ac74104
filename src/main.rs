#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use strike::{builtin_catalog, init_logging, run_session, GameEngine, Mission};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive mission in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible mission selection (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Load the mission catalog from a JSON file instead of the built-in one")]
        missions: Option<PathBuf>,
    },
    /// List the missions in the catalog.
    List {
        #[arg(long, help = "Load the mission catalog from a JSON file instead of the built-in one")]
        missions: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, missions } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (mission selection will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut engine = match missions {
                Some(path) => {
                    let catalog = Mission::load_catalog(&path)?;
                    GameEngine::with_catalog(catalog, &mut rng).map_err(|e| anyhow::anyhow!(e))?
                }
                None => GameEngine::new(&mut rng),
            };
            run_session(&mut engine, &mut rng)?;
        }
        Commands::List { missions } => {
            let catalog = match missions {
                Some(path) => Mission::load_catalog(&path)?,
                None => builtin_catalog(),
            };
            for (i, mission) in catalog.iter().enumerate() {
                let metrics = mission.metrics();
                println!(
                    "{:2}. {}: {}x{} grid, {} targets ({} armored), {} missiles",
                    i + 1,
                    mission.name(),
                    metrics.interior_height,
                    metrics.interior_width,
                    metrics.total_targets,
                    metrics.armored_targets,
                    mission.missile_allowance()
                );
                println!("    {}", mission.description());
            }
        }
    }
    Ok(())
}
