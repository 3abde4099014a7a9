//! Binary entrypoint for the Pymon CLI.
//!
//! Commands:
//! - `play` - start a game, loading seed files from the config when present
//! - `init` - create a starter `config.toml` and the default world seed
//!   under `data/`
//!
//! See the library crate docs for module-level details: `pymon::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::Path;

use pymon::config::Config;
use pymon::game::{canonical_seed, GameSession, WorldSeed};
use pymon::loader;

#[derive(Parser)]
#[command(name = "pymon")]
#[command(about = "A text-driven exploration and creature-battle game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game
    Play,
    /// Initialize a config file and the default world seed files
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (Init writes its own later).
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Play => {
            let config = pre_config.unwrap_or_else(|| {
                info!("no usable {}; playing the built-in world", cli.config);
                Config::default()
            });
            let seed = load_seed(&config)?;
            let mut session = GameSession::new(&seed, &config.game.player_name)?;
            pymon::ui::run(&mut session)?;
        }
        Commands::Init => {
            Config::create_default(&cli.config)?;
            println!("Created {}", cli.config);
            let seed = canonical_seed();
            loader::write_seed(
                &seed,
                Path::new("data/locations.json"),
                Path::new("data/creatures.json"),
                Path::new("data/items.json"),
            )?;
            println!("Wrote the default world seed under data/");
            println!(
                "Point [seed] in {} at those files to customize the world.",
                cli.config
            );
        }
    }

    Ok(())
}

/// Resolve the seed: configured files when present, the built-in world
/// otherwise. Seed-file problems are fatal at startup.
fn load_seed(config: &Config) -> Result<WorldSeed> {
    match config.seed.paths() {
        Some((locations, creatures, items)) => {
            Ok(loader::load_seed(locations, creatures, items)?)
        }
        None => Ok(canonical_seed()),
    }
}

fn init_logging(config: &Option<Config>, verbose: u8) {
    let default_level = match verbose {
        0 => config
            .as_ref()
            .map(|c| c.logging.level.clone())
            .unwrap_or_else(|| "warn".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}
