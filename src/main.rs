//! Favorites tile list - Entry Point

use clap::Parser;
use favtiles::model::AppError;
use favtiles::session::{DragGesture, Gesture};
use std::path::PathBuf;
use tracing::info;

/// Favorites tile list - arrange a contact snapshot and replay gestures on it
#[derive(Parser, Debug)]
#[command(name = "favtiles")]
#[command(version)]
#[command(about = "Arrange favorite contacts by pinned position and replay drag/remove gestures")]
pub struct Args {
    /// Path to contact snapshot (JSON array or one JSON row per line)
    pub snapshot: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Slots that can hold an explicit pin (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pin_limit: Option<u32>,

    /// Tiles per tiled row (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Drag the contact at FROM and drop it at TO (repeatable, applied in order)
    #[arg(long = "drag", value_name = "FROM:TO")]
    pub drags: Vec<DragGesture>,

    /// Swipe away the contact at INDEX after all drags
    #[arg(long, value_name = "INDEX")]
    pub remove: Option<usize>,

    /// Undo the removal instead of committing it
    #[arg(long, requires = "remove")]
    pub undo: bool,
}

impl Args {
    /// Gestures in the order they are replayed.
    pub fn gestures(&self) -> Vec<Gesture> {
        let mut gestures: Vec<Gesture> = self.drags.iter().copied().map(Gesture::Drag).collect();
        if let Some(index) = self.remove {
            gestures.push(Gesture::Remove {
                index,
                undo: self.undo,
            });
        }
        gestures
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = favtiles::config::load_config_with_precedence(args.config.clone())?;
        let merged = favtiles::config::merge_config(config_file);
        let with_env = favtiles::config::apply_env_overrides(merged);
        favtiles::config::apply_cli_overrides(
            with_env,
            args.pin_limit.map(|n| n as usize),
            args.columns.map(|n| n as usize),
        )
    };

    // Flushes buffered log lines on drop.
    let _log_guard = favtiles::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let rows = favtiles::source::load_snapshot(&args.snapshot)?;
    let report = favtiles::session::run_session(rows, config.engine_config(), &args.gestures())?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
