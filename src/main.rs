use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use rgbpal::config::Config;
use rgbpal::tui::Terminal;
use rgbpal::{logging, App};

#[derive(Parser)]
#[command(name = "rgbpal")]
#[command(version, about = "Mix RGB colors and collect them into a palette")]
struct Args {
    /// Palette file written by the save key
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of palette slots
    #[arg(short, long, value_name = "N")]
    slots: Option<usize>,

    /// Configuration file (defaults to ~/.config/rgbpal/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (defaults to ~/.config/rgbpal/rgbpal.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_file(args.log_file.as_deref());

    // Load configuration, command line wins
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(slots) = args.slots {
        config.palette.slots = slots;
    }
    if let Some(file) = args.file {
        config.palette.file = Some(file);
    }
    config.validate()?;
    let palette_path = config.palette_path()?;
    tracing::info!(path = %palette_path.display(), slots = config.palette.slots, "Starting");

    // Initialize terminal
    let terminal = Terminal::new()?;

    // Create and run application
    let mut app = App::new(&config, palette_path);
    app.run(terminal)?;

    Ok(())
}
