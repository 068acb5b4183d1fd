use clap::Parser;
use color_eyre::{Result, eyre::WrapErr};
use crossterm::terminal::enable_raw_mode;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use space::app::App;
use space::config::{Cli, GameConfig};
use space::sprite::Sprites;
use space::terminal;

/// Logs go to a file since the game owns the terminal
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.game_config();
    info!(?config, assets = %cli.assets.display(), "configured");

    // Load assets before touching the terminal so a failure prints cleanly
    let sprites = Sprites::load(&cli.assets)?;

    enable_raw_mode()?;
    // Anything failing past this point must still hand the terminal back
    let result = run_game(&config, sprites);
    let restored = terminal::restore();

    result?;
    restored?;
    Ok(())
}

fn run_game(config: &GameConfig, sprites: Sprites) -> Result<()> {
    let mut stdout = stdout();
    terminal::enter(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    App::new(config, sprites).run(&mut terminal)
}
