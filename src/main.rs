use clap::Parser;
use dentaku::app::App;
use dentaku::engine::config::Config;
use dentaku::ui::{parse_script, TuiManager};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dentaku")]
#[command(about = "Four-function calculator for the terminal")]
struct Cli {
    /// Press these keys without a UI (e.g. "7+8=") and print the result
    #[arg(long)]
    keys: Option<String>,

    /// Config file (defaults to dentaku/config.toml in the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file; filter with DENTAKU_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let mut app = App::new();

    if let Some(script) = cli.keys {
        for event in parse_script(&script)? {
            app.handle_event(event);
        }
        let state = app.get_render_state();
        println!("{}", state.display);
        if config.display.show_trace {
            println!("{}", state.trace);
        }
        return Ok(());
    }

    tracing::info!("starting calculator");
    let mut tui = TuiManager::new(&config)?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // stdout belongs to the TUI, so logs only go to a file
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::options().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_env("DENTAKU_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
