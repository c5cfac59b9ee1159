//! Kitty pane search overlay - Entry Point

use clap::Parser;
use pane_search::config::{self, KeyBindings, ResolvedConfig};
use pane_search::model::AppError;
use pane_search::remote::{resolve_pane_set, KittyRemote};
use pane_search::state::SessionController;
use pane_search::store::FileSessionStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Incremental search overlay for kitty windows
#[derive(Parser, Debug)]
#[command(name = "pane-search")]
#[command(version)]
#[command(about = "Highlight and jump between matches in kitty windows while you type")]
pub struct Args {
    /// Id of the window to search (a non-numeric value shows an error)
    pub window_id: Option<String>,

    /// Search every other window in the tab that contains WINDOW_ID
    #[arg(long)]
    pub all_windows: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address of the kitty remote-control socket (passed as --to)
    #[arg(long)]
    pub listen_on: Option<String>,
}

/// Resolve configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(with_env, args.listen_on.clone()))
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    let config = resolve_config(&args)?;

    pane_search::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let remote = KittyRemote::from_config(&config)?;

    if config.shrink_window {
        if let Err(err) = remote.shrink_self() {
            debug!(error = %err, "could not shrink overlay window");
        }
    }

    let resolution = resolve_pane_set(args.window_id.as_deref(), args.all_windows, || {
        remote.list_windows()
    });

    let store = FileSessionStore::new(config.state_file.clone());
    let session = SessionController::new(remote, store, resolution, KeyBindings::default());

    let outcome = pane_search::view::run_session(session)?;

    Ok(ExitCode::from(outcome.exit_code()))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(run(args)?)
}
