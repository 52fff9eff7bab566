//! Replay a recorded event script against the Hearth shell
//!
//! Usage: `hearth-replay <events.json> [config.json]`
//!
//! Logs the tab bar state after every event and prints the final rendered
//! view as JSON. Set `RUST_LOG=debug` to see gesture and navigation logs.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hearth::{AppShell, ShellConfig, ShellEvent};

/// Replay host events against the Hearth shell.
#[derive(Parser)]
#[command(name = "hearth-replay", about = "Replay host events against the Hearth shell", version)]
struct Args {
    /// JSON array of shell events.
    script: PathBuf,

    /// Shell configuration file. Defaults apply when omitted.
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => ShellConfig::from_path(path)?,
        None => ShellConfig::default(),
    };

    let events = ShellEvent::load_script(&args.script)?;
    info!(events = events.len(), script = %args.script.display(), "replaying");

    let mut shell = AppShell::new(config);
    for (step, event) in events.into_iter().enumerate() {
        if let Err(err) = shell.dispatch(event) {
            warn!(step, "event rejected: {:#}", err);
            continue;
        }

        let view = shell.render();
        let bar = shell.tab_bar();
        info!(
            step,
            committed = shell.navigation().tabs().index(),
            preview = ?bar.preview_index(),
            selector_x = bar.selector_x(),
            focused = ?view.tab_bar.as_ref().and_then(|tab_bar| tab_bar.focused_index()),
            screen = view.screen.screen.route_name(),
            "rendered"
        );
    }

    let view = shell.render();
    println!("{}", serde_json::to_string_pretty(&view)?);
    shell.shutdown();
    Ok(())
}
