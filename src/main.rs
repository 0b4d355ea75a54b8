//! hangwheel - terminal word-guessing game.
//!
//! One operator enters a puzzle; players spin the wheel, guess consonants,
//! buy vowels, and try to solve it outright.

mod config;
mod core;
mod data;
mod frontend;
mod game;
mod theme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use crate::core::AppCore;
use crossterm::event::KeyEvent;
use frontend::tui::dialog::InputDialog;
use frontend::{FrontendEvent, TuiFrontend};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hangwheel")]
#[command(about = "Terminal word-guessing game", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.hangwheel)
    /// Can also be set via HANGWHEEL_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Color theme (dark, light)
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    CheckConfig {
        /// Config file to validate (defaults to the active config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so tracing writes to a file.
    // Use RUST_LOG to control the level.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("hangwheel.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("HANGWHEEL_DIR", data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    }

    if let Some(Commands::CheckConfig { file }) = cli.command {
        return check_config(file.or(cli.config));
    }

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()?
    };
    if let Some(theme) = cli.theme {
        config.active_theme = theme;
    }

    run_tui(config)
}

/// Validate a config file and report problems: one line per issue,
/// non-zero exit when anything is wrong.
fn check_config(file: Option<PathBuf>) -> Result<()> {
    let config = match &file {
        Some(path) => {
            println!("Validating config file: {:?}", path);
            Config::load_from_path(path)?
        }
        None => {
            println!("Validating active config");
            Config::load()?
        }
    };

    let problems = config.validate();
    if problems.is_empty() {
        println!("✓ Config is valid");
        println!(
            "  vowel cost ${}, {} wheel wedges, theme '{}'",
            config.game.vowel_cost,
            config.wheel().wedges().len(),
            config.active_theme
        );
    } else {
        for problem in &problems {
            eprintln!("✗ {}", problem);
        }
        eprintln!("\n✗ Found {} problem(s)", problems.len());
        std::process::exit(1);
    }

    Ok(())
}

/// Main event loop: poll, route by input mode, render when state moved.
fn run_tui(config: Config) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);
    let mut core = AppCore::new(config);
    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(poll_timeout);

    sync_dialog(&core, &mut frontend);

    while core.running {
        let events = frontend.poll_events()?;

        for event in events {
            match event {
                FrontendEvent::Quit => core.quit(),
                FrontendEvent::Resize { .. } => core.needs_render = true,
                FrontendEvent::Key { code, modifiers } => {
                    if core.ui_state.input_mode.uses_dialog() {
                        // Dialog modes: the dialog collects text and the
                        // submission maps to one core operation.
                        if let Some(dialog) = frontend.dialog.as_mut() {
                            if let Some(text) = dialog.input(KeyEvent::new(code, modifiers)) {
                                core.submit_dialog(&text)?;
                            }
                        }
                        core.needs_render = true;
                    } else {
                        core.handle_key(code)?;
                    }
                }
            }
        }

        sync_dialog(&core, &mut frontend);

        if core.needs_render {
            frontend.render(&core)?;
            core.needs_render = false;
        }
    }

    frontend.cleanup()
}

/// Keep the frontend's modal dialog in step with the core's input mode.
fn sync_dialog(core: &AppCore, frontend: &mut TuiFrontend) {
    match core.current_prompt() {
        Some((title, message)) => {
            let mode = core.ui_state.input_mode.clone();
            let stale = frontend
                .dialog
                .as_ref()
                .map(|dialog| dialog.mode() != &mode)
                .unwrap_or(true);
            if stale {
                frontend.dialog = Some(InputDialog::new(mode, title, &message));
            }
        }
        None => frontend.dialog = None,
    }
}
