//! numpad - headless keypad host.
//!
//! Replays key scripts (from `--keys` or stdin, one script per line) into a
//! keypad and prints every committed value.

use anyhow::{Context, Result};
use clap::Parser;
use numpad::config::Config;
use numpad::engine::format_raw;
use numpad::input::tokenize_script;
use numpad::{Keypad, StandardEngine, clipboard};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "numpad", version, about = "Drive a numeric keypad from key scripts")]
struct Args {
    /// Key script to replay, e.g. "7 + 3 Enter". Reads stdin when absent.
    #[arg(long)]
    keys: Option<String>,
    /// Number the keypad starts with.
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,
    /// Config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Copy committed values to the clipboard.
    #[arg(long)]
    copy: bool,
    /// Print events as JSON lines.
    #[arg(long)]
    json: bool,
}

/// Life-cycle events reported by the host.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event {
    Commit { value: f64 },
    Cancel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        Config::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(value) = args.initial {
        config.initial_value = Some(value);
    }
    if args.copy {
        config.copy_on_commit = true;
    }

    init_logging(&config.log_level);

    let engine = StandardEngine::new().with_digit_grouping(config.digit_grouping);
    let mut keypad = Keypad::with_engine(engine, config.keypad_options())
        .context("failed to seed the keypad")?;

    let json = args.json;
    let copy_on_commit = config.copy_on_commit;
    keypad.set_on_commit(move |value| {
        emit(&Event::Commit { value }, json);
        if copy_on_commit {
            match clipboard::copy_value(value) {
                Ok(text) => debug!(%text, "copied to clipboard"),
                Err(e) => warn!("{}", e),
            }
        }
    });
    keypad.set_on_cancel(move || emit(&Event::Cancel, json));
    keypad.mount();

    match args.keys {
        Some(script) => {
            run_script(&mut keypad, &script)?;
            println!("{}", keypad.display());
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                run_script(&mut keypad, &line)?;
                println!("{}", keypad.display());
            }
        }
    }

    Ok(())
}

fn run_script(keypad: &mut Keypad, script: &str) -> Result<()> {
    for key in tokenize_script(script) {
        keypad
            .handle_key(&key)
            .with_context(|| format!("engine rejected key {key:?}"))?;
    }
    Ok(())
}

fn emit(event: &Event, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("failed to serialize {:?}: {}", event, e),
        }
        return;
    }

    match event {
        Event::Commit { value } => println!("committed {}", format_raw(*value)),
        Event::Cancel => println!("cancelled"),
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
