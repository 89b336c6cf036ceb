#![warn(missing_docs)]
//! Binary entrypoint for the dispatcher demo.
//!
//! Loads a declarative binding table, builds a small fixed document, feeds
//! it a scripted sequence of key presses, and reports what fired, what was
//! suppressed pending a chord, and what was eventually replayed.

use std::{collections::HashMap, path::PathBuf, process, time::Duration};

use clap::Parser;
use shortkey_core::{AMBIGUITY_WINDOW, Binding, HandlerResult};
use shortkey_host::{Harness, KeyEvent, Modifiers, NodeHandle};
use shortkey_stroke::{Chord, Modifier};
use tokio::{runtime::Builder, time::timeout};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod document;
mod script;

use config::BindingSpec;
use script::ScriptedPress;

/// Logging controls, mirroring the flag shapes of larger CLIs in this
/// workspace's corpus (`--trace`/`--debug`/`--log-filter`).
#[derive(clap::Args, Debug)]
struct LogArgs {
    /// Enable trace-level logging.
    #[arg(long, conflicts_with_all = ["debug", "log_filter"])]
    trace: bool,
    /// Enable debug-level logging.
    #[arg(long, conflicts_with_all = ["trace", "log_filter"])]
    debug: bool,
    /// Explicit `tracing_subscriber::EnvFilter` directive, overrides the above.
    #[arg(long)]
    log_filter: Option<String>,
}

impl LogArgs {
    /// Resolves the configured flags into a concrete filter directive.
    fn filter(&self) -> EnvFilter {
        if let Some(spec) = &self.log_filter {
            return EnvFilter::new(spec);
        }
        let level = if self.trace {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn"
        };
        EnvFilter::new(format!("shortkey_core={level},shortkey_cli={level}"))
    }
}

/// Command-line interface for the `shortkey-cli` binary.
#[derive(Parser, Debug)]
#[command(name = "shortkey-cli", about = "Demo dispatcher CLI", version)]
struct Cli {
    /// Path to a RON binding table. Defaults to a small built-in demo.
    #[arg(long, value_name = "PATH")]
    bindings: Option<PathBuf>,

    /// Path to a scripted key-press feed. Defaults to a small built-in demo.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Logging controls.
    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(cli.log.filter())
        .with(fmt::layer().without_time())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Loads bindings and a scripted feed, drives them through a [`Harness`],
/// and reports what fired, warned, or was replayed.
fn run(cli: &Cli) -> Result<(), String> {
    let bindings = match &cli.bindings {
        Some(path) => config::load_bindings(path)?,
        None => ron::from_str(config::DEMO_BINDINGS).map_err(|e| e.to_string())?,
    };
    let presses = match &cli.script {
        Some(path) => script::load(path)?,
        None => script::parse(script::DEMO_SCRIPT)?,
    };

    let (_, nodes) = document::build();
    let mut harness: Harness<String> = Harness::new();
    harness.register(bindings.into_iter().map(to_binding).collect());

    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| e.to_string())?;
    runtime.block_on(drive(&mut harness, &nodes, presses))?;

    for warning in harness.warnings() {
        println!("warning: {warning}");
    }
    for error in harness.errors() {
        println!("handler error: {error}");
    }
    let replayed = harness.replayed_keys();
    if !replayed.is_empty() {
        println!("replayed: {}", replayed.join(", "));
    }
    Ok(())
}

/// Feeds each scripted press through the harness in turn, then lets any
/// still-pending ambiguity timer run to completion.
async fn drive(
    harness: &mut Harness<String>,
    nodes: &HashMap<String, NodeHandle>,
    presses: Vec<ScriptedPress>,
) -> Result<(), String> {
    for press in presses {
        let current_target = nodes
            .get(&press.node_id)
            .cloned()
            .ok_or_else(|| format!("unknown node id in script: {}", press.node_id))?;
        let chord = Chord::parse(&press.chord).map_err(|e| e.to_string())?;
        let modifiers = Modifiers {
            ctrl: chord.modifiers.contains(&Modifier::Ctrl),
            shift: chord.modifiers.contains(&Modifier::Shift),
            alt: chord.modifiers.contains(&Modifier::Alt),
            meta: chord.modifiers.contains(&Modifier::Meta),
        };
        let mut event =
            KeyEvent::new(chord.key.to_spec(), modifiers, current_target.clone(), current_target);
        harness.fire(&mut event);
    }

    // If the script ends mid-chord, let the ambiguity timer run its course
    // instead of leaving the last bindings pending forever; a real listener
    // would instead race this against its own event source.
    match timeout(AMBIGUITY_WINDOW + Duration::from_millis(100), harness.wait_for_timer()).await {
        Ok(_) | Err(_) => {}
    }
    Ok(())
}

/// Turns a declarative [`BindingSpec`] into a handler that prints its
/// action name and consumes the event.
fn to_binding(spec: BindingSpec) -> Binding<String> {
    let action = spec.action.clone();
    Binding::new(
        spec.sequence,
        spec.selector,
        move |_: &String| -> HandlerResult {
            println!("fired: {action}");
            Ok(true)
        },
        spec.action,
    )
}
