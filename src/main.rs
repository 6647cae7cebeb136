mod jsonl;
mod report;
mod script;

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use framing::config::{ConfigError, FrameConfig, parse_size};
use framing::geometry::{Dimensions, Point};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::jsonl::{JsonLinesPersistence, write_images};
use crate::report::{FitRequest, fit_report, parse_point};
use crate::script::{Script, replay};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("script refers to unknown object {0}")]
    UnknownObject(Uuid),
}

#[derive(Parser, Debug)]
#[command(name = "photowall", about = "Replay and inspect framed-photo transforms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a scripted gesture session and print what would be persisted.
    Replay(ReplayArgs),
    /// Run the coverage corrector once and print the result.
    Fit(FitArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Script file (JSON with `wallId`, `images`, `events`).
    script: PathBuf,

    #[arg(long, env = "PHOTOWALL_OUTPUT", help = "Output file; defaults to stdout")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FitArgs {
    #[arg(long, value_parser = parse_dimensions, help = "Border size, WIDTHxHEIGHT")]
    border: Dimensions,

    #[arg(long, value_parser = parse_dimensions, help = "Intrinsic image size, WIDTHxHEIGHT")]
    original: Dimensions,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, help = "Image rotation in radians")]
    rotation: f64,

    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, help = "Image offset X,Y; centred if omitted")]
    offset: Option<Point>,

    #[arg(long, help = "Image scale; minimum cover if omitted")]
    scale: Option<f64>,
}

fn parse_dimensions(raw: &str) -> Result<Dimensions, String> {
    parse_size(raw).map_err(|e| format!("expected WIDTHxHEIGHT, got {raw:?}: {e}"))
}

fn main() {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env not loaded");
        }
    }

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Replay(args) => run_replay(&args),
        Command::Fit(args) => run_fit(&args),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "photowall failed");
        std::process::exit(1);
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let config = FrameConfig::from_env()?;
    let script: Script = serde_json::from_str(&fs::read_to_string(&args.script)?)?;
    let wall_id = script.wall_id;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let out = Rc::new(RefCell::new(out));
    let persistence = JsonLinesPersistence::new(Rc::clone(&out));
    let failures = persistence.failures();

    let replayed = replay(script, config, Box::new(persistence))?;

    let mut out = out.borrow_mut();
    write_images(&mut *out, &replayed.images)?;
    out.flush()?;

    tracing::info!(
        %wall_id,
        events = replayed.summary.events,
        persisted = replayed.summary.persisted,
        failed_writes = failures.get(),
        images = replayed.images.len(),
        "replay finished"
    );
    Ok(())
}

fn run_fit(args: &FitArgs) -> Result<(), CliError> {
    let report = fit_report(&FitRequest {
        border: args.border,
        original: args.original,
        rotation: args.rotation,
        offset: args.offset,
        scale: args.scale,
    });
    tracing::debug!(?report, "fit finished");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
