//! `findmeeting` CLI — find free meeting slots in a one-day calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots as JSON (stdin → stdout)
//! cat calendar.json | findmeeting find
//!
//! # Human-readable slots for a 45 minute meeting
//! findmeeting find -i calendar.json --format text --duration 45
//!
//! # Reproduce the historical merge behavior
//! findmeeting find -i calendar.json --merge latest-start
//!
//! # Check a calendar file without solving it
//! findmeeting validate -i calendar.json
//! ```
//!
//! The calendar file looks like:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "09:00", "end": "09:15", "attendees": ["alice", "bob"] },
//!     { "start": 780, "duration": 60, "attendees": ["carol"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["carol"], "duration": 30 }
//! }
//! ```

mod input;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::{query_with, MergeStrategy, TimeRange};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use crate::input::CalendarInput;

#[derive(Parser)]
#[command(
    name = "findmeeting",
    version,
    about = "Find free meeting slots in a one-day calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free slots for the request in a calendar file
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Meeting length in minutes (overrides the request's duration)
        #[arg(long)]
        duration: Option<u32>,
        /// How overlapping busy intervals of mandatory attendees are merged
        #[arg(long, value_enum, default_value_t = MergeArg::Union)]
        merge: MergeArg,
    },
    /// Parse a calendar file and report what it contains
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON array of {"start", "duration"} objects
    Json,
    /// One "HH:MM-HH:MM (N min)" line per slot
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MergeArg {
    /// Merge by the running maximum end
    Union,
    /// Legacy sweep following the most recently started interval
    LatestStart,
}

impl From<MergeArg> for MergeStrategy {
    fn from(arg: MergeArg) -> Self {
        match arg {
            MergeArg::Union => MergeStrategy::Union,
            MergeArg::LatestStart => MergeStrategy::LatestStart,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            duration,
            merge,
        } => {
            let json = read_input(input.as_deref())?;
            let (events, mut request) = CalendarInput::parse(&json)?.into_parts()?;
            if let Some(duration) = duration {
                debug!(duration, "overriding request duration");
                request = request.with_duration(duration);
            }

            let slots = query_with(&events, &request, merge.into());
            info!(slots = slots.len(), "found free slots");

            let rendered = render_slots(&slots, format)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Validate { input } => {
            let json = read_input(input.as_deref())?;
            let (events, request) = CalendarInput::parse(&json)?.into_parts()?;
            let people: BTreeSet<&str> = events
                .iter()
                .flat_map(|e| e.attendees().iter().map(String::as_str))
                .collect();

            println!("Events:              {}", events.len());
            println!("People:              {}", people.len());
            println!("Mandatory attendees: {}", request.attendees().len());
            println!("Optional attendees:  {}", request.optional_attendees().len());
            println!("Duration:            {} min", request.duration());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piping.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn render_slots(slots: &[TimeRange], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(slots).context("Failed to serialize slots")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(slots
            .iter()
            .map(|slot| format!("{} ({} min)\n", slot, slot.duration()))
            .collect()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
