//! Resolves a notification schedule document into its trigger.
//!
//! The binary reads a schedule (the notification options object or a bare
//! trigger object) from a file or stdin and prints the resolved trigger as
//! JSON.

pub mod config;
pub mod error;

use crate::config::AppConfig;
use crate::error::ResolveError;
use beacon_trigger::{ScheduleSpec, TriggerResolver, TriggerResult};
use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use rootcause::prelude::{Report, ResultExt};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "beacon-resolve", version, about = "Resolve a notification schedule into a trigger")]
pub struct Args {
    /// Schedule JSON file; stdin is read when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Reference time as RFC 3339; defaults to the local current time.
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<FixedOffset>>,

    /// Print compact instead of pretty JSON.
    #[arg(long)]
    pub compact: bool,
}

fn parse_now(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}

/// Reads, resolves and renders one schedule.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the trigger
/// cannot be rendered.
pub fn run<R: Read>(
    args: &Args,
    config: &AppConfig,
    stdin: R,
) -> Result<String, Report<ResolveError>> {
    let text = read_input(args, stdin)?;
    let spec = ScheduleSpec::from_json_str(&text).context(ResolveError::InvalidSchedule)?;

    let resolver = TriggerResolver::new(config.resolver.clone());
    let trigger = match args.now {
        Some(now) => resolver.resolve(&spec, &now),
        None => resolver.resolve(&spec, &Local::now()),
    };
    debug!(?trigger, "resolved trigger");

    render(&trigger, args.compact)
}

fn read_input<R: Read>(args: &Args, mut stdin: R) -> Result<String, Report<ResolveError>> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path).context(ResolveError::ReadInput {
            source: path.display().to_string(),
        }),
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context(ResolveError::ReadInput {
                    source: "stdin".to_string(),
                })?;
            Ok(text)
        }
    }
}

fn render(trigger: &TriggerResult, compact: bool) -> Result<String, Report<ResolveError>> {
    let rendered = if compact {
        serde_json::to_string(trigger)
    } else {
        serde_json::to_string_pretty(trigger)
    };
    let rendered = rendered.map_err(|e| ResolveError::Render {
        reason: e.to_string(),
    })?;
    Ok(rendered)
}
