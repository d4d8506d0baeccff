mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use reldate::{FormatterConfig, RelativeTimeFormatter, TimestampInput};

/// Print a date the way a person would say it, in Russian
#[derive(Parser, Debug)]
#[command(name = "reldate", version, about, long_about = None)]
struct Args {
    /// Epoch seconds or a date such as "2013-12-11 11:48" or "3 days ago"
    #[arg(allow_hyphen_values = true)]
    timestamp: String,

    /// IANA timezone for calendar math (defaults to the host zone)
    #[arg(long = "tz", value_name = "ID")]
    timezone: Option<String>,

    /// Print the time-ago phrase instead of the relative date
    #[arg(long)]
    ago: bool,

    /// Measure 7-27 day gaps in days rather than weeks
    #[arg(long)]
    no_weeks: bool,

    /// Epoch seconds the time-ago phrase is measured from (defaults to now)
    #[arg(long, value_name = "EPOCH", default_value_t = 0)]
    reference: i64,

    /// Include seconds in the clock time
    #[arg(long)]
    seconds: bool,

    /// Omit the clock time
    #[arg(long)]
    no_time: bool,

    /// Print both phrases as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output {
    timestamp: i64,
    timezone: String,
    date: String,
    ago: String,
}

fn main() -> ExitCode {
    // Ok to fail silently - the tool works without logging
    let _ = logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let timestamp = TimestampInput::from(args.timestamp.as_str()).to_epoch()?;
    let mut config = FormatterConfig::new(timestamp)
        .with_clock_time(!args.no_time)
        .with_seconds(args.seconds);
    if let Some(tz) = &args.timezone {
        config = config.with_timezone(tz.as_str());
    }
    let formatter = RelativeTimeFormatter::from_config(config);
    let include_weeks = !args.no_weeks;

    if args.json {
        let output = Output {
            timestamp,
            timezone: formatter.timezone(),
            date: formatter.generate()?,
            ago: formatter.ago(include_weeks, args.reference)?,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to encode output")?;
        println!("{json}");
    } else if args.ago {
        println!("{}", formatter.ago(include_weeks, args.reference)?);
    } else {
        println!("{}", formatter.to_display_string()?);
    }

    Ok(())
}
