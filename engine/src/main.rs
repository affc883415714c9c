// persian-num command line entry point
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use engine::config::settings::EngineSettings;
use engine::data::{batch, jalali};
use engine::transforms::transform_by_name;
use engine::{EngineError, NumberFormatter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "persian-num", about = "Persian digit, grouping and number spelling tools")]
struct Cli {
    /// JSON settings file (overrides PERSIAN_NUM_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a transform (persian, latin, separate, raw, words) to each TEXT, or to stdin lines.
    Apply { transform: String, text: Vec<String> },
    /// Render an amount with grouping, optionally followed by the currency unit.
    Amount {
        text: String,
        #[arg(long)]
        currency: bool,
    },
    /// Convert a Gregorian date (YYYY-MM-DD or "YYYY-MM-DD HH:MM") to Jalali.
    ToJalali {
        date: String,
        #[arg(long, default_value = "%Y/%m/%d")]
        format: String,
        /// Keep Latin digits in the output.
        #[arg(long)]
        latin: bool,
    },
    /// Convert a Jalali date (YYYY/MM/DD or "YYYY/MM/DD HH:MM") to Gregorian.
    ToGregorian {
        date: String,
        #[arg(long, default_value = jalali::DEFAULT_TIME)]
        default_time: String,
    },
    /// Append formatted columns to a delimited file.
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Header of the amount column.
        #[arg(long)]
        column: Option<String>,
        #[arg(long, value_delimiter = ',')]
        transforms: Vec<String>,
        #[arg(long)]
        delimiter: Option<char>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<EngineError>().map_or(1, EngineError::exit_code);
            tracing::error!("{:#}", err);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::from_env()?,
    };
    debug!("Effective settings: {:?}", settings);
    let formatter = NumberFormatter::new(settings.format.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Apply { transform, text } => {
            let transform = transform_by_name(&transform, formatter.settings())?;
            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    writeln!(out, "{}", transform.apply(&line?))?;
                }
            } else {
                for item in &text {
                    writeln!(out, "{}", transform.apply(item))?;
                }
            }
        }
        Command::Amount { text, currency } => {
            let amount = formatter.parse_amount(&text)?;
            let rendered = if currency {
                formatter.format_currency(Some(amount))
            } else {
                formatter.format_amount(amount)
            };
            writeln!(out, "{}", rendered)?;
        }
        Command::ToJalali { date, format, latin } => {
            let datetime = parse_gregorian(&date)?;
            writeln!(out, "{}", jalali::format_jalali(&datetime, &format, !latin)?)?;
        }
        Command::ToGregorian { date, default_time } => {
            match jalali::parse_jalali_datetime(&date, &default_time)? {
                Some(datetime) => writeln!(out, "{}", datetime.format("%Y-%m-%d %H:%M"))?,
                None => writeln!(out)?,
            }
        }
        Command::Batch {
            input,
            output,
            column,
            transforms,
            delimiter,
        } => {
            let mut batch_settings = settings.batch.clone();
            if let Some(column) = column {
                batch_settings.column = column;
            }
            if !transforms.is_empty() {
                batch_settings.transforms = transforms;
            }
            if let Some(delimiter) = delimiter {
                batch_settings.delimiter = delimiter;
            }
            let options = batch_settings.to_options()?;
            let summary = batch::convert_csv_file(&input, &output, &options, formatter.settings())
                .with_context(|| format!("batch conversion of '{}' failed", input.display()))?;
            info!("Wrote {} rows to {}", summary.rows, output.display());
        }
    }

    out.flush()?;
    Ok(())
}

fn parse_gregorian(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a Gregorian date like 2025-04-06", text))?;
    Ok(date.and_time(NaiveTime::default()))
}
