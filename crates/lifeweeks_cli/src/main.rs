//! `lifeweeks` command-line entry point.
//!
//! # Responsibility
//! - Load sheet payloads from a data directory and print the week grid (or
//!   the raw week records as JSON).
//! - Keep all timeline semantics in `lifeweeks_core`.

use chrono::Local;
use clap::{Parser, ValueEnum};
use lifeweeks_core::present::render_grid;
use lifeweeks_core::{
    default_log_level, init_logging, CalendarDate, DirectorySheetSource, TimelineConfig,
    TimelineService, TimelineSettings,
};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Grid,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lifeweeks", version, about = "Render a life as a grid of weeks")]
struct Cli {
    /// Directory holding `<sheet>.json` and `<sheet>Phases.json`.
    #[arg(long)]
    data_dir: PathBuf,
    /// JSON settings file (`startDate`, `endYear`, `today`, `sheetName`).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    sheet: Option<String>,
    /// Birth date, `YYYY-MM-DD` or `Date(Y,M,D)`.
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    end_year: Option<i32>,
    /// Overrides the current local date.
    #[arg(long)]
    today: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&level, cli.log_dir.as_deref()) {
        eprintln!("lifeweeks: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={}", err);
            eprintln!("lifeweeks: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let file_settings = match &cli.config {
        Some(path) => TimelineSettings::from_json_str(&std::fs::read_to_string(path)?)?,
        None => TimelineSettings::default(),
    };
    let settings = file_settings.overlay(TimelineSettings {
        start_date: cli.start_date,
        end_year: cli.end_year,
        today: cli.today,
        sheet_name: cli.sheet,
    });

    let local_today = CalendarDate::from(Local::now().date_naive());
    let config = TimelineConfig::from_settings(&settings, local_today)?;
    let service = TimelineService::new(DirectorySheetSource::new(cli.data_dir));
    let timeline = service.build(&config)?;

    Ok(match cli.format {
        OutputFormat::Grid => render_grid(&timeline),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&timeline)?),
    })
}
