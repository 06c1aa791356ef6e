//! Runs workout requests against the exercise catalog and prints the filter and workout.
//!
//! Each request file holds a user context and an optional session:
//!
//! ```json
//! {"context": {"location": "park", "intent": "blast"}, "session": {"available_time": 20}}
//! ```

#![warn(clippy::pedantic)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ::log::{LevelFilter, debug, info, warn};
use parkfit_domain::{self as domain, ContextualEngine, WorkoutGenerator};
use parkfit_storage::{Catalog, FilterReport, WorkoutReport};

mod labels;
mod log;
mod output;
mod settings;

use labels::TemplateLabels;
use output::Output;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "parkfit",
    about = "Contextual workout filter and generator",
    version
)]
struct Cli {
    /// Request files to process
    #[arg(value_name = "REQUEST", required = true)]
    requests: Vec<PathBuf>,

    /// Exercise catalog (JSON); the built-in catalog is used if omitted
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Locale of exercise names, overrides the settings
    #[arg(short, long)]
    locale: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the recorded log entries after all requests instead of logging to stderr
    #[arg(long)]
    show_log: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let level = match cli.verbose {
        0 => settings.level_filter()?,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::init(
        Arc::new(Mutex::new(log::History::new(settings.log_history))),
        level,
        !cli.show_log,
    )?;

    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            if catalog.skipped > 0 {
                warn!(
                    "skipped {} invalid exercises in {}",
                    catalog.skipped,
                    path.display()
                );
            }
            catalog.exercises
        }
        None => domain::catalog::exercises(),
    };
    info!("catalog contains {} exercises", catalog.len());

    let locale = cli.locale.unwrap_or_else(|| settings.locale.clone());
    let labels = TemplateLabels::new(&locale);
    let engine = ContextualEngine::new(settings.engine_config()?);
    let generator = WorkoutGenerator::new(settings.generator_config()?);

    let mut outputs = vec![];
    for path in &cli.requests {
        let request = parkfit_storage::load_request(path)
            .with_context(|| format!("failed to load request from {}", path.display()))?;
        debug!("processing {}", path.display());

        let result = engine.filter_and_score(&catalog, &request.context);
        let workout = generator.generate_from_result(&result, &request.params);

        outputs.push(Output {
            request: path.display().to_string(),
            filter: FilterReport::new(&result, &labels, &locale),
            workout: WorkoutReport::new(&workout, &labels, &locale),
        });
    }

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
        Format::Text => {
            for output in &outputs {
                println!("{}", output.text());
            }
        }
    }

    if cli.show_log {
        for entry in log::entries() {
            println!("{} {:<5} {}", entry.time, entry.level, entry.message);
        }
    }

    Ok(())
}
