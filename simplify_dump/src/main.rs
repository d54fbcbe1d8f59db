use std::path::Path;
use std::process::ExitCode;

mod config;
mod error;
mod phase1load;
mod phase2transform;
mod phase3merge;
mod phase4dump;

use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use config::{Config, CONFIG_PATH};
use error::SimplifyError;
use phase1load::InputDump;
use phase3merge::{reduce_lines, Dictionary, ReduceStats};
use phase4dump::output_dictionary;

fn main() -> ExitCode {
    let config = match Config::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = config.log_level.parse().unwrap_or(LevelFilter::INFO);
    let console_layer = tracing_subscriber::fmt::layer().with_filter(level);
    tracing_subscriber::registry().with(console_layer).init();

    debug!("Config loaded: {:?}", config);

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(Dictionary, ReduceStats), SimplifyError> {
    let dump = InputDump::open(&config.input_path)?;

    info!("Processing dictionary...");
    let (dictionary, stats) = reduce_lines(dump.lines(), Dictionary::new(), config.progress_interval);
    drop(dump);

    output_dictionary(&dictionary, &config.output_path)?;

    info!("Dictionary processing complete!");
    info!("Total entries: {}", dictionary.len());
    info!("{}", stats);
    match dictionary.first() {
        Some((key, entry)) => info!("Sample entry ({}): {:?}", key, entry),
        None => info!("No entries to sample"),
    }

    Ok((dictionary, stats))
}
