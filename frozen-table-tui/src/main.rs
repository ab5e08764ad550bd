mod app;
mod error;
mod input;
mod paths;
mod render;
mod runtime;
mod terminal;

use std::env;
use std::fs::{self, File};
use std::sync::Arc;

use frozen_table_lib::{DEFAULT_ENDPOINT, HttpSource, TableConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

/// Environment variable overriding the data endpoint.
const ENDPOINT_VAR: &str = "FROZEN_TABLE_URL";

fn init_logging() -> Result<(), AppError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&path)?)?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    init_logging()?;

    let url = env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let source = HttpSource::builder().url(url).build()?;
    log::info!("Starting with endpoint {}", source.url());

    runtime::run(TableConfig::default(), Arc::new(source)).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
