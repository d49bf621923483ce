mod app;
mod config;
mod cursor;
mod domain;
mod error;
mod format;
mod infra;
mod logging;
mod terminal;
mod ui;
mod viewport;

use crate::app::NavigationController;
use crate::config::AppConfig;
use crate::cursor::PathCursor;
use crate::error::BrowseError;
use crate::infra::{FileSystem, LocalFileSystem};
use crate::terminal::CrosstermDriver;
use anyhow::{Context, Result};
use tracing::{error, info};

fn main() -> Result<()> {
    let config = match AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("failed to load config, using defaults: {err:#}");
            AppConfig::default()
        }
    };

    match logging::init(&config.log_level) {
        Ok(path) => info!(log = %path.display(), "scry starting"),
        Err(err) => eprintln!("logging disabled: {err:#}"),
    }

    let initial = std::env::current_dir().context("failed to resolve working directory")?;
    let fs = LocalFileSystem;
    let cursor = PathCursor::new(initial, fs.resolve_home_directory());
    let (_, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut controller =
        NavigationController::open(Box::new(fs), cursor, config.layout(), rows)
            .context("failed to read starting directory")?;

    let mut driver = CrosstermDriver::start(config)?;
    let run_result = app::run(&mut driver, &mut controller);
    let restore_result = driver.restore();

    let failures = shutdown_failures(run_result, restore_result);
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("{failure}");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn shutdown_failures(
    run_result: Result<(), BrowseError>,
    restore_result: Result<()>,
) -> Vec<String> {
    let mut failures = Vec::new();
    if let Err(err) = run_result {
        error!(error = %err, "terminal driver failed");
        failures.push(err.to_string());
    }
    if let Err(err) = restore_result {
        let message = format!("{err:#}");
        error!(error = %message, "failed to restore terminal");
        failures.push(message);
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn clean_shutdown_reports_nothing() {
        assert!(shutdown_failures(Ok(()), Ok(())).is_empty());
    }

    #[test]
    fn driver_failure_survives_a_failed_restore() {
        let run: Result<(), BrowseError> =
            Err(BrowseError::DriverFatal(io::Error::other("tty closed")));
        let restore: Result<()> =
            Err(anyhow::anyhow!("raw mode stuck").context("failed to disable raw mode"));

        let failures = shutdown_failures(run, restore);
        assert_eq!(
            failures,
            vec![
                "terminal driver failure: tty closed".to_string(),
                "failed to disable raw mode: raw mode stuck".to_string(),
            ]
        );
    }

    #[test]
    fn restore_failure_alone_is_still_reported() {
        let failures = shutdown_failures(Ok(()), Err(anyhow::anyhow!("cursor hidden")));
        assert_eq!(failures, vec!["cursor hidden".to_string()]);
    }
}
