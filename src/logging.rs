use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SCRY_LOG";

pub fn init(default_level: &str) -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(std::env::var(LOG_ENV).ok().as_deref(), default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(path)
}

pub fn log_path() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .context("could not resolve a state or cache directory for logs")?;
    Ok(base.join("scry").join("scry.log"))
}

fn filter_for(from_env: Option<&str>, default_level: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_app_directory() {
        if let Ok(path) = log_path() {
            assert!(path.ends_with("scry/scry.log"));
        }
    }

    #[test]
    fn environment_overrides_configured_level() {
        let filter = filter_for(Some("debug"), "warn");
        assert_eq!(filter.to_string(), "debug");

        let filter = filter_for(None, "warn");
        assert_eq!(filter.to_string(), "warn");
    }
}
