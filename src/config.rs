use crate::viewport::ScreenLayout;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub header_rows: u16,
    pub footer_rows: u16,
    pub ascii_arrows: bool,
    pub show_permissions: bool,
    pub time_format: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            header_rows: 2,
            footer_rows: 2,
            ascii_arrows: false,
            show_permissions: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_or_default() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let mut parsed = toml::from_str::<AppConfig>(raw)?;
        if !is_valid_time_format(&parsed.time_format) {
            parsed.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        Ok(parsed)
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout {
            header_rows: self.header_rows,
            footer_rows: self.footer_rows,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not resolve config directory")?;
    Ok(base.join("scry").join("config.toml"))
}

fn is_valid_time_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| item == Item::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_values_match_classic_layout() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.layout(),
            ScreenLayout {
                header_rows: 2,
                footer_rows: 2
            }
        );
        assert!(cfg.show_permissions);
        assert!(!cfg.ascii_arrows);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let raw = r#"
ascii_arrows = true
footer_rows = 3
"#;
        let cfg = AppConfig::parse(raw).expect("parse partial config");
        assert!(cfg.ascii_arrows);
        assert_eq!(cfg.footer_rows, 3);
        assert_eq!(cfg.header_rows, 2);
        assert_eq!(cfg.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn invalid_time_format_falls_back_to_default() {
        let cfg = AppConfig::parse(r#"time_format = "%Y-%Q""#).expect("parse");
        assert_eq!(cfg.time_format, DEFAULT_TIME_FORMAT);

        let cfg = AppConfig::parse(r#"time_format = "%d/%m %H:%M""#).expect("parse");
        assert_eq!(cfg.time_format, "%d/%m %H:%M");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = AppConfig::parse("config_version = 1\nheader_rows = 1").expect("parse");
        assert_eq!(cfg.header_rows, 1);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::parse("header_rows = \"two\"").is_err());
    }
}
