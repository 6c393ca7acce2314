use anyhow::{Context, Result};
use extrapaid_ingest::{Bank, ParseOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_extrapaid_home, extrapaid_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSection {
    /// Bank used when `--bank` is not given; unset means the generic parser
    pub default_bank: Option<Bank>,
    pub max_line_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub dir: PathBuf,
    /// Also write summary.json next to the CSV sheets
    pub json: bool,
}

impl Default for ParseSection {
    fn default() -> Self {
        Self {
            default_bank: None,
            max_line_chars: ParseOptions::default().max_line_chars,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("extra_paid_summary"),
            json: true,
        }
    }
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_line_chars: self.parse.max_line_chars,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(extrapaid_home()?.join("config.toml"))
}

/// Load `~/.extrapaid/config.toml`, or defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    load_config_from(&p)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_extrapaid_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[parse]\ndefault_bank = \"idfc-first\"\n").unwrap();
        assert_eq!(cfg.parse.default_bank, Some(Bank::IdfcFirst));
        assert_eq!(cfg.parse.max_line_chars, 1000);
        assert_eq!(cfg.export, ExportSection::default());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.parse.default_bank = Some(Bank::Kotak);
        cfg.export.json = false;
        fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "parse = 3").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
