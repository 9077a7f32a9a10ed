//! Server configuration parsed from environment variables.
//!
//! Hero timing values are validated strictly: a value that does not parse
//! is an error, never a silent fallback to the default.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::sequencer::{
    DEFAULT_CURSOR_BLINK_MS, DEFAULT_ERASING_INTERVAL_MS, DEFAULT_HOLD_MS, DEFAULT_TYPING_INTERVAL_MS, PhraseList,
    SequencerConfig, SequencerError,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBSITE_DIR: &str = "website";

/// Separator between phrases in `HERO_PHRASES`.
pub const PHRASE_SEPARATOR: char = '|';

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be true/false, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },

    #[error("invalid hero config: {0}")]
    Sequencer(#[from] SequencerError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub website_dir: PathBuf,
    pub hero: SequencerConfig,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: default `website`
    /// - `HERO_PHRASES`: `|`-separated phrases, default built-in titles
    /// - `HERO_TYPING_MS`: default 80
    /// - `HERO_ERASING_MS`: default 50
    /// - `HERO_HOLD_MS`: default 1200
    /// - `HERO_CURSOR_BLINK_MS`: default 530
    /// - `HERO_FIX_ARTICLES`: default false
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparseable values or an invalid hero config.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let website_dir = lookup("WEBSITE_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from);

        let phrases = match lookup("HERO_PHRASES") {
            Some(raw) => PhraseList::new(raw.split(PHRASE_SEPARATOR))?,
            None => PhraseList::default(),
        };

        let hero = SequencerConfig {
            typing_interval: parse_millis(&lookup, "HERO_TYPING_MS", DEFAULT_TYPING_INTERVAL_MS)?,
            erasing_interval: parse_millis(&lookup, "HERO_ERASING_MS", DEFAULT_ERASING_INTERVAL_MS)?,
            hold: parse_millis(&lookup, "HERO_HOLD_MS", DEFAULT_HOLD_MS)?,
            cursor_blink: parse_millis(&lookup, "HERO_CURSOR_BLINK_MS", DEFAULT_CURSOR_BLINK_MS)?,
            fix_articles: parse_flag(&lookup, "HERO_FIX_ARTICLES")?,
            ..SequencerConfig::new(phrases)
        };
        hero.validate()?;

        Ok(Self { port, website_dir, hero })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn parse_millis<F>(lookup: &F, var: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_var(lookup, var, default).map(Duration::from_millis)
}

fn parse_flag<F>(lookup: &F, var: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
