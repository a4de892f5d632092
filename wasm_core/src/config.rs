use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_PRIMARY_TOOL: &str = "json-formatter";

/// Inclusive bounds plus the value a control starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::ZeroMinimum { field });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if !self.contains(self.default) {
            return Err(ConfigError::DefaultOutOfBounds {
                field,
                value: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Runtime settings handed over by the host page at start-up.
///
/// Every field has a default, so `{}` (or no `init` call at all) yields the
/// stock toolbox.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub password_length: Bounds,
    pub lorem_paragraphs: Bounds,
    pub lorem_sentences: Bounds,
    pub primary_tool: String,
    pub featured_count: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_length: Bounds::new(8, 64, 16),
            lorem_paragraphs: Bounds::new(1, 10, 3),
            lorem_sentences: Bounds::new(1, 12, 4),
            primary_tool: DEFAULT_PRIMARY_TOOL.to_string(),
            featured_count: 4,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.password_length.validate("passwordLength")?;
        self.lorem_paragraphs.validate("loremParagraphs")?;
        self.lorem_sentences.validate("loremSentences")?;
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
