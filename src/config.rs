use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Tokenization rules for a DEXSeq results table.
///
/// The defaults match the layout DEXSeq writes: `NA` for missing values,
/// overlapping exons joined with `+`, and `<gene>_<exon>` identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    pub missing_token: String,
    pub group_separator: char,
    pub symbol_separator: char,
    pub strip_quotes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            missing_token: "NA".to_string(),
            group_separator: '+',
            symbol_separator: '_',
            strip_quotes: true,
        }
    }
}

impl ParseOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.missing_token.is_empty() {
            return Err(ConfigError::Invalid {
                key: "missing_token",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(c) = self
            .missing_token
            .chars()
            .find(|c| self.is_reserved(*c))
        {
            return Err(ConfigError::Invalid {
                key: "missing_token",
                reason: format!("{c:?} can never appear inside a field"),
            });
        }
        for (key, sep) in [
            ("group_separator", self.group_separator),
            ("symbol_separator", self.symbol_separator),
        ] {
            if self.is_reserved(sep) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("{sep:?} is removed or split on before fields are read"),
                });
            }
        }
        Ok(())
    }

    /// Characters consumed by line cleaning and field splitting.
    fn is_reserved(&self, c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (self.strip_quotes && c == '"')
    }
}

pub fn load_options(path: &Path) -> Result<ParseOptions, ConfigError> {
    let text = fs::read_to_string(path)?;
    let options: ParseOptions = toml::from_str(&text)?;
    options.validate()?;
    Ok(options)
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
