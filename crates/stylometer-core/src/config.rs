use crate::error::{SmResult, StylometerError};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Smallest supported n-gram order (single tokens).
pub const MIN_NGRAM_ORDER: u8 = 1;

/// Largest supported n-gram order (adjacent token pairs).
pub const MAX_NGRAM_ORDER: u8 = 2;

/// Settings shared by analysis and every query run against the resulting
/// model. Frozen for the lifetime of one model: a work scored or generated
/// with a different order or punctuation setting would not be comparable.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// N-gram order: 1 counts single tokens, 2 counts adjacent token pairs.
    #[arg(short = 'm', long, default_value_t = 1)]
    pub ngram: u8,

    /// Keep punctuation characters instead of replacing them with spaces.
    #[arg(short = 'P', long, default_value_t = false)]
    pub keep_punctuation: bool,

    /// Root directory holding one subdirectory per author.
    #[arg(short = 'd', long, default_value = "data/authors")]
    pub authors_dir: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ngram: 1,
            keep_punctuation: false,
            authors_dir: "data/authors".to_string(),
        }
    }
}

impl ModelConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects n-gram orders the engine does not support.
    pub fn validate(&self) -> SmResult<()> {
        if self.ngram < MIN_NGRAM_ORDER || self.ngram > MAX_NGRAM_ORDER {
            return Err(StylometerError::Config(format!(
                "unsupported n-gram order {} (supported: {}..={})",
                self.ngram, MIN_NGRAM_ORDER, MAX_NGRAM_ORDER
            )));
        }
        Ok(())
    }
}
