pub mod builder;
pub mod distribution;

pub use self::builder::AnalyzeParams;
pub use self::distribution::Distribution;

use crate::config::ModelConfig;
use crate::error::{SmResult, StylometerError};
use fnv::FnvHashMap;

/// The immutable result of analyzing a corpus: one normalized n-gram
/// distribution per author, plus the configuration that produced them.
///
/// Nothing mutates a model after construction, so it can be queried from
/// any number of places without synchronization.
#[derive(Debug, Clone)]
pub struct CorpusModel {
    config: ModelConfig,
    authors: Vec<String>,
    distributions: FnvHashMap<String, Distribution>,
}

impl CorpusModel {
    pub(crate) fn new(
        config: ModelConfig,
        authors: Vec<String>,
        distributions: FnvHashMap<String, Distribution>,
    ) -> Self {
        Self {
            config,
            authors,
            distributions,
        }
    }

    /// Authors in corpus enumeration order.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// The configuration the model was built with. Queries must preprocess
    /// their input with these exact settings.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// One author's distribution.
    pub fn distribution(&self, author: &str) -> SmResult<&Distribution> {
        self.distributions
            .get(author)
            .ok_or_else(|| StylometerError::UnknownAuthor(author.to_string()))
    }
}
