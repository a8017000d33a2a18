use crate::config::ModelConfig;
use crate::corpus::AuthorCorpus;
use crate::error::{SmResult, StylometerError};
use crate::generator;
use crate::model::{AnalyzeParams, CorpusModel};
use crate::scorer::{self, AuthorScore};
use std::path::Path;
use tracing::info;

/// One configured analysis session.
///
/// Every query goes through [`StylometerSession::model`], which rejects
/// callers with `NotAnalyzed` until [`StylometerSession::analyze`] has
/// produced a model. After that the model is immutable and queries only
/// read from it.
pub struct StylometerSession {
    config: ModelConfig,
    corpus: AuthorCorpus,
    model: Option<CorpusModel>,
}

impl StylometerSession {
    /// Validates the configuration and scans the corpus root.
    pub fn new(config: ModelConfig) -> SmResult<Self> {
        config.validate()?;
        let corpus = AuthorCorpus::open(&config.authors_dir)?;
        Ok(Self {
            config,
            corpus,
            model: None,
        })
    }

    pub fn corpus(&self) -> &AuthorCorpus {
        &self.corpus
    }

    /// The analyzed model, or `NotAnalyzed` before the first `analyze`.
    pub fn model(&self) -> SmResult<&CorpusModel> {
        self.model.as_ref().ok_or(StylometerError::NotAnalyzed)
    }

    /// Builds the per-author model. Must complete before any query.
    pub fn analyze(&mut self) -> SmResult<()> {
        let model = AnalyzeParams::builder()
            .config(&self.config)
            .corpus(&self.corpus)
            .build()
            .analyze()?;

        info!("Model ready: {} authors", model.authors().len());
        self.model = Some(model);
        Ok(())
    }

    /// Scores an unknown work against every known author.
    pub fn find_author<P: AsRef<Path>>(&self, work: P) -> SmResult<Vec<AuthorScore>> {
        scorer::find_author(self.model()?, work)
    }

    /// Generates `size` tokens of synthetic text into a new file at `path`.
    pub fn gen_text<P: AsRef<Path>>(&self, author: &str, size: usize, path: P) -> SmResult<()> {
        generator::gen_text(self.model()?, author, size, path)
    }

    /// The n-th (1-based) most frequent n-gram group of one author. Empty
    /// when the author has fewer than `n` distinct probability values.
    pub fn nth_most_frequent(&self, author: &str, n: usize) -> SmResult<Vec<Vec<String>>> {
        Ok(self.model()?.distribution(author)?.nth_rank_group(n))
    }
}
