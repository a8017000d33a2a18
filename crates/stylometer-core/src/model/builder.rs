use crate::config::ModelConfig;
use crate::corpus::AuthorCorpus;
use crate::error::SmResult;
use crate::model::{CorpusModel, Distribution};
use crate::text;
use fnv::FnvHashMap;
use std::fs;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// Inputs for one analysis pass over a corpus.
#[derive(TypedBuilder)]
pub struct AnalyzeParams<'a> {
    pub config: &'a ModelConfig,
    pub corpus: &'a AuthorCorpus,
}

impl AnalyzeParams<'_> {
    /// Builds the per-author frequency model.
    ///
    /// Counts are summed across all of an author's works before
    /// normalization, so longer works weigh proportionally more in that
    /// author's statistics. The weighting is deliberate; works are not
    /// normalized individually.
    ///
    /// Reads are whole-file and sequential. A single unreadable work
    /// aborts the whole pass.
    pub fn analyze(self) -> SmResult<CorpusModel> {
        self.config.validate()?;

        let authors: Vec<String> = self.corpus.authors().to_vec();
        let mut distributions = FnvHashMap::default();

        info!(
            "Analyzing {} authors (order {}, punctuation {})",
            authors.len(),
            self.config.ngram,
            if self.config.keep_punctuation { "kept" } else { "stripped" }
        );

        for author in &authors {
            let mut counts: FnvHashMap<String, u64> = FnvHashMap::default();
            let mut total = 0u64;

            for work in self.corpus.works(author)? {
                let raw = fs::read_to_string(&work)?;
                let tokens =
                    text::tokenize(&text::normalize(&raw, self.config.keep_punctuation));
                let (work_counts, work_total) = text::count_ngrams(&tokens, self.config.ngram);

                for (key, count) in work_counts {
                    *counts.entry(key).or_insert(0) += count;
                }
                total += work_total;

                debug!("  {}: {} ({} n-grams)", author, work.display(), work_total);
            }

            distributions.insert(author.clone(), Distribution::from_counts(&counts, total));
        }

        Ok(CorpusModel::new(self.config.clone(), authors, distributions))
    }
}
