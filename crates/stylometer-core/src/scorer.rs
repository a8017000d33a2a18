use crate::error::SmResult;
use crate::model::{CorpusModel, Distribution};
use crate::text;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Similarity of one known author to an unknown work.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorScore {
    pub author: String,
    pub score: f64,
}

/// Scores an unknown work against every author in the model.
///
/// The work is preprocessed with the exact configuration the model was
/// trained with; mixing orders or punctuation settings would make the
/// vectors incomparable. Scores come back in the model's author order;
/// callers wanting a ranking sort the result themselves.
pub fn find_author<P: AsRef<Path>>(model: &CorpusModel, work: P) -> SmResult<Vec<AuthorScore>> {
    let config = model.config();

    let raw = fs::read_to_string(work.as_ref())?;
    let tokens = text::tokenize(&text::normalize(&raw, config.keep_punctuation));
    let (counts, total) = text::count_ngrams(&tokens, config.ngram);
    let unknown = Distribution::from_counts(&counts, total);

    debug!(
        "Unknown work {}: {} distinct n-grams",
        work.as_ref().display(),
        unknown.len()
    );

    let mut results = Vec::with_capacity(model.authors().len());
    for author in model.authors() {
        let dist = model.distribution(author)?;
        results.push(AuthorScore {
            author: author.clone(),
            score: cosine_similarity(&unknown, dist),
        });
    }

    Ok(results)
}

/// Cosine similarity between two distributions.
///
/// The dot product runs over keys present in both maps; each norm covers
/// that distribution's entire value set. A zero norm on either side
/// degrades to 0.0 instead of propagating a division error, so one
/// degenerate author never aborts a scoring batch.
pub fn cosine_similarity(a: &Distribution, b: &Distribution) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }

    // Walk the smaller vector, probe the larger map.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot = 0.0;
    for (key, p) in small.iter() {
        if let Some(q) = large.probability(key) {
            dot += p * q;
        }
    }

    dot / denom
}
