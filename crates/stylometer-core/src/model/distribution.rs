use crate::text;
use fnv::FnvHashMap;

/// A normalized n-gram frequency distribution for one body of text,
/// usable as a sparse non-negative vector.
///
/// Entries are kept twice: a probability lookup map, and a vector ordered
/// descending by probability for rank walks and weighted sampling. The
/// Euclidean norm over every probability value is cached at construction.
///
/// ## Invariants
/// - Probabilities sum to 1.0 (within float error), or the distribution
///   is empty.
/// - `ranked` holds exactly the entries of `probs`, sorted descending.
///   Ties keep counting order; that order is not meaningful beyond
///   grouping equal values together.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    probs: FnvHashMap<String, f64>,
    ranked: Vec<(String, f64)>,
    norm: f64,
}

impl Distribution {
    /// Normalizes raw counts into probabilities.
    ///
    /// A zero total yields an empty distribution; nothing divides by zero.
    pub fn from_counts(counts: &FnvHashMap<String, u64>, total: u64) -> Self {
        if total == 0 {
            return Self::default();
        }

        let mut probs = FnvHashMap::default();
        let mut ranked = Vec::with_capacity(counts.len());
        let mut norm_sq = 0.0;

        for (key, &count) in counts {
            let p = count as f64 / total as f64;
            probs.insert(key.clone(), p);
            ranked.push((key.clone(), p));
            norm_sq += p * p;
        }

        // Stable sort: ties keep the map's deterministic iteration order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self {
            probs,
            ranked,
            norm: norm_sq.sqrt(),
        }
    }

    /// The probability of one n-gram key, if present.
    pub fn probability(&self, key: &str) -> Option<f64> {
        self.probs.get(key).copied()
    }

    /// Entries ordered descending by probability.
    pub fn ranked(&self) -> &[(String, f64)] {
        &self.ranked
    }

    /// Euclidean norm over every probability value.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Keys and probabilities in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranked.iter().map(|(k, p)| (k.as_str(), *p))
    }

    /// Returns the `n`-th (1-based) group of n-grams sharing one exact
    /// probability value, visiting groups in descending order. Each n-gram
    /// comes back as its constituent tokens.
    ///
    /// Fewer than `n` distinct values is an empty result, not an error.
    /// The grouping is rebuilt from this distribution on every call, so
    /// two authors coincidentally sharing a probability value can never
    /// contaminate each other.
    pub fn nth_rank_group(&self, n: usize) -> Vec<Vec<String>> {
        if n == 0 {
            return Vec::new();
        }

        let mut visited = 0usize;
        let mut idx = 0usize;
        while idx < self.ranked.len() {
            let value = self.ranked[idx].1;
            let mut end = idx + 1;
            while end < self.ranked.len() && self.ranked[end].1 == value {
                end += 1;
            }

            visited += 1;
            if visited == n {
                return self.ranked[idx..end]
                    .iter()
                    .map(|(key, _)| text::tokenize(key))
                    .collect();
            }
            idx = end;
        }

        Vec::new()
    }
}
