use fnv::FnvHashMap;
use itertools::Itertools;

/// Characters treated as separators when punctuation is stripped.
/// Guillemets cover French-language sources.
pub const SEPARATORS: &str = ",.«»'!?\n-;:()[]";

/// Unigrams shorter than this carry no stylistic signal (articles,
/// pronouns, stray letters) and are dropped during order-1 counting.
pub const MIN_UNIGRAM_CHARS: usize = 3;

/// Lowercases `text`; unless `keep_punctuation` is set, every separator
/// becomes a single space and whitespace runs collapse.
///
/// Collapsing keeps the operation idempotent: normalizing already
/// normalized text is a no-op.
pub fn normalize(text: &str, keep_punctuation: bool) -> String {
    let lowered = text.to_lowercase();
    if keep_punctuation {
        return lowered;
    }

    let replaced: String = lowered
        .chars()
        .map(|c| if SEPARATORS.contains(c) { ' ' } else { c })
        .collect();
    replaced.split_whitespace().join(" ")
}

/// Splits on whitespace runs. Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Counts the n-grams of `tokens` at the given order.
///
/// Order 1 counts each token of at least [`MIN_UNIGRAM_CHARS`] characters;
/// order 2 counts each adjacent pair joined by one space, unfiltered.
/// Returns the count map and the total number of qualifying n-grams, so a
/// zero total (no tokens, or nothing but short tokens at order 1) leaves
/// downstream normalization empty instead of dividing by zero.
pub fn count_ngrams(tokens: &[String], order: u8) -> (FnvHashMap<String, u64>, u64) {
    let mut counts: FnvHashMap<String, u64> = FnvHashMap::default();
    let mut total = 0u64;

    match order {
        1 => {
            for token in tokens {
                if token.chars().count() < MIN_UNIGRAM_CHARS {
                    continue;
                }
                *counts.entry(token.clone()).or_insert(0) += 1;
                total += 1;
            }
        }
        2 => {
            for (first, second) in tokens.iter().tuple_windows() {
                *counts.entry(format!("{} {}", first, second)).or_insert(0) += 1;
                total += 1;
            }
        }
        // Other orders are rejected at configuration time.
        _ => {}
    }

    (counts, total)
}
