use crate::error::SmResult;
use crate::model::{CorpusModel, Distribution};
use fastrand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes `size / order` weighted draws from an author's distribution into
/// `sink`, each draw emitting its space-joined tokens plus one trailing
/// space.
///
/// Draws are independent (sampling with replacement) and use the stored
/// probabilities directly. The output carries the author's n-gram
/// statistics and nothing else; grammatical structure is not a goal.
/// An author whose distribution is empty produces no output at all.
pub fn write_generated<W: Write>(
    model: &CorpusModel,
    author: &str,
    size: usize,
    sink: &mut W,
    rng: &mut Rng,
) -> SmResult<()> {
    let dist = model.distribution(author)?;
    let order = model.config().ngram as usize;
    let draws = size / order;

    debug!("Generating {} draws for '{}'", draws, author);

    for _ in 0..draws {
        if let Some(ngram) = draw(dist, rng) {
            sink.write_all(ngram.as_bytes())?;
            sink.write_all(b" ")?;
        }
    }

    Ok(())
}

/// Generates into a new UTF-8 file at `path` with the given generator.
pub fn gen_text_with_rng<P: AsRef<Path>>(
    model: &CorpusModel,
    author: &str,
    size: usize,
    path: P,
    rng: &mut Rng,
) -> SmResult<()> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    write_generated(model, author, size, &mut sink, rng)?;
    sink.flush()?;
    Ok(())
}

/// Convenience wrapper around [`gen_text_with_rng`] with an entropy-seeded
/// generator.
pub fn gen_text<P: AsRef<Path>>(
    model: &CorpusModel,
    author: &str,
    size: usize,
    path: P,
) -> SmResult<()> {
    let mut rng = Rng::new();
    gen_text_with_rng(model, author, size, path, &mut rng)
}

/// One weighted draw over the ranked entries.
///
/// Probabilities sum to 1, so the cumulative walk terminates inside the
/// loop; the final entry stands in as a guard against accumulated float
/// error.
fn draw<'a>(dist: &'a Distribution, rng: &mut Rng) -> Option<&'a str> {
    if dist.is_empty() {
        return None;
    }

    let mut r = rng.f64();
    let mut fallback = None;
    for (key, p) in dist.iter() {
        if r < p {
            return Some(key);
        }
        r -= p;
        fallback = Some(key);
    }
    fallback
}
