use crate::error::{SmResult, StylometerError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Enumerates authors and their works under a corpus root directory.
///
/// Expected layout: one subdirectory per author, each holding that author's
/// works as UTF-8 text files. No filename pattern is required. Authors and
/// works are listed in sorted order so two runs over the same corpus see
/// the same sequence.
pub struct AuthorCorpus {
    root: PathBuf,
    authors: Vec<String>,
}

impl AuthorCorpus {
    /// Scans a corpus root. A relative path resolves against the current
    /// working directory.
    pub fn open<P: AsRef<Path>>(root: P) -> SmResult<Self> {
        let root = resolve_root(root.as_ref());
        if !root.is_dir() {
            return Err(StylometerError::Config(format!(
                "authors directory not found: {}",
                root.display()
            )));
        }

        let mut authors = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                authors.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        authors.sort();

        debug!("Corpus {}: {} authors", root.display(), authors.len());
        Ok(Self { root, authors })
    }

    /// Author names in enumeration order.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Full paths of one author's works, in sorted order.
    pub fn works(&self, author: &str) -> SmResult<Vec<PathBuf>> {
        if !self.authors.iter().any(|a| a == author) {
            return Err(StylometerError::UnknownAuthor(author.to_string()));
        }

        let mut works = Vec::new();
        for entry in fs::read_dir(self.root.join(author))? {
            let entry = entry?;
            if entry.path().is_file() {
                works.push(entry.path());
            }
        }
        works.sort();
        Ok(works)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn resolve_root(input: &Path) -> PathBuf {
    if input.is_absolute() {
        input.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(input))
            .unwrap_or_else(|_| input.to_path_buf())
    }
}
