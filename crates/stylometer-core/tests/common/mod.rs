use std::fs;
use std::path::Path;

/// Lays out a corpus under `root`: one `(author, filename, content)` triple
/// per work file.
pub fn write_corpus(root: &Path, files: &[(&str, &str, &str)]) {
    for (author, name, content) in files {
        let dir = root.join(author);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }
}
