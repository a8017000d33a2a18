use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stylometer_core::{AuthorCorpus, AuthorScore, CorpusModel};

/// Renders the attribution ranking, best match first.
pub fn attribution(work: &str, results: &[AuthorScore]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Author").add_attribute(Attribute::Bold),
        Cell::new("Similarity").fg(Color::Cyan),
    ]);

    for (i, entry) in results.iter().enumerate() {
        let name_cell = if i == 0 {
            Cell::new(&entry.author)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&entry.author)
        };
        table.add_row(vec![name_cell, Cell::new(format!("{:.4}", entry.score))]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\nClosest authors for {}:\n{}", work, table);
}

/// Renders the per-author summary after an analysis pass.
pub fn model_summary(model: &CorpusModel, corpus: &AuthorCorpus) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Author").add_attribute(Attribute::Bold),
        Cell::new("Works"),
        Cell::new("Distinct n-grams"),
        Cell::new("Top n-gram").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for author in model.authors() {
        let works = corpus.works(author).map(|w| w.len()).unwrap_or(0);
        let Ok(dist) = model.distribution(author) else {
            continue;
        };

        let top = dist
            .ranked()
            .first()
            .map(|(key, p)| format!("{} ({:.4})", key, p))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(author).add_attribute(Attribute::Bold),
            Cell::new(works.to_string()),
            Cell::new(dist.len().to_string()),
            Cell::new(top),
        ]);
    }

    println!("\n{}", table);
}
