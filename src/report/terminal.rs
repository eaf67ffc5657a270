use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::Manifest;

/// Print the generated files and the order they must be loaded in.
pub fn render(manifest: &Manifest, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "Files: {}  Members: {}  Spouses: {}  Children: {}",
            manifest.batches.len().to_string().green(),
            manifest.total_members(),
            manifest.total_spouses(),
            manifest.total_children(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "forms2sql".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Input: {}\n", manifest.input.display());

    if manifest.batches.is_empty() {
        println!(" {} No data rows found; nothing was generated.", "[WARN]".yellow().bold());
        return Ok(());
    }

    println!("Generated {} SQL batch files:", manifest.batches.len());
    for batch in &manifest.batches {
        println!("  - {}", batch.file.display());
    }

    if verbose {
        println!();
        render_table(manifest);
    }

    println!("\n{}", "To import the data:".bold());
    for line in load_order(manifest) {
        println!("{}", line);
    }

    Ok(())
}

/// Numbered load instructions: schema first, then every batch in order.
pub fn load_order(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec![format!("1. First run: {}", manifest.schema_file)];
    lines.extend(
        manifest
            .batches
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{}. Then run: {}", i + 2, b.file.display())),
    );
    lines
}

fn render_table(manifest: &Manifest) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Batch").add_attribute(Attribute::Bold),
            Cell::new("Records").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Members").add_attribute(Attribute::Bold),
            Cell::new("Spouses").add_attribute(Attribute::Bold),
            Cell::new("Children").add_attribute(Attribute::Bold),
        ]);

    for b in &manifest.batches {
        table.add_row(vec![
            Cell::new(b.batch.number).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}-{}", b.batch.first_record, b.batch.last_record)),
            Cell::new(b.file.display()),
            Cell::new(b.members).set_alignment(CellAlignment::Right),
            Cell::new(b.spouses).set_alignment(CellAlignment::Right),
            Cell::new(b.children).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(manifest.total_members()).set_alignment(CellAlignment::Right),
        Cell::new(manifest.total_spouses()).set_alignment(CellAlignment::Right),
        Cell::new(manifest.total_children()).set_alignment(CellAlignment::Right),
    ]);

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchInfo, BatchSummary};
    use std::path::PathBuf;

    fn manifest() -> Manifest {
        let summary = |number: usize, first: usize, last: usize| BatchSummary {
            batch: BatchInfo {
                number,
                first_record: first,
                last_record: last,
            },
            file: PathBuf::from(format!("google_forms_batch_{number}.sql")),
            members: last + 1 - first,
            spouses: 1,
            children: 2,
        };
        Manifest {
            input: PathBuf::from("Data.csv"),
            schema_file: "google_forms_schema.sql".to_string(),
            batches: vec![summary(1, 1, 100), summary(2, 101, 130)],
        }
    }

    #[test]
    fn test_load_order() {
        assert_eq!(
            load_order(&manifest()),
            vec![
                "1. First run: google_forms_schema.sql",
                "2. Then run: google_forms_batch_1.sql",
                "3. Then run: google_forms_batch_2.sql",
            ]
        );
    }

    #[test]
    fn test_totals() {
        let m = manifest();
        assert_eq!(m.total_members(), 130);
        assert_eq!(m.total_spouses(), 2);
        assert_eq!(m.total_children(), 4);
    }

    #[test]
    fn test_manifest_json() {
        let json = serde_json::to_value(manifest()).unwrap();
        assert_eq!(json["batches"][1]["number"], 2);
        assert_eq!(json["batches"][1]["first_record"], 101);
        assert_eq!(json["batches"][1]["file"], "google_forms_batch_2.sql");
        assert_eq!(json["schema_file"], "google_forms_schema.sql");
    }
}
