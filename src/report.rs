//! ASCII summary of a builder run, formatted with [`tabled`]

use crate::builder::WrittenTable;
use bytesize::ByteSize;
use tabled::{Table, Tabled};

/// One row of the build summary
#[derive(Debug, Clone, Tabled)]
pub struct TableSummaryEntry {
    #[tabled(rename = "Dataset")]
    pub dataset: String,
    #[tabled(rename = "File")]
    pub file: String,
    /// Data rows, header excluded
    #[tabled(rename = "Rows")]
    pub rows: usize,
    /// Human-readable file size (e.g. "412 B")
    #[tabled(rename = "Size")]
    pub size: String,
}

impl From<&WrittenTable> for TableSummaryEntry {
    fn from(table: &WrittenTable) -> Self {
        Self {
            dataset: table.dataset.to_string(),
            file: table.dataset.file_name().to_string(),
            rows: table.rows,
            size: ByteSize(table.bytes).to_string(),
        }
    }
}

/// Formats the files written by a builder run as an ASCII table.
///
/// # Arguments
/// * `tables` - Files reported by [`crate::builder::build_tables`]
/// * `title` - Optional title printed above the table
pub fn format_build_report(tables: &[WrittenTable], title: Option<&str>) -> String {
    if tables.is_empty() {
        return "No tables written".to_string();
    }

    let entries: Vec<TableSummaryEntry> = tables.iter().map(TableSummaryEntry::from).collect();
    let table = Table::new(entries).to_string();

    match title {
        Some(title) => format!("{}\n{}\n{}", title, "=".repeat(title.len()), table),
        None => table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Dataset;
    use std::path::PathBuf;

    fn written(dataset: Dataset, rows: usize, bytes: u64) -> WrittenTable {
        WrittenTable {
            dataset,
            path: PathBuf::from("data").join(dataset.file_name()),
            rows,
            bytes,
        }
    }

    #[test]
    fn test_entry_uses_file_name_and_human_size() {
        let entry = TableSummaryEntry::from(&written(Dataset::Ablation, 6, 412));
        assert_eq!(entry.dataset, "ablation");
        assert_eq!(entry.file, "ablation_study.csv");
        assert_eq!(entry.rows, 6);
        assert_eq!(entry.size, ByteSize(412).to_string());
    }

    #[test]
    fn test_report_has_headers_title_and_one_row_per_table() {
        let tables = vec![
            written(Dataset::Performance, 15, 600),
            written(Dataset::AttentionMatrix, 6, 120),
        ];
        let report = format_build_report(&tables, Some("Tables"));

        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("Tables"));
        assert_eq!(lines.next(), Some("======"));
        for header in ["Dataset", "File", "Rows", "Size"] {
            assert!(report.contains(header));
        }
        assert!(report.contains("performance_comparison.csv"));
        assert!(report.contains("attention_heatmap_data.csv"));
    }

    #[test]
    fn test_report_without_title_starts_with_table() {
        let report = format_build_report(&[written(Dataset::Disease, 5, 200)], None);
        assert!(report.starts_with('+'));
        assert!(report.contains("disease_specific_performance.csv"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_build_report(&[], None), "No tables written");
    }
}
