//! Table builder: writes every dataset file consumed by the renderer
//!
//! The builder is a single pass. It creates the data directory if needed and
//! overwrites each dataset file in [`Dataset::ALL`] order. A failure aborts the
//! run; files written before it stay on disk.

pub mod datasets;

use crate::schema::{Dataset, DATA_DIR, DEFAULT_SEED};
use crate::table_io::{write_matrix, write_table, TableIoError};
use datasets::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building the dataset files
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to create data directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {dataset} table: {source}")]
    Write {
        dataset: Dataset,
        #[source]
        source: TableIoError,
    },

    #[error("Failed to inspect written file {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, BuildError>;

/// Settings for a builder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSettings {
    /// Directory receiving the dataset files
    pub data_dir: PathBuf,
    /// Seed reserved for randomized datasets; the current tables are all literal.
    pub seed: u64,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            seed: DEFAULT_SEED,
        }
    }
}

impl BuilderSettings {
    /// Settings writing into `data_dir` with the default seed.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

/// A dataset file produced by [`build_tables`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub dataset: Dataset,
    pub path: PathBuf,
    /// Number of data rows, excluding the header
    pub rows: usize,
    /// Size of the file on disk in bytes
    pub bytes: u64,
}

/// Builds every dataset and writes it under `settings.data_dir`.
///
/// # Arguments
/// * `settings` - Target directory and seed of the run
///
/// # Returns
/// One [`WrittenTable`] per dataset, in [`Dataset::ALL`] order.
pub fn build_tables(settings: &BuilderSettings) -> Result<Vec<WrittenTable>> {
    info!(
        data_dir = %settings.data_dir.display(),
        seed = settings.seed,
        "Building paper tables"
    );

    // Idempotent: succeeds when the directory already exists.
    fs::create_dir_all(&settings.data_dir).map_err(|source| BuildError::CreateDirectory {
        path: settings.data_dir.clone(),
        source,
    })?;

    Dataset::ALL
        .iter()
        .map(|&dataset| write_dataset(dataset, &settings.data_dir))
        .collect()
}

/// Builds a single dataset in memory and writes it into `data_dir`.
pub fn write_dataset(dataset: Dataset, data_dir: &Path) -> Result<WrittenTable> {
    let path = dataset.path_in(data_dir);
    let header = dataset.header();

    let written = match dataset {
        Dataset::Performance => {
            let rows = performance_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::Ablation => {
            let rows = ablation_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::Disease => {
            let rows = disease_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::PathwayAttention => {
            let rows = pathway_attention_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::CaseStudy => {
            let rows = case_study_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::ComputationalMetrics => {
            let rows = computational_metrics_table();
            write_table(&path, &header, &rows).map(|_| rows.len())
        }
        Dataset::AttentionMatrix => {
            let matrix = attention_matrix();
            write_matrix(&path, &matrix).map(|_| matrix.pathways().len())
        }
    };
    let rows = written.map_err(|source| BuildError::Write { dataset, source })?;

    let bytes = fs::metadata(&path)
        .map_err(|source| BuildError::Inspect {
            path: path.clone(),
            source,
        })?
        .len();

    debug!(%dataset, path = %path.display(), rows, bytes, "Wrote table");

    Ok(WrittenTable {
        dataset,
        path,
        rows,
        bytes,
    })
}
