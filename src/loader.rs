//! Loading the dataset files back for rendering
//!
//! Loading is all-or-nothing: every required file must exist before any of
//! them is parsed.

use crate::matrix::AttentionMatrix;
use crate::records::{
    AblationRecord, CaseStudyRecord, ComputationalMetricsRecord, DiseaseRecord,
    PathwayAttentionRecord, PerformanceRecord,
};
use crate::schema::{Dataset, Metric, INCREMENT_PREFIX};
use crate::table_io::{read_matrix, read_table, TableIoError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading the dataset files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dataset file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {dataset} table: {source}")]
    Read {
        dataset: Dataset,
        #[source]
        source: TableIoError,
    },
}

/// A key combination that has no row in a loaded table
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("No performance row for dataset '{dataset}' and method '{method}'")]
    Performance { dataset: String, method: String },

    #[error("No ablation row for configuration '{0}'")]
    Configuration(String),

    #[error("No disease row for '{0}'")]
    Disease(String),

    #[error("No attention weight for pathway '{pathway}' and category '{category}'")]
    Attention { pathway: String, category: String },
}

/// Every dataset, as loaded from the data directory
#[derive(Debug, Clone, PartialEq)]
pub struct PaperData {
    pub performance: Vec<PerformanceRecord>,
    pub ablation: Vec<AblationRecord>,
    pub disease: Vec<DiseaseRecord>,
    pub pathway_attention: Vec<PathwayAttentionRecord>,
    pub case_study: Vec<CaseStudyRecord>,
    pub computational_metrics: Vec<ComputationalMetricsRecord>,
    pub attention: AttentionMatrix,
}

/// Returns the path of the first dataset file missing from `data_dir`, if any.
pub fn find_missing_input(data_dir: &Path) -> Option<PathBuf> {
    Dataset::ALL
        .iter()
        .map(|dataset| dataset.path_in(data_dir))
        .find(|path| !path.is_file())
}

/// Loads every dataset file from `data_dir`.
///
/// # Errors
/// * [`LoadError::MissingInput`] naming the first absent file; nothing is read in that case.
/// * [`LoadError::Read`] if a file exists but cannot be parsed.
pub fn load_paper_data(data_dir: &Path) -> Result<PaperData, LoadError> {
    if let Some(path) = find_missing_input(data_dir) {
        return Err(LoadError::MissingInput { path });
    }

    let data = PaperData {
        performance: load(data_dir, Dataset::Performance)?,
        ablation: load(data_dir, Dataset::Ablation)?,
        disease: load(data_dir, Dataset::Disease)?,
        pathway_attention: load(data_dir, Dataset::PathwayAttention)?,
        case_study: load(data_dir, Dataset::CaseStudy)?,
        computational_metrics: load(data_dir, Dataset::ComputationalMetrics)?,
        attention: read_matrix(
            &Dataset::AttentionMatrix.path_in(data_dir),
            &Dataset::AttentionMatrix.header(),
        )
        .map_err(|source| LoadError::Read {
            dataset: Dataset::AttentionMatrix,
            source,
        })?,
    };

    info!(data_dir = %data_dir.display(), "Loaded all dataset files");
    Ok(data)
}

fn load<T: DeserializeOwned>(data_dir: &Path, dataset: Dataset) -> Result<Vec<T>, LoadError> {
    read_table(&dataset.path_in(data_dir), &dataset.header())
        .map_err(|source| LoadError::Read { dataset, source })
}

impl PaperData {
    /// Score of `method` on benchmark `dataset`.
    pub fn performance_score(
        &self,
        dataset: &str,
        method: &str,
        metric: Metric,
    ) -> Result<f64, LookupError> {
        self.performance
            .iter()
            .find(|row| row.dataset == dataset && row.method == method)
            .map(|row| row.score(metric))
            .ok_or_else(|| LookupError::Performance {
                dataset: dataset.to_string(),
                method: method.to_string(),
            })
    }

    /// Ablation row adding `component` on top of the previous configuration.
    pub fn ablation_increment(&self, component: &str) -> Result<&AblationRecord, LookupError> {
        self.ablation
            .iter()
            .find(|row| row.added_component() == Some(component))
            .ok_or_else(|| {
                LookupError::Configuration(format!("{}{}", INCREMENT_PREFIX, component))
            })
    }

    /// Score of the full model on `disease`.
    pub fn disease_score(&self, disease: &str, metric: Metric) -> Result<f64, LookupError> {
        self.disease
            .iter()
            .find(|row| row.disease == disease)
            .map(|row| row.score(metric))
            .ok_or_else(|| LookupError::Disease(disease.to_string()))
    }

    /// Attention weight of `pathway` for drug `category`.
    pub fn attention_weight(&self, pathway: &str, category: &str) -> Result<f64, LookupError> {
        self.attention
            .get(pathway, category)
            .ok_or_else(|| LookupError::Attention {
                pathway: pathway.to_string(),
                category: category.to_string(),
            })
    }
}
