//! Names shared between the table builder and the figure renderer
//!
//! Every file name, column header and lookup key used by both stages lives here,
//! so the producer and the consumer cannot drift apart silently.

use core::fmt;
use std::path::{Path, PathBuf};

/// Directory (relative to the working directory) holding the dataset files.
pub const DATA_DIR: &str = "data";

/// Seed declared by the builder. Nothing samples from it at the moment.
pub const DEFAULT_SEED: u64 = 42;

/// File name of the performance comparison figure.
pub const PERFORMANCE_FIGURE_FILE: &str = "Figure3_Performance_Comparison.png";

/// File name of the ablation study figure.
pub const ABLATION_FIGURE_FILE: &str = "Figure4_Ablation_Study.png";

/// Methods compared in the performance table, in plotting order.
pub const METHODS: [&str; 5] = ["DeepDTA", "MolTrans", "AttentionDTI", "DLM-DTI", "Ours"];

/// Method name of the proposed model.
pub const OUR_METHOD: &str = "Ours";

/// Benchmark datasets in the performance table, in plotting order.
pub const BENCHMARKS: [&str; 3] = ["BindingDB", "DAVIS", "BIOSNAP"];

/// Ablation row holding the model without any added component.
pub const BASELINE_CONFIGURATION: &str = "Base Model";

/// Ablation row holding the totals over all components.
pub const FULL_CONFIGURATION: &str = "Full Model";

/// Prefix marking an incremental ablation row (`+ Knowledge Integration`).
pub const INCREMENT_PREFIX: &str = "+ ";

/// Components added one at a time in the ablation study.
pub const ABLATION_COMPONENTS: [&str; 4] = [
    "Knowledge Integration",
    "Attention Mechanism",
    "Pathway Scoring",
    "GO Embedding",
];

/// Disease categories in the disease table, in plotting order.
pub const DISEASES: [&str; 5] = [
    "Cancer",
    "Cardiovascular",
    "Neurological",
    "Metabolic",
    "Immunological",
];

/// Pathways indexing the rows of the attention matrix.
pub const ATTENTION_PATHWAYS: [&str; 6] =
    ["PI3K-Akt", "MAPK", "p53", "Cholesterol", "Cardiac", "Apoptosis"];

/// Drug categories indexing the columns of the attention matrix.
pub const DRUG_CATEGORIES: [&str; 2] = ["Cancer", "Cardiovascular"];

/// Header of the method comparison table.
pub const PERFORMANCE_HEADER: [&str; 4] = ["Dataset", "Method", "AUC_ROC", "AUPR"];

/// Header of the ablation table: scores, improvements over the previous row,
/// and each component's share of the total gain in percent.
pub const ABLATION_HEADER: [&str; 7] = [
    "Configuration",
    "AUC_ROC",
    "AUPR",
    "AUC_ROC_Improvement",
    "AUPR_Improvement",
    "Component_Contribution_AUC",
    "Component_Contribution_AUPR",
];

/// Header of the per-disease table.
pub const DISEASE_HEADER: [&str; 4] = ["Disease", "AUC_ROC", "AUPR", "Sample_Size"];

/// Header of the top-pathway table.
pub const PATHWAY_ATTENTION_HEADER: [&str; 3] = ["Pathway", "Attention_Weight", "Drug_Type"];

/// Header of the case study table; `Chemical_Structure` holds SMILES.
pub const CASE_STUDY_HEADER: [&str; 8] = [
    "Drug",
    "Target",
    "Disease",
    "Predicted_Score",
    "Primary_Pathway",
    "Secondary_Pathway",
    "Pathway_Importance",
    "Chemical_Structure",
];

/// Header of the resource usage table.
pub const COMPUTATIONAL_METRICS_HEADER: [&str; 4] = [
    "Model",
    "VRAM_Usage_GB",
    "Inference_Time_sec",
    "Training_Time_hours",
];

/// The score columns shared by the comparison tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    AucRoc,
    Aupr,
}

impl Metric {
    /// Human readable label used on chart axes and legends.
    pub fn label(self) -> &'static str {
        match self {
            Metric::AucRoc => "AUC-ROC",
            Metric::Aupr => "AUPR",
        }
    }
}

/// Every dataset file produced by the builder and consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Performance,
    Ablation,
    Disease,
    PathwayAttention,
    CaseStudy,
    ComputationalMetrics,
    AttentionMatrix,
}

impl Dataset {
    /// All datasets, in the order the builder writes them.
    pub const ALL: [Dataset; 7] = [
        Dataset::Performance,
        Dataset::Ablation,
        Dataset::Disease,
        Dataset::PathwayAttention,
        Dataset::CaseStudy,
        Dataset::ComputationalMetrics,
        Dataset::AttentionMatrix,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Performance => "performance_comparison.csv",
            Dataset::Ablation => "ablation_study.csv",
            Dataset::Disease => "disease_specific_performance.csv",
            Dataset::PathwayAttention => "pathway_attention_weights.csv",
            Dataset::CaseStudy => "case_study_data.csv",
            Dataset::ComputationalMetrics => "computational_metrics.csv",
            Dataset::AttentionMatrix => "attention_heatmap_data.csv",
        }
    }

    /// Header row of the dataset file.
    ///
    /// The attention matrix starts with an empty cell naming its row index.
    pub fn header(self) -> Vec<&'static str> {
        match self {
            Dataset::Performance => PERFORMANCE_HEADER.to_vec(),
            Dataset::Ablation => ABLATION_HEADER.to_vec(),
            Dataset::Disease => DISEASE_HEADER.to_vec(),
            Dataset::PathwayAttention => PATHWAY_ATTENTION_HEADER.to_vec(),
            Dataset::CaseStudy => CASE_STUDY_HEADER.to_vec(),
            Dataset::ComputationalMetrics => COMPUTATIONAL_METRICS_HEADER.to_vec(),
            Dataset::AttentionMatrix => {
                let mut header = vec![""];
                header.extend_from_slice(&DRUG_CATEGORIES);
                header
            }
        }
    }

    /// Full path of the dataset file inside `data_dir`.
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Performance => "performance",
            Dataset::Ablation => "ablation",
            Dataset::Disease => "disease",
            Dataset::PathwayAttention => "pathway attention",
            Dataset::CaseStudy => "case study",
            Dataset::ComputationalMetrics => "computational metrics",
            Dataset::AttentionMatrix => "attention matrix",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_unique() {
        let names: HashSet<_> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        assert_eq!(names.len(), Dataset::ALL.len());
    }

    #[test]
    fn test_attention_header_has_unnamed_index() {
        let header = Dataset::AttentionMatrix.header();
        assert_eq!(header, vec!["", "Cancer", "Cardiovascular"]);
    }

    #[test]
    fn test_path_in_joins_file_name() {
        let path = Dataset::Disease.path_in(Path::new(DATA_DIR));
        assert_eq!(path, Path::new("data/disease_specific_performance.csv"));
    }
}
