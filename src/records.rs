//! Row types of every dataset file
//!
//! Field renames mirror the headers in [`crate::schema`]; the tests below keep
//! the two in lockstep.

use crate::schema::Metric;
use serde::{Deserialize, Serialize};

/// Score of one method on one benchmark dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    #[serde(rename = "Dataset")]
    pub dataset: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "AUC_ROC")]
    pub auc_roc: f64,
    #[serde(rename = "AUPR")]
    pub aupr: f64,
}

impl PerformanceRecord {
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AucRoc => self.auc_roc,
            Metric::Aupr => self.aupr,
        }
    }
}

/// One configuration of the cumulative ablation study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AblationRecord {
    #[serde(rename = "Configuration")]
    pub configuration: String,
    #[serde(rename = "AUC_ROC")]
    pub auc_roc: f64,
    #[serde(rename = "AUPR")]
    pub aupr: f64,
    /// Gain over the previous configuration (over the baseline for the full model)
    #[serde(rename = "AUC_ROC_Improvement")]
    pub auc_roc_improvement: f64,
    #[serde(rename = "AUPR_Improvement")]
    pub aupr_improvement: f64,
    /// Share of the total gain, in percent
    #[serde(rename = "Component_Contribution_AUC")]
    pub contribution_auc: f64,
    #[serde(rename = "Component_Contribution_AUPR")]
    pub contribution_aupr: f64,
}

impl AblationRecord {
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AucRoc => self.auc_roc,
            Metric::Aupr => self.aupr,
        }
    }

    pub fn contribution(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AucRoc => self.contribution_auc,
            Metric::Aupr => self.contribution_aupr,
        }
    }

    /// Name of the component this row adds, if it is an incremental row.
    pub fn added_component(&self) -> Option<&str> {
        self.configuration
            .strip_prefix(crate::schema::INCREMENT_PREFIX)
    }
}

/// Performance of the full model on one disease category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "AUC_ROC")]
    pub auc_roc: f64,
    #[serde(rename = "AUPR")]
    pub aupr: f64,
    #[serde(rename = "Sample_Size")]
    pub sample_size: u32,
}

impl DiseaseRecord {
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AucRoc => self.auc_roc,
            Metric::Aupr => self.aupr,
        }
    }
}

/// Attention weight given to a pathway for a drug category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayAttentionRecord {
    #[serde(rename = "Pathway")]
    pub pathway: String,
    #[serde(rename = "Attention_Weight")]
    pub attention_weight: f64,
    #[serde(rename = "Drug_Type")]
    pub drug_type: String,
}

/// A single drug–target pair discussed in the case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyRecord {
    #[serde(rename = "Drug")]
    pub drug: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Predicted_Score")]
    pub predicted_score: f64,
    #[serde(rename = "Primary_Pathway")]
    pub primary_pathway: String,
    #[serde(rename = "Secondary_Pathway")]
    pub secondary_pathway: String,
    #[serde(rename = "Pathway_Importance")]
    pub pathway_importance: f64,
    /// SMILES string of the drug
    #[serde(rename = "Chemical_Structure")]
    pub chemical_structure: String,
}

/// Resource usage of one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationalMetricsRecord {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "VRAM_Usage_GB")]
    pub vram_usage_gb: f64,
    #[serde(rename = "Inference_Time_sec")]
    pub inference_time_sec: f64,
    #[serde(rename = "Training_Time_hours")]
    pub training_time_hours: u32,
}
