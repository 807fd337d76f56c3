//! Figure renderer: loads the dataset files and draws the paper figures
//!
//! All data is loaded and every lookup resolved before an image file is
//! created, so a missing input or key leaves no partial figure behind.

pub mod ablation;
pub mod charts;
pub mod comparison;
pub mod style;

use crate::loader::{load_paper_data, LoadError, LookupError};
use crate::schema::DATA_DIR;
use ablation::render_ablation_study;
use charts::PlotError;
use comparison::render_performance_comparison;
use std::fs;
use std::path::PathBuf;
use style::FigureStyle;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while rendering the figures
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Plotting error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the renderer reads datasets from and writes figures to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Loads every dataset from `paths.data_dir` and renders both figures.
///
/// # Arguments
/// * `paths` - Where to read the datasets and write the images
/// * `style` - Styling shared by both figures
///
/// # Returns
/// The written image paths, Figure 3 first.
pub fn render_figures(paths: &OutputPaths, style: &FigureStyle) -> Result<Vec<PathBuf>, RenderError> {
    info!(data_dir = %paths.data_dir.display(), "Generating paper figures");
    let data = load_paper_data(&paths.data_dir)?;

    fs::create_dir_all(&paths.output_dir).map_err(|source| RenderError::OutputDirectory {
        path: paths.output_dir.clone(),
        source,
    })?;

    let written = vec![
        render_performance_comparison(&data, style, &paths.output_dir)?,
        render_ablation_study(&data, style, &paths.output_dir)?,
    ];

    info!(count = written.len(), "All figures generated");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_tables, BuilderSettings};
    use crate::schema::{Dataset, ABLATION_FIGURE_FILE, PERFORMANCE_FIGURE_FILE};
    use tempfile::TempDir;

    fn paths_in(temp_dir: &TempDir) -> OutputPaths {
        OutputPaths {
            data_dir: temp_dir.path().join("data"),
            output_dir: temp_dir.path().join("figures"),
        }
    }

    #[test]
    fn test_default_paths_use_working_directory() {
        let paths = OutputPaths::default();
        assert_eq!(paths.data_dir, PathBuf::from("data"));
        assert_eq!(paths.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_dataset_writes_no_figures() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        build_tables(&BuilderSettings::with_data_dir(&paths.data_dir)).unwrap();
        let missing = Dataset::Disease.path_in(&paths.data_dir);
        fs::remove_file(&missing).unwrap();

        let error = render_figures(&paths, &FigureStyle::default()).unwrap_err();

        assert!(matches!(
            error,
            RenderError::Load(LoadError::MissingInput { ref path }) if *path == missing
        ));
        assert!(error.to_string().contains("disease_specific_performance.csv"));
        assert!(!paths.output_dir.join(PERFORMANCE_FIGURE_FILE).exists());
        assert!(!paths.output_dir.join(ABLATION_FIGURE_FILE).exists());
    }

    #[test]
    fn test_empty_data_directory_is_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let result = render_figures(&paths_in(&temp_dir), &FigureStyle::default());
        assert!(matches!(
            result,
            Err(RenderError::Load(LoadError::MissingInput { .. }))
        ));
    }

    #[test]
    fn test_renders_both_figures_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        build_tables(&BuilderSettings::with_data_dir(&paths.data_dir)).unwrap();
        let style = FigureStyle {
            dpi: 50,
            ..FigureStyle::default()
        };

        let written = render_figures(&paths, &style).unwrap();

        assert_eq!(
            written,
            vec![
                paths.output_dir.join(PERFORMANCE_FIGURE_FILE),
                paths.output_dir.join(ABLATION_FIGURE_FILE),
            ]
        );
        for path in written {
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
