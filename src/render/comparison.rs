//! Figure 3: performance comparison across benchmarks

use super::charts::{draw_grouped_bars, BarSeries, GroupedBarChart, PlotError};
use super::style::FigureStyle;
use super::RenderError;
use crate::loader::PaperData;
use crate::schema::{Metric, BENCHMARKS, METHODS, PERFORMANCE_FIGURE_FILE};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Builds the grouped bar chart of `metric`: one group per method, one bar per benchmark.
pub fn comparison_chart(
    data: &PaperData,
    metric: Metric,
    panel: char,
    style: &FigureStyle,
) -> Result<GroupedBarChart, RenderError> {
    let series = BENCHMARKS
        .iter()
        .enumerate()
        .map(|(index, benchmark)| -> Result<BarSeries, RenderError> {
            let values = METHODS
                .iter()
                .map(|method| data.performance_score(benchmark, method, metric))
                .collect::<Result<Vec<f64>, _>>()?;
            Ok(BarSeries {
                label: Some(benchmark.to_string()),
                values,
                colors: vec![style.palette.series_color(index)],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupedBarChart {
        title: format!("({}) {} Comparison Across Datasets", panel, metric.label()),
        x_desc: Some("Methods".to_string()),
        y_desc: metric.label().to_string(),
        categories: METHODS.iter().map(|m| m.to_string()).collect(),
        series,
        annotate: true,
    })
}

/// Renders the side-by-side AUC-ROC and AUPR comparison into `output_dir`.
///
/// # Returns
/// The path of the written image.
pub fn render_performance_comparison(
    data: &PaperData,
    style: &FigureStyle,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    // Build both panels first so a missing row aborts before anything is drawn.
    let charts = [
        comparison_chart(data, Metric::AucRoc, 'a', style)?,
        comparison_chart(data, Metric::Aupr, 'b', style)?,
    ];

    let output_path = output_dir.join(PERFORMANCE_FIGURE_FILE);
    {
        // The backend borrows the path until the root area is dropped.
        let root = BitMapBackend::new(&output_path, style.pixels(style.comparison_size_in))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let panels = root.split_evenly((1, 2));
        for (panel, chart) in panels.iter().zip(&charts) {
            draw_grouped_bars(panel, chart, style)?;
        }

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    info!(path = %output_path.display(), "Created Figure 3: performance comparison");
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_tables, BuilderSettings};
    use crate::loader::{load_paper_data, LookupError};
    use tempfile::TempDir;

    fn loaded() -> PaperData {
        let temp_dir = TempDir::new().unwrap();
        build_tables(&BuilderSettings::with_data_dir(temp_dir.path())).unwrap();
        load_paper_data(temp_dir.path()).unwrap()
    }

    #[test]
    fn test_chart_has_one_series_per_benchmark() {
        let data = loaded();
        let chart = comparison_chart(&data, Metric::AucRoc, 'a', &FigureStyle::default()).unwrap();

        assert_eq!(chart.title, "(a) AUC-ROC Comparison Across Datasets");
        assert_eq!(chart.categories, METHODS);
        assert_eq!(chart.series.len(), BENCHMARKS.len());
        assert_eq!(chart.series[1].label.as_deref(), Some("DAVIS"));
        assert_eq!(chart.series[1].values[4], 0.912);
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn test_missing_row_fails_before_drawing() {
        let mut data = loaded();
        data.performance
            .retain(|row| !(row.dataset == "BIOSNAP" && row.method == "MolTrans"));

        let temp_dir = TempDir::new().unwrap();
        let result = render_performance_comparison(&data, &FigureStyle::default(), temp_dir.path());

        assert!(matches!(
            result,
            Err(RenderError::Lookup(LookupError::Performance { ref dataset, ref method }))
                if dataset == "BIOSNAP" && method == "MolTrans"
        ));
        assert!(!temp_dir.path().join(PERFORMANCE_FIGURE_FILE).exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_renders_figure() {
        let data = loaded();
        let temp_dir = TempDir::new().unwrap();
        let style = FigureStyle {
            dpi: 50,
            ..FigureStyle::default()
        };

        let path = render_performance_comparison(&data, &style, temp_dir.path()).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}
