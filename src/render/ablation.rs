//! Figure 4: ablation study, disease breakdown and pathway attention

use super::charts::{
    draw_grouped_bars, draw_heatmap, draw_pie, BarSeries, GroupedBarChart, PieSlice, PlotError,
};
use super::style::FigureStyle;
use super::RenderError;
use crate::loader::PaperData;
use crate::matrix::AttentionMatrix;
use crate::records::AblationRecord;
use crate::schema::{
    Metric, ABLATION_COMPONENTS, ABLATION_FIGURE_FILE, ATTENTION_PATHWAYS, DISEASES,
    DRUG_CATEGORIES,
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Panel (a): AUC-ROC and AUPR of every ablation configuration, in table order.
pub fn cumulative_chart(ablation: &[AblationRecord], style: &FigureStyle) -> GroupedBarChart {
    let series = |metric: Metric, color| BarSeries {
        label: Some(metric.label().to_string()),
        values: ablation.iter().map(|row| row.score(metric)).collect(),
        colors: vec![color],
    };

    GroupedBarChart {
        title: "(a) Cumulative Performance Improvement".to_string(),
        x_desc: Some("Model Variants".to_string()),
        y_desc: "Performance Score".to_string(),
        categories: ablation
            .iter()
            .map(|row| {
                row.added_component()
                    .unwrap_or(row.configuration.as_str())
                    .to_string()
            })
            .collect(),
        series: vec![
            series(Metric::AucRoc, style.palette.primary),
            series(Metric::Aupr, style.palette.secondary),
        ],
        annotate: false,
    }
}

/// Panel (b): AUC-ROC contribution of each added component.
pub fn contribution_slices(
    data: &PaperData,
    style: &FigureStyle,
) -> Result<Vec<PieSlice>, RenderError> {
    ABLATION_COMPONENTS
        .iter()
        .enumerate()
        .map(|(index, &component)| -> Result<PieSlice, RenderError> {
            Ok(PieSlice {
                label: component.to_string(),
                value: data.ablation_increment(component)?.contribution(Metric::AucRoc),
                color: style.palette.series_color(index),
            })
        })
        .collect()
}

/// Panel (c): full-model AUC-ROC per disease category, one colour per bar.
pub fn disease_chart(data: &PaperData, style: &FigureStyle) -> Result<GroupedBarChart, RenderError> {
    let values = DISEASES
        .iter()
        .map(|disease| data.disease_score(disease, Metric::AucRoc))
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(GroupedBarChart {
        title: "(c) Disease-Specific Performance".to_string(),
        x_desc: None,
        y_desc: "AUC-ROC Score".to_string(),
        categories: DISEASES.iter().map(|d| d.to_string()).collect(),
        series: vec![BarSeries {
            label: None,
            values,
            colors: (0..DISEASES.len())
                .map(|i| style.palette.series_color(i))
                .collect(),
        }],
        annotate: true,
    })
}

/// Panel (d): attention weights arranged by the pathway and drug category key lists.
pub fn attention_grid(data: &PaperData) -> Result<AttentionMatrix, RenderError> {
    let mut weights = [[0.0; DRUG_CATEGORIES.len()]; ATTENTION_PATHWAYS.len()];
    for (row, pathway) in weights.iter_mut().zip(ATTENTION_PATHWAYS) {
        for (cell, category) in row.iter_mut().zip(DRUG_CATEGORIES) {
            *cell = data.attention_weight(pathway, category)?;
        }
    }

    Ok(AttentionMatrix::from_arrays(
        &ATTENTION_PATHWAYS,
        &DRUG_CATEGORIES,
        &weights,
    ))
}

/// Renders the 2×2 ablation figure into `output_dir`.
///
/// Returns the path of the written image.
pub fn render_ablation_study(
    data: &PaperData,
    style: &FigureStyle,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    // Resolve every lookup before the image file is created.
    let cumulative = cumulative_chart(&data.ablation, style);
    let slices = contribution_slices(data, style)?;
    let diseases = disease_chart(data, style)?;
    let attention = attention_grid(data)?;

    let output_path = output_dir.join(ABLATION_FIGURE_FILE);
    {
        // The backend borrows the path until the root area is dropped.
        let root = BitMapBackend::new(&output_path, style.pixels(style.ablation_size_in))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let panels = root.split_evenly((2, 2));
        draw_grouped_bars(&panels[0], &cumulative, style)?;
        draw_pie(
            &panels[1],
            "(b) Component Contribution (AUC-ROC)",
            &slices,
            style,
        )?;
        draw_grouped_bars(&panels[2], &diseases, style)?;
        draw_heatmap(&panels[3], "(d) Pathway Attention Heatmap", &attention, style)?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    info!(path = %output_path.display(), "Created Figure 4: ablation study");
    Ok(output_path)
}
