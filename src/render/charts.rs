//! Chart primitives: grouped bars, pie and heatmap
//!
//! Each primitive draws into a caller-provided [`DrawingArea`], so the same
//! code serves single charts and panels of a multi-panel figure. Backend
//! errors are stringified into [`PlotError`].

use super::style::FigureStyle;
use crate::matrix::AttentionMatrix;
use plotters::coord::ranged1d::SegmentValue;
use std::ops::Range;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Headroom above the tallest bar, as a fraction of its height
const BAR_HEADROOM: f64 = 0.15;

/// Share of a category slot covered by its bars
const GROUP_WIDTH: f64 = 0.8;

/// Share of a category slot a tick label may occupy
const LABEL_FILL: f64 = 0.9;

/// One set of bars, one value per category
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Legend entry; `None` draws no legend for this series
    pub label: Option<String>,
    pub values: Vec<f64>,
    /// Bar colours, cycled per category; a single colour paints every bar
    pub colors: Vec<RGBColor>,
}

/// A bar chart with one group of bars per category
#[derive(Debug, Clone)]
pub struct GroupedBarChart {
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Print each bar's value above it
    pub annotate: bool,
}

impl GroupedBarChart {
    /// Checks that every series has one value and at least one colour per category.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() || self.series.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "Chart '{}' has no categories or no series",
                self.title
            )));
        }

        for (index, series) in self.series.iter().enumerate() {
            if series.values.len() != self.categories.len() {
                return Err(PlotError::InvalidData(format!(
                    "Series {} of '{}' has {} values for {} categories",
                    index,
                    self.title,
                    series.values.len(),
                    self.categories.len()
                )));
            }
            if series.colors.is_empty() {
                return Err(PlotError::InvalidData(format!(
                    "Series {} of '{}' has no colours",
                    index, self.title
                )));
            }
            if series.values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(PlotError::InvalidData(format!(
                    "Series {} of '{}' contains a negative or non-finite value",
                    index, self.title
                )));
            }
        }

        Ok(())
    }

    /// Upper bound of the value axis, leaving room for annotations.
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max);
        if tallest > 0.0 {
            tallest * (1.0 + BAR_HEADROOM)
        } else {
            1.0
        }
    }

    /// Horizontal extent `(left, right)` of bar `series` within category `category`.
    ///
    /// Categories are centred on integer positions.
    pub fn bar_span(&self, category: usize, series: usize) -> (f64, f64) {
        let width = GROUP_WIDTH / self.series.len() as f64;
        let left = category as f64 - GROUP_WIDTH / 2.0 + series as f64 * width;
        (left, left + width)
    }
}

/// One slice of a pie chart
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

/// Share of each slice in percent of the total.
pub fn pie_percentages(slices: &[PieSlice]) -> Result<Vec<f64>> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if slices.is_empty() || !total.is_finite() || total <= 0.0 {
        return Err(PlotError::InvalidData(
            "Pie chart needs at least one slice with a positive total".to_string(),
        ));
    }
    if slices.iter().any(|s| s.value < 0.0) {
        return Err(PlotError::InvalidData(
            "Pie slices cannot be negative".to_string(),
        ));
    }

    Ok(slices.iter().map(|s| s.value / total * 100.0).collect())
}

/// Integer range whose segmented coordinate has exactly `count` cells.
///
/// Integer ranges include their end point, so `0..count` would add an empty cell.
fn cell_axis(count: i32) -> Range<i32> {
    0..count - 1
}

/// Font size, at most `points`, at which a label measuring `label_px` at `points`
/// fits into a category slot `slot_px` wide.
fn fitted_points(points: f64, label_px: u32, slot_px: f64) -> f64 {
    let available = slot_px * LABEL_FILL;
    if label_px == 0 || f64::from(label_px) <= available {
        points
    } else {
        points * available / f64::from(label_px)
    }
}

fn font<'a>(style: &'a FigureStyle, points: f64) -> TextStyle<'a> {
    TextStyle::from((style.font_family, style.font_px(points)).into_font())
}

/// Draws a grouped bar chart, with a legend when any series is labelled.
///
/// # Arguments
/// * `area` - Drawing area to fill, usually one panel of a split root
/// * `chart` - Categories, series and labels; validated before drawing
/// * `style` - Fonts, sizes and bar opacity
pub fn draw_grouped_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &GroupedBarChart,
    style: &FigureStyle,
) -> Result<()> {
    chart.validate()?;

    let categories = chart.categories.len();
    let x_range = -0.5..(categories as f64 - 0.5);
    let y_max = chart.y_max();

    let (margin, y_label_area) = (style.px(8.0), style.px(40.0));

    // Long category names shrink until neighbouring labels no longer touch.
    let tick_style = font(style, style.tick_font_pt);
    let mut widest = 0;
    for category in &chart.categories {
        let (width, _) = area
            .estimate_text_size(category, &tick_style)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
        widest = widest.max(width);
    }
    let plot_width = area.dim_in_pixel().0.saturating_sub(y_label_area + 2 * margin);
    let x_tick_pt = fitted_points(
        style.tick_font_pt,
        widest,
        f64::from(plot_width) / categories as f64,
    );

    let mut context = ChartBuilder::on(area)
        .caption(&chart.title, font(style, style.title_font_pt))
        .margin(margin)
        .x_label_area_size(style.px(36.0))
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(x_range, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let category_label = |x: &f64| {
        let index = x.round();
        if (x - index).abs() < 1e-6 && index >= 0.0 && (index as usize) < categories {
            chart.categories[index as usize].clone()
        } else {
            String::new()
        }
    };

    let value_label = |y: &f64| format!("{:.1}", y);

    let mut mesh = context.configure_mesh();
    mesh.x_labels(categories)
        .x_label_formatter(&category_label)
        .y_label_formatter(&value_label)
        .y_desc(chart.y_desc.as_str())
        .label_style(font(style, style.tick_font_pt))
        .x_label_style(font(style, x_tick_pt))
        .axis_desc_style(font(style, style.label_font_pt))
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.3));
    if let Some(x_desc) = &chart.x_desc {
        mesh.x_desc(x_desc.as_str());
    }
    mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (series_index, series) in chart.series.iter().enumerate() {
        let bars = series.values.iter().enumerate().map(|(category, &value)| {
            let (left, right) = chart.bar_span(category, series_index);
            let color = series.colors[category % series.colors.len()];
            Rectangle::new([(left, 0.0), (right, value)], color.mix(style.bar_alpha).filled())
        });

        let annotation = context
            .draw_series(bars)
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        if let Some(label) = &series.label {
            let color = series.colors[0];
            let swatch = style.px(4.0) as i32;
            annotation.label(label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - swatch), (x + 2 * swatch, y + swatch)], color.filled())
            });
        }

        if chart.annotate {
            let offset = y_max * 0.005;
            let text_style = font(style, style.annotation_font_pt)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            let labels = series.values.iter().enumerate().map(|(category, &value)| {
                let (left, right) = chart.bar_span(category, series_index);
                Text::new(
                    format!("{:.3}", value),
                    ((left + right) / 2.0, value + offset),
                    text_style.clone(),
                )
            });
            context
                .draw_series(labels)
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }
    }

    if chart.series.iter().any(|s| s.label.is_some()) {
        context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(font(style, style.legend_font_pt))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.4))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Draws a pie chart starting at 12 o'clock and running counter-clockwise,
/// labelling each slice with its name outside and its percentage inside.
pub fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    slices: &[PieSlice],
    style: &FigureStyle,
) -> Result<()> {
    let percentages = pie_percentages(slices)?;

    let panel = area
        .titled(title, font(style, style.title_font_pt))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (width, height) = panel.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 * 0.35;
    let to_pixel = |angle: f64, distance: f64| {
        (
            (center.0 + distance * angle.cos()).round() as i32,
            (center.1 - distance * angle.sin()).round() as i32,
        )
    };

    let label_style = font(style, style.label_font_pt).pos(Pos::new(HPos::Center, VPos::Center));
    let mut start = PI / 2.0;

    for (slice, percentage) in slices.iter().zip(&percentages) {
        let sweep = percentage / 100.0 * 2.0 * PI;
        let steps = ((sweep / (2.0 * PI)) * 180.0).ceil().max(2.0) as usize;

        let mut outline = vec![to_pixel(0.0, 0.0)];
        outline.extend(
            (0..=steps).map(|step| to_pixel(start + sweep * step as f64 / steps as f64, radius)),
        );
        panel
            .draw(&Polygon::new(outline, slice.color.filled()))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let middle = start + sweep / 2.0;
        panel
            .draw(&Text::new(
                slice.label.clone(),
                to_pixel(middle, radius * 1.2),
                label_style.clone(),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        panel
            .draw(&Text::new(
                format!("{:.1}%", percentage),
                to_pixel(middle, radius * 0.6),
                label_style.clone(),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        start += sweep;
    }

    Ok(())
}

/// Draws `matrix` as a grid of coloured cells, first pathway at the top.
///
/// # Arguments
/// * `area` - Drawing area to fill
/// * `title` - Caption above the grid
/// * `matrix` - Weights to draw; must have at least one row and one column
/// * `style` - Fonts and the colour ramp
///
/// Colours are normalized to the matrix's own minimum and maximum.
pub fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    matrix: &AttentionMatrix,
    style: &FigureStyle,
) -> Result<()> {
    let rows = matrix.pathways().len() as i32;
    let columns = matrix.categories().len() as i32;
    if rows == 0 || columns == 0 {
        return Err(PlotError::InvalidData(
            "Heatmap matrix cannot be empty".to_string(),
        ));
    }

    let (low, high) = matrix
        .cells()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, _, w)| {
            (lo.min(w), hi.max(w))
        });
    let span = if high > low { high - low } else { 1.0 };

    let mut context = ChartBuilder::on(area)
        .caption(title, font(style, style.title_font_pt))
        .margin(style.px(8.0))
        .x_label_area_size(style.px(24.0))
        .y_label_area_size(style.px(64.0))
        .build_cartesian_2d(
            cell_axis(columns).into_segmented(),
            cell_axis(rows).into_segmented(),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let column_label = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(c) if (0..columns).contains(c) => {
            matrix.categories()[*c as usize].clone()
        }
        _ => String::new(),
    };
    let row_label = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(r) if (0..rows).contains(r) => {
            matrix.pathways()[(rows - 1 - *r) as usize].clone()
        }
        _ => String::new(),
    };

    context
        .configure_mesh()
        .disable_mesh()
        .x_labels(columns as usize)
        .y_labels(rows as usize)
        .x_label_formatter(&column_label)
        .y_label_formatter(&row_label)
        .label_style(font(style, style.tick_font_pt))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let ramp = &style.heatmap_ramp;
    let cells = matrix.cells().map(|(row, column, weight)| {
        let (x, y) = (column as i32, rows - 1 - row as i32);
        let color = ramp.color_at((weight - low) / span);
        Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            color.filled(),
        )
    });

    context
        .draw_series(cells)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
