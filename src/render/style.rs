//! Figure styling passed explicitly to every rendering call

use plotters::style::RGBColor;

/// Builds a colour from a `0xRRGGBB` literal.
pub const fn hex(rgb: u32) -> RGBColor {
    RGBColor((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Named colours used across the figures
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// First metric in two-metric charts (sea green)
    pub primary: RGBColor,
    /// Second metric in two-metric charts (royal blue)
    pub secondary: RGBColor,
    /// Categorical colours, cycled for datasets, diseases and pie slices
    pub series: Vec<RGBColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: hex(0x2E8B57),
            secondary: hex(0x4169E1),
            series: vec![
                hex(0xFF6B6B),
                hex(0x4ECDC4),
                hex(0x45B7D1),
                hex(0x96CEB4),
                hex(0xFFEAA7),
            ],
        }
    }
}

impl Palette {
    /// Categorical colour `index`, wrapping around the series list.
    ///
    /// An empty series list falls back to [`Palette::primary`].
    pub fn series_color(&self, index: usize) -> RGBColor {
        if self.series.is_empty() {
            return self.primary;
        }
        self.series[index % self.series.len()]
    }
}

/// Sequential yellow → orange → red ramp used by the heatmap
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<RGBColor>,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            stops: vec![
                hex(0xFFFFCC),
                hex(0xFFEDA0),
                hex(0xFED976),
                hex(0xFEB24C),
                hex(0xFD8D3C),
                hex(0xFC4E2A),
                hex(0xE31A1C),
                hex(0xBD0026),
                hex(0x800026),
            ],
        }
    }
}

impl ColorRamp {
    /// Colour at `t` in `[0, 1]`, linearly interpolated between stops.
    ///
    /// Values outside the range are clamped.
    pub fn color_at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let position = t * last as f64;
        let index = (position.floor() as usize).min(last);
        if index == last {
            return self.stops[last];
        }

        let fraction = position - index as f64;
        let (from, to) = (self.stops[index], self.stops[index + 1]);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * fraction).round() as u8;
        RGBColor(
            channel(from.0, to.0),
            channel(from.1, to.1),
            channel(from.2, to.2),
        )
    }
}

/// Everything that controls how figures look
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Output resolution; sizes below are given in inches and points
    pub dpi: u32,
    pub font_family: &'static str,
    pub title_font_pt: f64,
    pub label_font_pt: f64,
    pub tick_font_pt: f64,
    pub annotation_font_pt: f64,
    pub legend_font_pt: f64,
    /// Opacity of bar fills
    pub bar_alpha: f64,
    /// Width × height of the performance comparison figure, in inches
    pub comparison_size_in: (f64, f64),
    /// Width × height of the ablation figure, in inches
    pub ablation_size_in: (f64, f64),
    pub palette: Palette,
    pub heatmap_ramp: ColorRamp,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            dpi: 300,
            font_family: "sans-serif",
            title_font_pt: 12.0,
            label_font_pt: 10.0,
            tick_font_pt: 9.0,
            annotation_font_pt: 8.0,
            legend_font_pt: 9.0,
            bar_alpha: 0.8,
            comparison_size_in: (14.0, 6.0),
            ablation_size_in: (14.0, 10.0),
            palette: Palette::default(),
            heatmap_ramp: ColorRamp::default(),
        }
    }
}

impl FigureStyle {
    /// Converts a length in points to pixels at the configured DPI.
    pub fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }

    /// Font size in pixels for a size given in points.
    pub fn font_px(&self, points: f64) -> f64 {
        self.px(points) as f64
    }

    /// Pixel dimensions of a figure given in inches.
    pub fn pixels(&self, size_in: (f64, f64)) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (size_in.0 * dpi).round() as u32,
            (size_in.1 * dpi).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(hex(0x2E8B57), RGBColor(0x2E, 0x8B, 0x57));
    }

    #[test]
    fn test_default_sizes_match_three_hundred_dpi() {
        let style = FigureStyle::default();
        assert_eq!(style.pixels(style.comparison_size_in), (4200, 1800));
        assert_eq!(style.pixels(style.ablation_size_in), (4200, 3000));
        assert_eq!(style.px(72.0), 300);
    }

    #[rstest(t, expected,
        case(0.0, RGBColor(0xFF, 0xFF, 0xCC)),
        case(1.0, RGBColor(0x80, 0x00, 0x26)),
        case(-3.0, RGBColor(0xFF, 0xFF, 0xCC)),
        case(7.0, RGBColor(0x80, 0x00, 0x26))
    )]
    fn test_ramp_endpoints_are_clamped(t: f64, expected: RGBColor) {
        assert_eq!(ColorRamp::default().color_at(t), expected);
    }

    #[test]
    fn test_ramp_interpolates_between_stops() {
        let ramp = ColorRamp {
            stops: vec![RGBColor(0, 0, 0), RGBColor(200, 100, 50)],
        };
        assert_eq!(ramp.color_at(0.5), RGBColor(100, 50, 25));
    }

    #[test]
    fn test_series_colors_wrap() {
        let palette = Palette::default();
        assert_eq!(palette.series_color(5), palette.series_color(0));
    }

    #[test]
    fn test_empty_series_falls_back_to_primary() {
        let palette = Palette {
            series: Vec::new(),
            ..Palette::default()
        };
        assert_eq!(palette.series_color(3), palette.primary);
    }
}
