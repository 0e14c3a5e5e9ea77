use plotters::prelude::*;
use std::path::Path;

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::spectrum::MagnitudeSeries;

/// Line colours, assigned by series position.
const PALETTE: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// Everything needed to draw one overlaid magnitude chart.
#[derive(Clone, Debug)]
pub struct ChartRequest<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub size: (u32, u32),
    pub series: &'a [MagnitudeSeries],
}

impl<'a> ChartRequest<'a> {
    pub fn new(config: &'a PlotConfig, series: &'a [MagnitudeSeries]) -> Self {
        Self {
            title: &config.title,
            x_label: &config.x_label,
            y_label: &config.y_label,
            size: (config.width, config.height),
            series,
        }
    }

    /// Upper bound of the index axis.
    pub fn x_max(&self) -> usize {
        self.series
            .iter()
            .map(|s| s.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Upper bound of the magnitude axis, with a little headroom.
    pub fn y_max(&self) -> f64 {
        let peak = self.series.iter().map(MagnitudeSeries::peak).fold(0.0, f64::max);
        if peak > 0.0 && peak.is_finite() {
            peak * 1.05
        } else {
            1.0
        }
    }
}

/// Draws a chart request to an image file.
pub trait ChartRenderer {
    fn render(&self, request: &ChartRequest<'_>, output: &Path) -> Result<()>;
}

/// PNG renderer built on plotters' bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlottersRenderer;

impl ChartRenderer for PlottersRenderer {
    fn render(&self, request: &ChartRequest<'_>, output: &Path) -> Result<()> {
        draw_png(request, output).map_err(|reason| Error::Render {
            path: output.to_path_buf(),
            reason,
        })
    }
}

fn draw_png(request: &ChartRequest<'_>, output: &Path) -> std::result::Result<(), String> {
    let root = BitMapBackend::new(output, request.size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption(request.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..request.x_max(), 0f64..request.y_max())
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(request.x_label)
        .y_desc(request.y_label)
        .draw()
        .map_err(|e| e.to_string())?;

    for (i, series) in request.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let dropped = series.values.iter().filter(|v| !v.is_finite()).count();
        if dropped > 0 {
            log::warn!("Leaving {} non-finite points of {} off the chart", dropped, series.label);
        }
        chart
            .draw_series(LineSeries::new(
                finite_points(&series.values),
                color.stroke_width(2),
            ))
            .map_err(|e| e.to_string())?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// `(index, value)` pairs, skipping values the axis cannot place.
fn finite_points(values: &[f64]) -> impl Iterator<Item = (usize, f64)> + '_ {
    values.iter().copied().enumerate().filter(|(_, v)| v.is_finite())
}
