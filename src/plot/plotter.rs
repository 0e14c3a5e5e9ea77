use std::path::{Path, PathBuf};

use super::chart::{ChartRenderer, ChartRequest};
use crate::config::{PlotConfig, MAX_SERIES};
use crate::error::{Error, Result};
use crate::spectrum::{read_magnitudes, MagnitudeSeries, SeriesRead};

/// What a plot run produced.
#[derive(Debug, PartialEq)]
pub enum PlotOutcome {
    Rendered {
        image: PathBuf,
        series: Vec<MagnitudeSeries>,
    },
    /// No input held a single parsable line; no image was written.
    NothingToDraw,
}

/// Outcome plus the per-file problems met along the way.
///
/// The per-file lists are filled in even when drawing the chart fails.
#[derive(Debug)]
pub struct PlotReport {
    pub outcome: Result<PlotOutcome>,
    pub missing: Vec<PathBuf>,
    pub unreadable: Vec<(PathBuf, Error)>,
}

/// First `max_series` paths (never more than [`MAX_SERIES`]), or the default
/// input when none are given.
pub fn select_inputs(paths: &[PathBuf], config: &PlotConfig) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![config.default_input.clone()];
    }
    let limit = config.max_series.clamp(1, MAX_SERIES);
    if paths.len() > limit {
        log::debug!("Ignoring {} inputs beyond the first {}", paths.len() - limit, limit);
    }
    paths.iter().take(limit).cloned().collect()
}

/// `<output_dir>/<stem of source><suffix>`.
pub fn output_image_path(source: &Path, config: &PlotConfig) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plot".to_string());
    config.output_dir.join(format!("{}{}", stem, config.output_suffix))
}

/// Read the selected inputs and draw every non-empty series on one chart.
///
/// The image is named after the last input that was actually read.
pub fn plot<R: ChartRenderer + ?Sized>(
    paths: &[PathBuf],
    config: &PlotConfig,
    renderer: &R,
) -> PlotReport {
    let mut missing = Vec::new();
    let mut unreadable = Vec::new();
    let mut series = Vec::new();
    let mut last_processed: Option<PathBuf> = None;

    for path in select_inputs(paths, config) {
        match read_magnitudes(&path) {
            Ok(SeriesRead::Missing(p)) => missing.push(p),
            Ok(SeriesRead::Loaded(s)) => {
                last_processed = Some(path);
                if s.is_empty() {
                    log::warn!("No complex values found in {}", s.source.display());
                } else {
                    series.push(s);
                }
            }
            Err(err) => {
                log::error!("{}", err);
                unreadable.push((path, err));
            }
        }
    }

    let outcome = match last_processed {
        Some(source) if !series.is_empty() => {
            let image = output_image_path(&source, config);
            let request = ChartRequest::new(config, &series);
            renderer.render(&request, &image).map(|()| {
                log::info!("Plotted {} series to {}", series.len(), image.display());
                PlotOutcome::Rendered { image, series }
            })
        }
        _ => {
            log::info!("Nothing to plot");
            Ok(PlotOutcome::NothingToDraw)
        }
    };

    PlotReport {
        outcome,
        missing,
        unreadable,
    }
}
