use std::path::{Path, PathBuf};

use super::complex::parse_complex_literal;
use crate::error::{Error, Result};

/// Magnitudes read from one text file, labelled with the file name.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnitudeSeries {
    pub label: String,
    pub source: PathBuf,
    pub values: Vec<f64>,
}

impl MagnitudeSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest finite magnitude, or 0.0 when there is none.
    pub fn peak(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Result of reading one input path.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesRead {
    Missing(PathBuf),
    Loaded(MagnitudeSeries),
}

/// Read `path` and turn every parsable line into a magnitude.
///
/// A path that does not exist is reported as [`SeriesRead::Missing`] rather
/// than an error so callers can carry on with other files.
pub fn read_magnitudes(path: &Path) -> Result<SeriesRead> {
    if !path.exists() {
        log::warn!("File {} not found", path.display());
        return Ok(SeriesRead::Missing(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let values = parse_magnitudes(&text);
    log::info!("Read {} magnitudes from {}", values.len(), path.display());

    Ok(SeriesRead::Loaded(MagnitudeSeries {
        label: series_label(path),
        source: path.to_path_buf(),
        values,
    }))
}

/// Magnitudes of every complex literal in `text`, one per matching line.
pub fn parse_magnitudes(text: &str) -> Vec<f64> {
    let mut skipped = 0usize;
    let values: Vec<f64> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = parse_complex_literal(line);
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .map(|c| c.norm())
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {} lines that are not complex literals", skipped);
    }
    values
}

fn series_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
