use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::decode::{SampleSource, SymphoniaDecoder};
use crate::error::{Error, Result};

/// Decimal places written for every sample.
pub const SAMPLE_PRECISION: usize = 6;

/// Decode `input`, keep at most `max_seconds` of it and write one sample per
/// line to `output`. Returns the number of samples written.
pub fn extract(input: &Path, output: &Path, max_seconds: Option<f64>) -> Result<usize> {
    extract_with(&SymphoniaDecoder, input, output, max_seconds)
}

pub fn extract_with<S: SampleSource + ?Sized>(
    source: &S,
    input: &Path,
    output: &Path,
    max_seconds: Option<f64>,
) -> Result<usize> {
    if !input.is_file() {
        return Err(Error::NotFound(input.to_path_buf()));
    }
    if let Some(seconds) = max_seconds {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(Error::InvalidWindow(seconds));
        }
    }

    let mut series = source.decode(input)?;
    if let Some(seconds) = max_seconds {
        series.truncate_to_seconds(seconds);
    }

    let file = File::create(output).map_err(|e| Error::io(output, e))?;
    let mut writer = BufWriter::new(file);
    write_samples(&mut writer, &series.samples).map_err(|e| Error::io(output, e))?;
    writer.flush().map_err(|e| Error::io(output, e))?;

    log::info!("Wrote {} samples to {}", series.len(), output.display());
    Ok(series.len())
}

/// Serialize samples as fixed-point text, one per line.
pub fn write_samples<W: Write>(writer: &mut W, samples: &[f32]) -> std::io::Result<()> {
    for &sample in samples {
        writeln!(writer, "{:.*}", SAMPLE_PRECISION, f64::from(sample))?;
    }
    Ok(())
}

/// `input` with its extension replaced by `.txt`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}
