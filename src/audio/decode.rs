use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::series::SampleSeries;
use crate::error::{Error, Result};

/// Anything that can turn an audio file into mono samples at its native rate.
pub trait SampleSource {
    fn decode(&self, path: &Path) -> Result<SampleSeries>;
}

/// Decoder backed by symphonia's default probe and codec registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaDecoder;

impl SampleSource for SymphoniaDecoder {
    fn decode(&self, path: &Path) -> Result<SampleSeries> {
        decode_audio(path)
    }
}

pub fn decode_audio(path: &Path) -> Result<SampleSeries> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| Error::decode(path, format!("unsupported container: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::decode(path, "no audio tracks found"))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::decode(path, "unknown sample rate"))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::decode(path, format!("unsupported codec: {e}")))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Decoding {}", path.display()));

    let mut all_samples: Vec<f32> = Vec::new();
    let mut skipped_packets = 0usize;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(Error::decode(path, e));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }
        pb.tick();

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(_)) => {
                skipped_packets += 1;
                continue;
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(Error::decode(path, e));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        let channels = spec.channels.count().max(1);

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        downmix_into(&mut all_samples, sample_buf.samples(), channels);
    }

    pb.finish_and_clear();

    if skipped_packets > 0 {
        log::warn!("Skipped {} undecodable packets in {}", skipped_packets, path.display());
    }

    let series = SampleSeries::new(all_samples, sample_rate);
    log::info!(
        "Decoded audio: {} samples, {}Hz, {:.1}s",
        series.len(),
        sample_rate,
        series.duration_secs()
    );

    Ok(series)
}

/// Average interleaved frames down to one channel.
fn downmix_into(out: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels == 1 {
        out.extend_from_slice(interleaved);
        return;
    }
    out.extend(
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32),
    );
}
