/// Decoded mono amplitudes in time order.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SampleSeries {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Keep the first `floor(sample_rate * seconds)` samples.
    ///
    /// A window longer than the series keeps everything. Callers validate
    /// `seconds`; a negative or NaN window empties the series.
    pub fn truncate_to_seconds(&mut self, seconds: f64) {
        let limit = window_len(self.sample_rate, seconds);
        if limit < self.samples.len() {
            log::info!(
                "Truncating {} samples to {} ({:.3}s @ {}Hz)",
                self.samples.len(),
                limit,
                seconds,
                self.sample_rate
            );
            self.samples.truncate(limit);
        }
    }
}

/// Number of samples covered by `seconds` at `sample_rate`, rounded down.
pub fn window_len(sample_rate: u32, seconds: f64) -> usize {
    let n = (sample_rate as f64 * seconds).floor();
    if n >= usize::MAX as f64 {
        usize::MAX
    } else {
        n as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, sample_rate: u32) -> SampleSeries {
        SampleSeries::new((0..len).map(|i| i as f32).collect(), sample_rate)
    }

    #[test]
    fn truncates_to_floor_of_window() {
        let mut series = ramp(100, 10);
        series.truncate_to_seconds(2.55);
        assert_eq!(series.len(), 25);
        assert_eq!(series.samples[24], 24.0);
    }

    #[test]
    fn short_series_is_kept_whole() {
        let mut series = ramp(10, 44_100);
        series.truncate_to_seconds(1.0);
        assert_eq!(series.len(), 10);
    }

    #[test]
    fn zero_window_empties_series() {
        let mut series = ramp(10, 8_000);
        series.truncate_to_seconds(0.0);
        assert!(series.is_empty());
    }

    #[test]
    fn window_len_floors_and_saturates_at_zero() {
        assert_eq!(window_len(44_100, 0.5), 22_050);
        assert_eq!(window_len(10, 0.99), 9);
        assert_eq!(window_len(10, -1.0), 0);
    }

    #[test]
    fn duration_follows_sample_rate() {
        assert_eq!(ramp(22_050, 44_100).duration_secs(), 0.5);
        assert_eq!(ramp(5, 0).duration_secs(), 0.0);
    }
}
