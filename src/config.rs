use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const LOCAL_CONFIG: &str = "magplot.toml";

/// Most series ever drawn on one chart; larger `max_series` values are capped.
pub const MAX_SERIES: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Chart labels, image size and input/output naming for the plotter.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlotConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Inputs beyond this count are ignored. Capped at [`MAX_SERIES`].
    #[serde(default = "default_max_series")]
    pub max_series: usize,
    /// Used when no input paths are given.
    #[serde(default = "default_input")]
    pub default_input: PathBuf,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            width: default_width(),
            height: default_height(),
            max_series: default_max_series(),
            default_input: default_input(),
            output_suffix: default_output_suffix(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_title() -> String { "FFT Magnitude".into() }
fn default_x_label() -> String { "Index".into() }
fn default_y_label() -> String { "Magnitude".into() }
fn default_width() -> u32 { 1000 }
fn default_height() -> u32 { 600 }
fn default_max_series() -> usize { MAX_SERIES }
fn default_input() -> PathBuf { PathBuf::from("output.txt") }
fn default_output_suffix() -> String { "_plot.png".into() }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Invalid config {}: {}", path.display(), err);
            None
        }
    }
}

/// Explicit path, else `magplot.toml` in the working directory, else the
/// per-user config directory.
pub fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("magplot").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_constants() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.title, "FFT Magnitude");
        assert_eq!(cfg.x_label, "Index");
        assert_eq!(cfg.y_label, "Magnitude");
        assert_eq!(cfg.max_series, 3);
        assert_eq!(cfg.default_input, PathBuf::from("output.txt"));
        assert_eq!(cfg.output_suffix, "_plot.png");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: Config = toml::from_str("[plot]\ntitle = \"Spectrum\"\nwidth = 640\n").unwrap();
        assert_eq!(cfg.plot.title, "Spectrum");
        assert_eq!(cfg.plot.width, 640);
        assert_eq!(cfg.plot.height, 600);
        assert_eq!(cfg.plot.y_label, "Magnitude");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.plot, PlotConfig::default());
    }

    #[test]
    fn unreadable_or_invalid_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("missing.toml")).is_none());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[plot]\nwidth = \"wide\"\n").unwrap();
        assert!(load_config(&bad).is_none());
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(find_config(Some(path)), Some(path.to_path_buf()));
    }
}
