use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "extract-samples",
    about = "Decode an audio file and save its mono samples as text, one per line"
)]
pub struct ExtractCli {
    /// Input audio file (M4A, MP3, FLAC, OGG, WAV)
    pub input: PathBuf,

    /// Output text file (default: input path with a .txt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of seconds to convert (default: the whole file)
    #[arg(short, long)]
    pub seconds: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "plot-magnitude",
    about = "Plot the magnitude of (real,imag) values from up to three text files"
)]
pub struct PlotCli {
    /// Text files with one (real,imag) value per line; only the first three are used
    pub files: Vec<PathBuf>,

    /// Config file (default: magplot.toml, then the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the plot image is written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
