pub mod decode;
pub mod extract;
pub mod series;

pub use decode::{SampleSource, SymphoniaDecoder};
pub use extract::{default_output_path, extract, extract_with, write_samples};
pub use series::SampleSeries;
