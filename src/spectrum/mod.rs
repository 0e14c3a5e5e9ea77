pub mod complex;
pub mod reader;

pub use complex::parse_complex_literal;
pub use reader::{parse_magnitudes, read_magnitudes, MagnitudeSeries, SeriesRead};
