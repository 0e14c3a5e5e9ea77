//! Offline audio sample extraction and complex-magnitude plotting.
//!
//! Two independent stages share this library:
//!
//! - [`audio`] decodes an audio file to mono samples and writes them as
//!   fixed-point text, one per line.
//! - [`spectrum`] and [`plot`] read `(real,imag)` text files, reduce each
//!   line to its magnitude and overlay up to three series on a PNG chart.

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod spectrum;

pub use error::{Error, Result};
