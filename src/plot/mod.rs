pub mod chart;
pub mod plotter;

pub use chart::{ChartRenderer, ChartRequest, PlottersRenderer};
pub use plotter::{output_image_path, plot, select_inputs, PlotOutcome, PlotReport};
