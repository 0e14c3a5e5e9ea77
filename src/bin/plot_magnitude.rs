use anyhow::Result;
use clap::Parser;

use magplot::cli::PlotCli;
use magplot::config::{self, PlotConfig};
use magplot::plot::{self, PlotOutcome, PlottersRenderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = PlotCli::parse();

    let mut plot_config = PlotConfig::default();
    if let Some(path) = config::find_config(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(&path) {
            log::info!("Loaded config from {}", path.display());
            plot_config = cfg.plot;
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }
    if let Some(dir) = cli.output_dir {
        plot_config.output_dir = dir;
    }

    let report = plot::plot(&cli.files, &plot_config, &PlottersRenderer);

    for path in &report.missing {
        println!("Error: File {} not found.", path.display());
    }
    for (path, err) in &report.unreadable {
        println!("Error: Could not read {}: {}", path.display(), err);
    }

    match report.outcome? {
        PlotOutcome::Rendered { image, .. } => {
            println!("Plot saved to {}", image.display());
        }
        PlotOutcome::NothingToDraw => {
            println!("Nothing to plot.");
        }
    }
    Ok(())
}
