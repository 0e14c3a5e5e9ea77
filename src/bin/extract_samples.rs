use anyhow::{Context, Result};
use clap::Parser;

use magplot::audio::{self, default_output_path};
use magplot::cli::ExtractCli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = ExtractCli::parse();

    let input = std::path::absolute(&cli.input).unwrap_or_else(|_| cli.input.clone());
    let output = match cli.output {
        Some(ref path) => std::path::absolute(path).unwrap_or_else(|_| path.clone()),
        None => default_output_path(&input),
    };

    log::info!("Input: {}", input.display());
    log::info!("Output: {}", output.display());
    if let Some(seconds) = cli.seconds {
        log::info!("Window: first {}s", seconds);
    }

    let count = audio::extract(&input, &output, cli.seconds)
        .with_context(|| format!("Failed to extract samples from {}", input.display()))?;

    println!("Done! Saved {} samples to '{}'.", count, output.display());
    Ok(())
}
