use textfold::config::{load_config, CliArgs};
use textfold::{io, logging, Layout};

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if let Some(ref path) = config.log_file {
        logging::init(path)?;
    }

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let text = io::read_input(config.input.as_deref())?;
    let layout = Layout::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    layout
        .render(&text, &mut out)
        .and_then(|_| out.flush())
        .context("Failed to write output")?;

    Ok(())
}
