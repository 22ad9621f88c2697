mod cli;
mod platform;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use impact_core::Impact;
use impact_engine::{load_now, open_source, FetchSettings, ImpactSource};
use impact_logging::impact_warn;

use cli::{CarouselArgs, Cli, Command};
use platform::config::{self, DEFAULT_CONFIG_FILENAME};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log.into());

    let config_path = match &cli.config {
        Some(path) => {
            if !path.exists() {
                impact_warn!("Config file {:?} does not exist; using defaults", path);
            }
            path.clone()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILENAME),
    };
    let file = config::load_config_file(&config_path);
    let source_flag = cli.source.as_deref();

    match cli
        .command
        .unwrap_or_else(|| Command::Carousel(CarouselArgs::default()))
    {
        Command::Carousel(args) => {
            let resolved = config::resolve(&file, source_flag, Some(&args), None);
            let source = open(&resolved.source)?;
            platform::app::run_carousel(resolved.display, Arc::from(source))
        }
        Command::Ticker(args) => {
            let resolved = config::resolve(&file, source_flag, None, Some(&args));
            let impacts = load(&resolved.source)?;
            platform::ticker::run_ticker(
                &impacts,
                resolved.display.ticker_passes,
                Duration::from_millis(args.delay_ms),
                args.limit,
            )
        }
        Command::Stats => {
            let resolved = config::resolve(&file, source_flag, None, None);
            let impacts = load(&resolved.source)?;
            platform::stats::run_stats(&impacts)
        }
    }
}

fn open(location: &str) -> anyhow::Result<Box<dyn ImpactSource>> {
    open_source(location, FetchSettings::default())
        .with_context(|| format!("invalid impact source {location:?}"))
}

fn load(location: &str) -> anyhow::Result<Vec<Impact>> {
    let source = open(location)?;
    load_now(source.as_ref())
        .with_context(|| format!("failed to load impacts from {}", source.describe()))
}
