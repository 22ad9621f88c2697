use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Show impact statements as a rotating carousel or an endless ticker.
#[derive(Debug, Parser)]
#[command(name = "impacts")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "RON configuration file [default: ./impacts.ron]"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Impact list: a JSON file path, a .json URL, or a site base URL"
    )]
    pub source: Option<String>,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogTarget::File,
        help = "Where log output goes"
    )]
    pub log: LogTarget,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one impact at a time (the default).
    Carousel(CarouselArgs),
    /// Print an endless shuffled stream of impacts.
    Ticker(TickerArgs),
    /// Print counts of impacts and entities.
    Stats,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CarouselArgs {
    #[arg(long, conflicts_with = "sequential", help = "Draw impacts at random")]
    pub random: bool,
    #[arg(long, help = "Step through impacts in list order")]
    pub sequential: bool,
    #[arg(long, help = "Seconds between automatic advances")]
    pub interval_secs: Option<u64>,
    #[arg(long, help = "Show only the impact with this id")]
    pub overwrite_id: Option<u32>,
    #[arg(long, help = "Start at the impact with this id (sequential mode)")]
    pub start_id: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct TickerArgs {
    #[arg(long, help = "Shuffled passes generated per refill")]
    pub passes: Option<usize>,
    #[arg(
        long,
        help = "Delay between entries in milliseconds",
        default_value_t = 1500
    )]
    pub delay_ms: u64,
    #[arg(long, help = "Stop after this many entries")]
    pub limit: Option<usize>,
}
