use std::fs;
use std::path::Path;
use std::time::Duration;

use impact_core::{DisplayConfig, ImpactId, SelectionMode};
use impact_logging::{impact_info, impact_warn};
use serde::Deserialize;

use crate::cli::{CarouselArgs, TickerArgs};

pub const DEFAULT_CONFIG_FILENAME: &str = "impacts.ron";
pub const DEFAULT_SOURCE: &str = "data/impacts.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ModeSetting {
    Sequential,
    Random,
}

impl From<ModeSetting> for SelectionMode {
    fn from(mode: ModeSetting) -> Self {
        match mode {
            ModeSetting::Sequential => SelectionMode::Sequential,
            ModeSetting::Random => SelectionMode::Random,
        }
    }
}

/// On-disk settings; every field is optional and falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub source: Option<String>,
    pub mode: Option<ModeSetting>,
    pub auto_advance_secs: Option<u64>,
    pub transition_ms: Option<u64>,
    pub overwrite_id: Option<ImpactId>,
    pub start_id: Option<ImpactId>,
    pub ticker_passes: Option<usize>,
}

/// Settings after merging defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: String,
    pub display: DisplayConfig,
}

/// Read `path`; a missing or unreadable file yields the defaults.
pub(crate) fn load_config_file(path: &Path) -> ConfigFile {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ConfigFile::default();
        }
        Err(err) => {
            impact_warn!("Failed to read config from {:?}: {}", path, err);
            return ConfigFile::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            impact_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            impact_warn!("Failed to parse config from {:?}: {}", path, err);
            ConfigFile::default()
        }
    }
}

pub(crate) fn resolve(
    file: &ConfigFile,
    source: Option<&str>,
    carousel: Option<&CarouselArgs>,
    ticker: Option<&TickerArgs>,
) -> Resolved {
    let defaults = DisplayConfig::default();

    let mut display = DisplayConfig {
        mode: file.mode.map(SelectionMode::from).unwrap_or(defaults.mode),
        auto_advance_interval: file
            .auto_advance_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.auto_advance_interval),
        transition_duration: file
            .transition_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.transition_duration),
        overwrite_id: file.overwrite_id,
        start_id: file.start_id,
        ticker_passes: file.ticker_passes.unwrap_or(defaults.ticker_passes),
    };

    if let Some(args) = carousel {
        if args.random {
            display.mode = SelectionMode::Random;
        } else if args.sequential {
            display.mode = SelectionMode::Sequential;
        }
        if let Some(secs) = args.interval_secs {
            display.auto_advance_interval = Duration::from_secs(secs);
        }
        if args.overwrite_id.is_some() {
            display.overwrite_id = args.overwrite_id;
        }
        if args.start_id.is_some() {
            display.start_id = args.start_id;
        }
    }
    if let Some(passes) = ticker.and_then(|args| args.passes) {
        display.ticker_passes = passes;
    }

    let source = source
        .map(ToOwned::to_owned)
        .or_else(|| file.source.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    Resolved { source, display }
}
