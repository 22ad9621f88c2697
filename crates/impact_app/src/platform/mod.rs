pub mod app;
pub mod config;
pub mod effects;
pub mod logging;
pub mod stats;
pub mod ticker;
pub mod ui;
