//! Impact engine: loading and validating the impact list.
mod decode;
mod engine;
mod fetch;
mod file;
mod types;

pub use decode::{decode_impacts, is_valid_impact, DecodeError};
pub use engine::{load_now, EngineHandle};
pub use fetch::{open_source, FetchSettings, HttpSource, ImpactSource, DATA_PATH};
pub use file::FileSource;
pub use types::{EngineEvent, FailureKind, LoadError};
