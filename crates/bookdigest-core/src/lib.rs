//! BookDigest Core — error type and pipeline configuration.

pub mod config;
pub mod error;

pub use config::AnalyzeConfig;
pub use error::{Error, Result};
