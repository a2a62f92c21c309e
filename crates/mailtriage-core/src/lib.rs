//! MailTriage Core — error type, configuration, engine mode.

pub mod config;
pub mod error;
pub mod mode;

pub use config::TriageConfig;
pub use error::{Error, Result};
pub use mode::EngineMode;
