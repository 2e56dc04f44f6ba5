pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::prompt::TerminalPrompt;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::prompt::ScriptedPrompt;
pub use crate::adapters::storage::LocalStorage;
pub use crate::core::{session::SessionController, store::TranscriptStore};
pub use crate::domain::{course::Course, semester::Semester, transcript::Transcript};
pub use crate::utils::error::{Result, TranscriptError};
