use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "transcript-tracker")]
#[command(version, about = "Track semesters, courses and GPA in a JSON transcript")]
pub struct CliConfig {
    /// Transcript file to open at startup; created on first save if missing
    pub transcript: Option<PathBuf>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.transcript {
            Some(path) => validate_path("transcript", path),
            None => Ok(()),
        }
    }
}
