use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Unknown grade '{grade}'{}", semester_suffix(.semester))]
    UnknownGrade { grade: String, semester: Option<u32> },

    #[error("GPA is undefined for {scope}: no credit hours recorded")]
    DivisionByZero { scope: String },

    #[error("No transcript is open")]
    NoTranscriptOpen,

    #[error("Transcript file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Malformed transcript data in {}: {message}", .path.display())]
    MalformedData { path: PathBuf, message: String },

    #[error("Transcript has no semesters")]
    EmptyTranscript,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Terminal error: {message}")]
    TerminalError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

fn semester_suffix(semester: &Option<u32>) -> String {
    match semester {
        Some(number) => format!(" in semester {}", number),
        None => String::new(),
    }
}

impl TranscriptError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Recoverable errors return control to the menu; the rest end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::TerminalError { .. } | Self::ConfigError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => format!("Hey watch your input: {}", message),
            Self::UnknownGrade { .. } => self.to_string(),
            Self::DivisionByZero { scope } => format!("GPA for {} is N/A", scope),
            Self::NoTranscriptOpen => "Open a transcript file first".to_string(),
            Self::FileNotFound { path } => {
                format!("{} does not exist yet, it will be created on save", path.display())
            }
            Self::MalformedData { path, message } => {
                format!("Could not read {}: {}", path.display(), message)
            }
            Self::EmptyTranscript => "No semesters recorded yet".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not encode transcript: {}", e),
            Self::TerminalError { message } => format!("Terminal failure: {}", message),
            Self::ConfigError { message } => format!("Bad arguments: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Read the prompt again",
            Self::UnknownGrade { .. } => "Use a letter grade such as A, B+ or C-",
            Self::DivisionByZero { .. } => "Add at least one course with credit hours",
            Self::NoTranscriptOpen => "Pick option 1 to open or create a transcript",
            Self::FileNotFound { .. } => "Add a semester to create the file",
            Self::MalformedData { .. } => {
                "Check that the file is a JSON array of {num, courses} objects"
            }
            Self::EmptyTranscript => "Pick option 3 to add a semester",
            Self::IoError(_) => "Check the path and its permissions",
            Self::SerializationError(_) => "Check the recorded course values",
            Self::TerminalError { .. } => "Run the program from an interactive terminal",
            Self::ConfigError { .. } => "Run with --help to see the usage",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
