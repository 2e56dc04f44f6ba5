use crate::core::Storage;
use crate::domain::course::Course;
use crate::domain::model::SemesterRecord;
use crate::domain::semester::Semester;
use crate::domain::transcript::{Summary, Transcript};
use crate::utils::error::{Result, TranscriptError};
use std::io;
use std::path::{Path, PathBuf};

/// Owns the session's transcript and keeps its file image in sync.
pub struct TranscriptStore<S: Storage> {
    storage: S,
    transcript: Transcript,
}

impl<S: Storage> TranscriptStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.transcript.source_path()
    }

    pub fn next_semester_number(&self) -> u32 {
        self.transcript.next_semester_number()
    }

    /// Replaces the in-memory transcript with the file's contents.
    ///
    /// A missing file still opens the path with an empty transcript and
    /// returns `FileNotFound`. Malformed files leave the current state alone.
    pub async fn load(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        tracing::debug!("Loading transcript from {}", path.display());

        let bytes = match self.storage.read_file(&path).await {
            Ok(bytes) => bytes,
            Err(TranscriptError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist, starting a new transcript", path.display());
                self.transcript = Transcript::with_semesters(path.clone(), Vec::new());
                return Err(TranscriptError::FileNotFound { path });
            }
            Err(e) => return Err(e),
        };

        let semesters = parse_semesters(&path, &bytes)?;
        tracing::info!(
            "Loaded {} semester(s) from {}",
            semesters.len(),
            path.display()
        );
        self.transcript = Transcript::with_semesters(path, semesters);
        Ok(())
    }

    pub async fn append(&mut self, number: u32, courses: Vec<Course>) -> Result<()> {
        if self.source_path().is_none() {
            return Err(TranscriptError::NoTranscriptOpen);
        }

        tracing::debug!("Appending semester {} with {} course(s)", number, courses.len());
        self.transcript.push(Semester::new(number, courses));
        self.save().await
    }

    pub async fn save(&self) -> Result<()> {
        let path = self
            .source_path()
            .ok_or(TranscriptError::NoTranscriptOpen)?;

        let records: Vec<SemesterRecord> = self
            .transcript
            .semesters()
            .iter()
            .map(Semester::to_record)
            .collect();
        let data = serde_json::to_vec_pretty(&records)?;

        self.storage.write_file(path, &data).await?;
        tracing::info!(
            "Saved {} semester(s) to {}",
            records.len(),
            path.display()
        );
        Ok(())
    }

    pub fn aggregate(&self) -> Result<Summary> {
        self.transcript.aggregate()
    }

    pub fn render(&self) -> String {
        self.transcript.render()
    }

    pub fn render_with(&self, summary: &Summary) -> String {
        self.transcript.render_with(summary)
    }
}

fn parse_semesters(path: &Path, bytes: &[u8]) -> Result<Vec<Semester>> {
    let malformed = |message: String| TranscriptError::MalformedData {
        path: path.to_path_buf(),
        message,
    };

    let records: Vec<SemesterRecord> =
        serde_json::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;

    records
        .into_iter()
        .map(|record| {
            let number = record.num;
            Semester::from_record(record)
                .map_err(|e| malformed(format!("semester {}: {}", number, e)))
        })
        .collect()
}
