use crate::core::store::TranscriptStore;
use crate::core::{Input, Prompt, Storage};
use crate::domain::course::Course;
use crate::domain::grade::{is_known_grade, known_grades};
use crate::utils::error::{Result, TranscriptError};
use crate::utils::validation::{validate_credit_hours, validate_non_empty_string};
use colored::Colorize;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Upper bound on consecutive rejected answers to a single field.
pub const MAX_INPUT_ATTEMPTS: usize = 5;

const GREETING: &str = "You really can't wait two days for the grades to be out huh";
const FAREWELL: &str = "Bye";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OpenTranscript,
    PrintTranscript,
    AddSemester,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::OpenTranscript,
        MenuChoice::PrintTranscript,
        MenuChoice::AddSemester,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u32 {
        match self {
            MenuChoice::OpenTranscript => 1,
            MenuChoice::PrintTranscript => 2,
            MenuChoice::AddSemester => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::OpenTranscript => "Open or create a transcript file",
            MenuChoice::PrintTranscript => "Print the current transcript",
            MenuChoice::AddSemester => "Add a new semester to the transcript",
            MenuChoice::Exit => "Exit (or Ctrl+c)",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let key: u32 = trimmed
            .parse()
            .map_err(|_| TranscriptError::invalid_input(format!("'{}' is not a number", trimmed)))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or_else(|| TranscriptError::invalid_input(format!("{} is not a menu option", key)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    Idle,
    Open { path: &'a Path },
}

/// Menu-driven read-eval loop over a single transcript store.
pub struct SessionController<S: Storage, P: Prompt, W: Write> {
    store: TranscriptStore<S>,
    prompt: P,
    out: W,
    startup_path: Option<PathBuf>,
}

impl<S: Storage, P: Prompt, W: Write> SessionController<S, P, W> {
    pub fn new(store: TranscriptStore<S>, prompt: P, out: W) -> Self {
        Self {
            store,
            prompt,
            out,
            startup_path: None,
        }
    }

    /// Opens `path` right after the greeting, before the first menu.
    pub fn open_on_start(mut self, path: impl Into<PathBuf>) -> Self {
        self.startup_path = Some(path.into());
        self
    }

    pub fn state(&self) -> SessionState<'_> {
        match self.store.source_path() {
            Some(path) => SessionState::Open { path },
            None => SessionState::Idle,
        }
    }

    pub fn store(&self) -> &TranscriptStore<S> {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until the exit option or an interrupt at the menu prompt.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", GREETING.green())?;

        if let Some(path) = self.startup_path.take() {
            if let Err(e) = self.open(path).await {
                if !e.is_recoverable() {
                    return Err(e);
                }
                self.report(&e)?;
            }
        }

        loop {
            self.show_status()?;
            self.show_menu()?;

            let line = match self.prompt.read_line("> ")? {
                Input::Line(line) => line,
                Input::Interrupted => break,
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            tracing::debug!("Menu selection: {:?}", choice);

            let outcome = match choice {
                MenuChoice::OpenTranscript => self.open_interactive().await,
                MenuChoice::PrintTranscript => self.print_transcript(),
                MenuChoice::AddSemester => self.add_semester().await,
                MenuChoice::Exit => break,
            };

            if let Err(e) = outcome {
                if !e.is_recoverable() {
                    return Err(e);
                }
                self.report(&e)?;
            }
        }

        writeln!(self.out, "{}", format!("\n{}", FAREWELL).yellow())?;
        Ok(())
    }

    /// Opens `path`; a missing file is announced and left to be created on save.
    pub async fn open(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        match self.store.load(path).await {
            Ok(()) => {
                let count = self.store.transcript().semesters().len();
                writeln!(self.out, "{}", format!("Loaded {} semester(s)", count).green())?;
                Ok(())
            }
            Err(e @ TranscriptError::FileNotFound { .. }) => self.report(&e),
            Err(e) => Err(e),
        }
    }

    fn show_status(&mut self) -> Result<()> {
        let status = match self.state() {
            SessionState::Open { path } => format!("Current transcript: {}", path.display()),
            SessionState::Idle => "No transcript open".to_string(),
        };
        writeln!(self.out, "\n{}", status.bold())?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn report(&mut self, error: &TranscriptError) -> Result<()> {
        let message = format!(
            "{} ({})",
            error.user_friendly_message(),
            error.recovery_suggestion()
        );
        match error {
            TranscriptError::FileNotFound { .. } | TranscriptError::NoTranscriptOpen => {
                tracing::warn!("{}", error);
                writeln!(self.out, "{}", message.yellow())?;
            }
            _ => {
                tracing::debug!("Recoverable error: {}", error);
                writeln!(self.out, "{}", message.red())?;
            }
        }
        Ok(())
    }

    /// Re-prompts until `parse` accepts the line. `None` means interrupted.
    fn read_field<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        for attempt in 1..=MAX_INPUT_ATTEMPTS {
            let line = match self.prompt.read_line(prompt)? {
                Input::Line(line) => line,
                Input::Interrupted => return Ok(None),
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!("Attempt {} rejected: {}", attempt, e);
                    self.report(&e)?;
                }
            }
        }
        Err(TranscriptError::invalid_input(format!(
            "gave up after {} attempts",
            MAX_INPUT_ATTEMPTS
        )))
    }

    async fn open_interactive(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Enter the file name".cyan())?;
        let path = self.read_field("> ", |line| {
            validate_non_empty_string("file name", line)?;
            Ok(PathBuf::from(line.trim()))
        })?;
        match path {
            Some(path) => self.open(path).await,
            None => Ok(()),
        }
    }

    fn print_transcript(&mut self) -> Result<()> {
        if self.store.source_path().is_none() {
            return Err(TranscriptError::NoTranscriptOpen);
        }

        let report = match self.store.aggregate() {
            Ok(summary) => {
                for warning in &summary.warnings {
                    writeln!(self.out, "{}", format!("Warning: {}", warning).yellow())?;
                }
                self.store.render_with(&summary)
            }
            Err(e) => format!("{}\n", e.user_friendly_message()),
        };
        write!(self.out, "{}", report)?;
        Ok(())
    }

    async fn add_semester(&mut self) -> Result<()> {
        if self.store.source_path().is_none() {
            return Err(TranscriptError::NoTranscriptOpen);
        }

        let suggested = self.store.next_semester_number();
        writeln!(
            self.out,
            "{}",
            format!("Semester number (blank for {})", suggested).cyan()
        )?;
        let number = match self.read_field("> ", |line| parse_semester_number(line, suggested))? {
            Some(number) => number,
            None => {
                writeln!(self.out, "{}", "Cancelled".yellow())?;
                return Ok(());
            }
        };

        writeln!(
            self.out,
            "{}",
            "Enter courses as name, grade, credit hours. Press Ctrl+c when done".cyan()
        )?;
        let mut courses = Vec::new();
        loop {
            match self.read_course() {
                Ok(Some(course)) => courses.push(course),
                Ok(None) => break,
                // Giving up on one field ends entry; completed courses are kept.
                Err(e @ TranscriptError::InvalidInput { .. }) => {
                    self.report(&e)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let count = courses.len();
        self.store.append(number, courses).await?;
        writeln!(
            self.out,
            "{}",
            format!("Saved semester {} with {} course(s)", number, count).green()
        )?;
        Ok(())
    }

    fn read_course(&mut self) -> Result<Option<Course>> {
        let Some(name) = self.read_field("name> ", |line| {
            validate_non_empty_string("course name", line)?;
            Ok(line.trim().to_string())
        })?
        else {
            return Ok(None);
        };
        let Some(grade) = self.read_field("grade> ", parse_grade)? else {
            return Ok(None);
        };
        let Some(credit_hours) = self.read_field("crhr> ", parse_credit_hours)? else {
            return Ok(None);
        };
        Course::new(name, grade, credit_hours).map(Some)
    }
}

fn parse_semester_number(line: &str, suggested: u32) -> Result<u32> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(suggested);
    }
    trimmed.parse().map_err(|_| {
        TranscriptError::invalid_input(format!("'{}' is not a semester number", trimmed))
    })
}

fn parse_grade(line: &str) -> Result<String> {
    let grade = line.trim().to_ascii_uppercase();
    if is_known_grade(&grade) {
        return Ok(grade);
    }
    let known: Vec<&str> = known_grades().collect();
    Err(TranscriptError::invalid_input(format!(
        "'{}' is not one of {}",
        line.trim(),
        known.join(", ")
    )))
}

fn parse_credit_hours(line: &str) -> Result<Decimal> {
    let trimmed = line.trim();
    let value = Decimal::from_str(trimmed).map_err(|_| {
        TranscriptError::invalid_input(format!("'{}' is not a number", trimmed))
    })?;
    validate_credit_hours(value)?;
    Ok(value)
}
