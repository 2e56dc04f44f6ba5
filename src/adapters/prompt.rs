use crate::core::{Input, Prompt};
use crate::utils::error::Result;
use std::collections::VecDeque;

/// Line editor on the controlling terminal. Ctrl-C and Ctrl-D both count as
/// an interrupt.
#[cfg(feature = "cli")]
pub struct TerminalPrompt {
    editor: rustyline::DefaultEditor,
}

#[cfg(feature = "cli")]
impl TerminalPrompt {
    pub fn new() -> Result<Self> {
        let editor = rustyline::DefaultEditor::new().map_err(terminal_error)?;
        Ok(Self { editor })
    }
}

#[cfg(feature = "cli")]
impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        use rustyline::error::ReadlineError;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Input::Interrupted),
            Err(e) => Err(terminal_error(e)),
        }
    }
}

#[cfg(feature = "cli")]
fn terminal_error(e: rustyline::error::ReadlineError) -> crate::utils::error::TranscriptError {
    crate::utils::error::TranscriptError::TerminalError {
        message: e.to_string(),
    }
}

/// Replays a fixed sequence of answers. Running out of answers reads as an
/// interrupt, so a script always terminates the session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<Input>,
}

impl ScriptedPrompt {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_inputs(lines.into_iter().map(|line| Input::Line(line.into())))
    }

    pub fn from_inputs(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<Input> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Interrupted))
    }
}
