//! Line input for the terminal form

use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

/// What the inquirer typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl-C: abandon the current line
    Interrupted,
    /// Ctrl-D: leave the form
    Eof,
}

/// Source of input lines
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Interactive line editor backed by reedline
pub struct ReedlineInput {
    editor: Reedline,
}

impl ReedlineInput {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl Default for ReedlineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for ReedlineInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(prompt.to_string()),
            DefaultPromptSegment::Empty,
        );
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(InputEvent::Line(line)),
            Signal::CtrlC => Ok(InputEvent::Interrupted),
            _ => Ok(InputEvent::Eof),
        }
    }
}
