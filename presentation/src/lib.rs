//! Presentation layer for atelier-contact
//!
//! This crate contains the HTTP endpoint, CLI definitions, the terminal
//! inquiry form and its output formatting and progress reporting.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use form::input::{InputEvent, LineInput, ReedlineInput};
pub use form::repl::FormRepl;
pub use output::console::{ConsoleFormatter, ExitLinks};
pub use progress::reporter::SubmitSpinner;
pub use server::{AppState, ServerOptions, create_app};
