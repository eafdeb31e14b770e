//! Terminal inquiry form
//!
//! Walks the four form steps one field at a time. Plain input answers the
//! field under the cursor; slash commands navigate and submit.

pub mod command;
pub mod input;
pub mod repl;

pub use command::{CommandError, FormCommand};
pub use input::{InputEvent, LineInput, ReedlineInput};
pub use repl::FormRepl;
