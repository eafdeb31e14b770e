//! Form State Machine.
//!
//! - [`step::FormStep`]: the four fixed steps and their fields
//! - [`state::FormState`]: navigation plus the submission lifecycle

pub mod state;
pub mod step;
