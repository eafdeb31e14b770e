//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod email_sender;
pub mod inquiry_transport;
pub mod progress;
