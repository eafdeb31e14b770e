//! Infrastructure layer for atelier-contact
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod email;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileContactConfig,
    FileMailConfig, FileServerConfig,
};
pub use email::resend::ResendEmailSender;
pub use http::inquiry_client::HttpInquiryTransport;
