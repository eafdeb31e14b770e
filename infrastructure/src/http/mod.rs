//! HTTP client adapters
//!
//! - [`inquiry_client::HttpInquiryTransport`]: posts inquiries to `/api/contact`

pub mod inquiry_client;
