//! # Integration Tests
//!
//! Cross-subsystem flows exercised through the public service APIs.

pub mod flows;
