//! # Algorithms Module
//!
//! Pure message encoding and flag checks.

pub mod flag_codec;

pub use flag_codec::{decode_message, encode_message, validate_flags};
