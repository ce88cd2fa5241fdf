//! Storage module for debrief
//!
//! Keeps the managed upload and transcription folders under their
//! configured size ceiling.

mod eviction;

pub use eviction::{dir_size_bytes, enforce_ceiling, enforce_ceiling_bytes};
