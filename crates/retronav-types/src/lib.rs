//! Foundation types for RetroNav.
//!
//! This crate contains the types shared by all RetroNav crates: the error
//! enum, and the [`engine::WebEngine`] trait that the rest of the shell
//! uses to talk to whatever rendering engine is embedded.

pub mod engine;
pub mod error;
