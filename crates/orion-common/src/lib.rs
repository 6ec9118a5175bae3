//! Common utilities for the Orion markup tooling.
//!
//! This crate provides shared infrastructure used by the tokenizer and the CLI:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
