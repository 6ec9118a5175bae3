//! Markup tokenizer module.
//!
//! The tokenizer is split into the pieces of a fold:
//! [`transitions`] decides which [`Action`]s a character produces,
//! [`world`] applies them to a [`Snapshot`], and [`driver`] runs the
//! fold over the input.

/// Primitive actions emitted by the transition table.
pub mod action;
/// Tokenizer driver and configuration.
pub mod driver;
/// Error types for malformed input and broken preconditions.
pub mod error;
/// Character classification shared by the transition table.
pub mod helpers;
/// Tokenizer states.
pub mod state;
/// Token types produced by the tokenizer.
pub mod token;
/// The state-transition table.
pub mod transitions;
/// Snapshots and the action interpreter.
pub mod world;

pub use action::Action;
pub use driver::{TokenizerOptions, TruncatedInput, tokenize, tokenize_with};
pub use error::{InvariantViolation, TokenizeError, UnexpectedCharacter};
pub use state::TokenizerState;
pub use token::{Attribute, AttributeKind, Token};
pub use world::Snapshot;
