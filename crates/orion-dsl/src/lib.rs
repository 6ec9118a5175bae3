//! Tokenizer for the Orion markup dialect.
//!
//! # Scope
//!
//! The dialect looks like HTML, but attribute values are typed:
//! - **Strings** - `label="Save"`
//! - **Numbers** - `width=240`
//! - **JSON arrays and objects** - `items=[1, 2]`, `style={"color": "red"}`
//! - **Bindings** - `onClick={handleClick}`, an expression resolved downstream
//!
//! This crate implements:
//! - **State-transition table** mapping a state and an input character to actions
//! - **Interpreter** folding actions into immutable [`Snapshot`]s
//! - **Driver** ([`tokenize`]) producing the token stream for a tree builder
//!
//! # Not Implemented
//!
//! - Tree construction
//! - Binding resolution or JSON evaluation
//! - Script, CDATA, DOCTYPE and character reference states

/// Tokenizer for converting markup source into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Action, Attribute, AttributeKind, InvariantViolation, Snapshot, Token, TokenizeError,
    TokenizerOptions, TokenizerState, TruncatedInput, UnexpectedCharacter, tokenize, tokenize_with,
};
