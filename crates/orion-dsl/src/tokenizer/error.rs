//! Tokenizer failures.
//!
//! Both failure kinds abort the current run. Nothing is salvaged from a
//! failed run; the caller decides whether to report a syntax error or retry
//! with different input.

use thiserror::Error;

use super::state::TokenizerState;

/// The transition table found a character with no rule in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected character {character:?} in {state} state")]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub character: char,
    /// The state that rejected it.
    pub state: TokenizerState,
}

/// An action reached the interpreter without the in-progress token or
/// attribute it operates on.
///
/// The transition table never produces such an action for a snapshot it
/// built itself; seeing one means the table and the interpreter disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// No token is in progress.
    #[error("{action}: no current token")]
    NoCurrentToken {
        /// Name of the failing action.
        action: &'static str,
    },
    /// No attribute is in progress.
    #[error("{action}: no current attribute")]
    NoCurrentAttribute {
        /// Name of the failing action.
        action: &'static str,
    },
    /// The token in progress has the wrong variant.
    #[error("{action}: expected a {expected} token, found a {found} token")]
    WrongToken {
        /// Name of the failing action.
        action: &'static str,
        /// Variant the action needs.
        expected: &'static str,
        /// Variant actually in progress.
        found: &'static str,
    },
}

/// Error returned by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The input is not valid markup.
    #[error(
        "malformed input at offset {offset}: unexpected character {character:?} in {state} state"
    )]
    MalformedInput {
        /// The offending character.
        character: char,
        /// The state that rejected it.
        state: TokenizerState,
        /// Zero-based character offset of the offending character.
        offset: usize,
    },

    /// The interpreter rejected an action.
    #[error("tokenizer invariant violated at offset {offset}")]
    Invariant {
        /// Zero-based character offset of the character being processed.
        offset: usize,
        /// The broken precondition.
        #[source]
        source: InvariantViolation,
    },

    /// Input ended inside an unfinished construct and the options ask for
    /// that to be an error.
    #[error("input ended in {state} state after {offset} characters")]
    TruncatedInput {
        /// State at the end of input.
        state: TokenizerState,
        /// Number of characters consumed.
        offset: usize,
    },
}

impl TokenizeError {
    pub(super) const fn malformed(error: UnexpectedCharacter, offset: usize) -> Self {
        Self::MalformedInput {
            character: error.character,
            state: error.state,
            offset,
        }
    }

    /// Character offset the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MalformedInput { offset, .. }
            | Self::Invariant { offset, .. }
            | Self::TruncatedInput { offset, .. } => *offset,
        }
    }
}
