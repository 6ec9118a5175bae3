//! The tokenizer driver.
//!
//! Folds the transition table and the interpreter over the input, one
//! character at a time, starting from [`Snapshot::new`].

use super::error::TokenizeError;
use super::token::Token;
use super::transitions::actions_for;
use super::world::Snapshot;

/// What to do when input ends inside a tag, attribute or comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TruncatedInput {
    /// Drop the unfinished construct and return the tokens committed so far.
    #[default]
    Drop,
    /// Fail with [`TokenizeError::TruncatedInput`].
    Fail,
}

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Handling of unfinished trailing constructs.
    pub truncated_input: TruncatedInput,
    /// Append [`Token::EndOfInput`] to a successful run.
    pub emit_end_of_input: bool,
}

impl TokenizerOptions {
    /// Default options: drop truncated input, no end-of-input token.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            truncated_input: TruncatedInput::Drop,
            emit_end_of_input: false,
        }
    }

    /// Set the truncated-input policy.
    #[must_use]
    pub const fn with_truncated_input(mut self, policy: TruncatedInput) -> Self {
        self.truncated_input = policy;
        self
    }

    /// Request a trailing end-of-input token.
    #[must_use]
    pub const fn with_end_of_input(mut self, emit: bool) -> Self {
        self.emit_end_of_input = emit;
        self
    }
}

/// Tokenize `source` with the default options.
///
/// # Errors
///
/// Returns [`TokenizeError::MalformedInput`] for a character that has no
/// rule in the state it was read in, and [`TokenizeError::Invariant`] if
/// the interpreter rejects an action.
///
/// # Example
/// ```
/// use orion_dsl::{Token, tokenize};
///
/// let tokens = tokenize("<br/>").unwrap();
/// assert_eq!(tokens, vec![Token::start_tag("br", Vec::new(), true)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    tokenize_with(source, &TokenizerOptions::default())
}

/// Tokenize `source` with explicit options.
///
/// # Errors
///
/// As [`tokenize`], plus [`TokenizeError::TruncatedInput`] when
/// `options.truncated_input` is [`TruncatedInput::Fail`] and the input ends
/// inside an unfinished construct.
pub fn tokenize_with(
    source: &str,
    options: &TokenizerOptions,
) -> Result<Vec<Token>, TokenizeError> {
    Snapshot::new().feed_str(source)?.finish(options)
}

impl Snapshot {
    /// Consume one character.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::MalformedInput`] or
    /// [`TokenizeError::Invariant`]; the snapshot is consumed either way.
    pub fn feed(self, c: char) -> Result<Self, TokenizeError> {
        let offset = self.offset;
        let actions =
            actions_for(c, &self).map_err(|error| TokenizeError::malformed(error, offset))?;
        let mut next = actions
            .into_iter()
            .try_fold(self, Self::apply)
            .map_err(|source| TokenizeError::Invariant { offset, source })?;
        next.offset += 1;
        Ok(next)
    }

    /// Consume every character of `input` in order.
    ///
    /// Feeding a string in pieces gives the same result as feeding it whole.
    ///
    /// # Errors
    ///
    /// Stops at the first failing character, see [`Snapshot::feed`].
    pub fn feed_str(self, input: &str) -> Result<Self, TokenizeError> {
        input.chars().try_fold(self, Self::feed)
    }

    /// End the input and return the committed tokens.
    ///
    /// With [`TruncatedInput::Drop`] an unfinished construct is discarded
    /// silently. Callers that want to report the drop check
    /// [`Snapshot::has_pending_construct`] first.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::TruncatedInput`] if input ended inside an
    /// unfinished construct and the options ask for that to fail.
    pub fn finish(self, options: &TokenizerOptions) -> Result<Vec<Token>, TokenizeError> {
        if self.has_pending_construct() && options.truncated_input == TruncatedInput::Fail {
            return Err(TokenizeError::TruncatedInput {
                state: self.state,
                offset: self.offset,
            });
        }

        let mut tokens = self.into_tokens();
        if options.emit_end_of_input {
            tokens.push(Token::end_of_input());
        }
        Ok(tokens)
    }
}
