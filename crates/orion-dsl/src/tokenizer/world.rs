//! Tokenizer snapshots and the action interpreter.
//!
//! A [`Snapshot`] is a complete record of tokenizer progress. The
//! interpreter consumes one snapshot and one [`Action`] and returns the next
//! snapshot; nothing is shared between snapshots, so a snapshot can be
//! cloned, stored, and resumed later with more input.

use serde::Serialize;

use super::action::Action;
use super::error::InvariantViolation;
use super::state::TokenizerState;
use super::token::{Attribute, AttributeKind, Token};

/// Tokenizer progress at one point in the character stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Scratch buffer. Holds the first `-` of `<!--` until the second arrives.
    pub(super) buffer: String,
    pub(super) state: TokenizerState,
    /// Token being built, not yet part of `tokens`.
    pub(super) current_token: Option<Token>,
    /// Attribute being built. Moved into the current start tag when the next
    /// attribute starts or the tag is emitted.
    pub(super) current_attribute: Option<Attribute>,
    /// Committed tokens.
    pub(super) tokens: Vec<Token>,
    /// Number of characters consumed so far.
    pub(super) offset: usize,
}

impl Snapshot {
    /// The initial snapshot: data state, nothing in progress, no tokens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            state: TokenizerState::Data,
            current_token: None,
            current_attribute: None,
            tokens: Vec::new(),
            offset: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Scratch buffer contents.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Token in progress, if any.
    #[must_use]
    pub const fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// Attribute in progress, if any.
    #[must_use]
    pub const fn current_attribute(&self) -> Option<&Attribute> {
        self.current_attribute.as_ref()
    }

    /// Tokens committed so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the input so far ends inside a tag, attribute or
    /// comment.
    #[must_use]
    pub const fn has_pending_construct(&self) -> bool {
        self.state.is_inside_construct()
            || self.current_token.is_some()
            || self.current_attribute.is_some()
    }

    /// Consume the snapshot and return the committed tokens. Anything still
    /// in progress is discarded.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Apply one action and return the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if the action needs an in-progress
    /// token or attribute that is missing or of the wrong variant.
    pub fn apply(mut self, action: Action) -> Result<Self, InvariantViolation> {
        let name = action.name();
        match action {
            Action::Transition(state) => {
                self.state = state;
            }
            Action::CreateStartTag(c) => {
                self.current_token = Some(Token::start_tag(c, Vec::new(), false));
            }
            Action::CreateEndTag(c) => {
                self.current_token = Some(Token::end_tag(c));
            }
            Action::AppendTagName(c) => {
                let token = current_token_mut(&mut self.current_token, name)?;
                let found = token.kind_name();
                token
                    .tag_name_mut()
                    .ok_or_else(|| wrong_token(name, "tag", found))?
                    .push(c);
            }
            Action::SetSelfClosing => {
                let token = current_token_mut(&mut self.current_token, name)?;
                if !token.set_self_closing() {
                    return Err(wrong_token(name, "start tag", token.kind_name()));
                }
            }
            Action::EmitTagToken => {
                let mut token = self
                    .current_token
                    .take()
                    .ok_or(InvariantViolation::NoCurrentToken { action: name })?;
                if token.tag_name().is_none() {
                    return Err(wrong_token(name, "tag", token.kind_name()));
                }
                if let Some(attribute) = self.current_attribute.take() {
                    let found = token.kind_name();
                    token
                        .attributes_mut()
                        .ok_or_else(|| wrong_token(name, "start tag", found))?
                        .push(attribute);
                }
                self.tokens.push(token);
            }
            Action::CreateAttribute(c) => {
                let token = current_token_mut(&mut self.current_token, name)?;
                let found = token.kind_name();
                let attributes = token
                    .attributes_mut()
                    .ok_or_else(|| wrong_token(name, "start tag", found))?;
                if let Some(previous) = self.current_attribute.take() {
                    attributes.push(previous);
                }
                self.current_attribute = Some(Attribute::json(c, String::new()));
            }
            Action::AppendAttributeName(c) => {
                require_start_tag(self.current_token.as_ref(), name)?;
                current_attribute_mut(&mut self.current_attribute, name)?
                    .name
                    .push(c);
            }
            Action::AppendAttributeValue(c) => {
                require_start_tag(self.current_token.as_ref(), name)?;
                current_attribute_mut(&mut self.current_attribute, name)?
                    .value
                    .push(c);
            }
            Action::ChangeAttrToBinding => {
                require_start_tag(self.current_token.as_ref(), name)?;
                current_attribute_mut(&mut self.current_attribute, name)?.kind =
                    AttributeKind::Binding;
            }
            Action::CreateComment => {
                self.current_token = Some(Token::comment(String::new()));
            }
            Action::AppendComment(c) => {
                let token = current_token_mut(&mut self.current_token, name)?;
                let found = token.kind_name();
                token
                    .comment_data_mut()
                    .ok_or_else(|| wrong_token(name, "comment", found))?
                    .push(c);
            }
            Action::EmitComment => {
                let token = self
                    .current_token
                    .take()
                    .ok_or(InvariantViolation::NoCurrentToken { action: name })?;
                if !matches!(token, Token::Comment { .. }) {
                    return Err(wrong_token(name, "comment", token.kind_name()));
                }
                self.tokens.push(token);
            }
            Action::AppendBuffer(c) => {
                self.buffer.push(c);
            }
            Action::ClearBuffer => {
                self.buffer.clear();
            }
            Action::EmitCharacter(c) => {
                self.tokens.push(Token::character(c));
            }
        }
        Ok(self)
    }
}

fn current_token_mut<'a>(
    token: &'a mut Option<Token>,
    action: &'static str,
) -> Result<&'a mut Token, InvariantViolation> {
    token
        .as_mut()
        .ok_or(InvariantViolation::NoCurrentToken { action })
}

fn current_attribute_mut<'a>(
    attribute: &'a mut Option<Attribute>,
    action: &'static str,
) -> Result<&'a mut Attribute, InvariantViolation> {
    attribute
        .as_mut()
        .ok_or(InvariantViolation::NoCurrentAttribute { action })
}

/// Attribute actions only make sense while a start tag is in progress.
const fn require_start_tag(
    token: Option<&Token>,
    action: &'static str,
) -> Result<(), InvariantViolation> {
    match token {
        Some(Token::StartTag { .. }) => Ok(()),
        Some(other) => Err(wrong_token(action, "start tag", other.kind_name())),
        None => Err(InvariantViolation::NoCurrentToken { action }),
    }
}

const fn wrong_token(
    action: &'static str,
    expected: &'static str,
    found: &'static str,
) -> InvariantViolation {
    InvariantViolation::WrongToken {
        action,
        expected,
        found,
    }
}
