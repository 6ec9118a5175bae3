use strum_macros::IntoStaticStr;

use super::state::TokenizerState;

/// A primitive instruction produced by the transition table and applied by
/// the interpreter in [`Snapshot::apply`](super::Snapshot::apply).
///
/// Character payloads are already case-folded where the table requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    /// Switch to another state.
    Transition(TokenizerState),
    /// Start a start tag whose name begins with the payload.
    CreateStartTag(char),
    /// Start an end tag whose name begins with the payload.
    CreateEndTag(char),
    /// Append to the current tag name.
    AppendTagName(char),
    /// Mark the current start tag as self-closing.
    SetSelfClosing,
    /// Commit the current tag (and its pending attribute) to the stream.
    EmitTagToken,
    /// Start a new JSON attribute whose name begins with the payload.
    CreateAttribute(char),
    /// Append to the current attribute name.
    AppendAttributeName(char),
    /// Append to the current attribute value.
    AppendAttributeValue(char),
    /// Promote the current attribute to a binding.
    ChangeAttrToBinding,
    /// Start an empty comment.
    CreateComment,
    /// Append to the current comment.
    AppendComment(char),
    /// Commit the current comment to the stream.
    EmitComment,
    /// Append to the scratch buffer.
    AppendBuffer(char),
    /// Empty the scratch buffer.
    ClearBuffer,
    /// Emit a character token.
    EmitCharacter(char),
}

impl Action {
    /// Kebab-case name of the action, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
