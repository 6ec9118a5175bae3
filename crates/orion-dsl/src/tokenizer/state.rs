use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The tokenizer state machine. The initial state is [`TokenizerState::Data`].
///
/// States render in kebab case (`attribute-value-object-or-binding`) in
/// diagnostics and serialized snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TokenizerState {
    /// Text content; every character except `<` becomes a character token.
    #[default]
    Data,
    /// After `<`.
    TagOpen,
    /// After `</`.
    EndTagOpen,
    /// Inside a start or end tag name.
    TagName,
    /// After `/` inside a start tag, expecting `>`.
    SelfClosingStartTag,
    /// Between a tag name or attribute and the next attribute.
    BeforeAttributeName,
    /// Inside an attribute name.
    AttributeName,
    /// Whitespace after an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// After `=`, deciding the value type from its first character.
    BeforeAttributeValue,
    /// Inside a `"`-delimited value.
    AttributeValueString,
    /// Inside a run of digits.
    AttributeValueNumber,
    /// Inside a `[`-delimited JSON array.
    AttributeValueArray,
    /// After `{`, one character away from knowing object from binding.
    AttributeValueObjectOrBinding,
    /// Inside a `{`-delimited JSON object.
    AttributeValueObject,
    /// Inside a `{`-delimited binding expression.
    AttributeValueBinding,
    /// After a complete value.
    AfterAttributeValue,
    /// After `<!`, counting the dashes of `<!--`.
    MarkupDeclarationOpen,
    /// After `<!--`.
    CommentStart,
    /// After `<!---`.
    CommentStartDash,
    /// Inside comment text.
    Comment,
    /// After one `-` inside a comment.
    CommentEndDash,
    /// After `--` inside a comment, expecting `>`.
    CommentEnd,
}

impl TokenizerState {
    /// Returns true for states that can only be left by consuming more of
    /// an unfinished construct (a tag, attribute or comment).
    #[must_use]
    pub const fn is_inside_construct(self) -> bool {
        !matches!(self, Self::Data)
    }
}
