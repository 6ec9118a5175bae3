use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// How a downstream consumer should interpret an attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    /// A literal: string, number, array or object, all valid JSON.
    #[default]
    Json,
    /// A brace-delimited expression, resolved downstream.
    Binding,
}

/// An attribute on a start tag token.
///
/// `value` holds the raw source text of the value, delimiters included:
/// `label="Save"` has the value `"Save"`, `onClick={go}` has `{go}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Literal or binding. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Lowercased attribute name.
    pub name: String,
    /// Raw value text.
    pub value: String,
}

impl Attribute {
    /// Create a literal attribute.
    #[must_use]
    pub fn json(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: AttributeKind::Json,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a binding attribute.
    #[must_use]
    pub fn binding(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: AttributeKind::Binding,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns true if the value is a binding expression.
    #[must_use]
    pub const fn is_binding(&self) -> bool {
        matches!(self.kind, AttributeKind::Binding)
    }
}

/// A token handed to the tree builder.
///
/// Serialized with a `type` discriminant (`start-tag`, `end-tag`, `comment`,
/// `character`, `eof`) and camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    /// `<name attr=value ...>` or `<name ... />`.
    #[serde(rename_all = "camelCase")]
    StartTag {
        /// Lowercased tag name.
        tag_name: String,
        /// Set by a trailing `/` before `>`.
        self_closing: bool,
        /// Attributes in source order, duplicates kept.
        attributes: Vec<Attribute>,
    },

    /// `</name>`.
    #[serde(rename_all = "camelCase")]
    EndTag {
        /// Lowercased tag name.
        tag_name: String,
    },

    /// `<!-- data -->`.
    Comment {
        /// Text between the delimiters.
        data: String,
    },

    /// One character of text content.
    Character {
        /// The character.
        data: char,
    },

    /// Marks the end of the stream. Only produced when requested through
    /// [`TokenizerOptions`](super::TokenizerOptions).
    #[serde(rename = "eof")]
    EndOfInput,
}

impl Token {
    /// Create a start tag token.
    #[must_use]
    pub fn start_tag(
        tag_name: impl Into<String>,
        attributes: Vec<Attribute>,
        self_closing: bool,
    ) -> Self {
        Self::StartTag {
            tag_name: tag_name.into(),
            self_closing,
            attributes,
        }
    }

    /// Create an end tag token.
    #[must_use]
    pub fn end_tag(tag_name: impl Into<String>) -> Self {
        Self::EndTag {
            tag_name: tag_name.into(),
        }
    }

    /// Create a comment token.
    #[must_use]
    pub fn comment(data: impl Into<String>) -> Self {
        Self::Comment { data: data.into() }
    }

    /// Create a character token.
    #[must_use]
    pub const fn character(data: char) -> Self {
        Self::Character { data }
    }

    /// Create an end-of-input token.
    #[must_use]
    pub const fn end_of_input() -> Self {
        Self::EndOfInput
    }

    /// Returns true if this is an end-of-input token.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Short human name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::StartTag { .. } => "start tag",
            Self::EndTag { .. } => "end tag",
            Self::Comment { .. } => "comment",
            Self::Character { .. } => "character",
            Self::EndOfInput => "end of input",
        }
    }

    /// The tag name of a start or end tag.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { tag_name, .. } | Self::EndTag { tag_name } => Some(tag_name),
            _ => None,
        }
    }

    /// Mutable tag name of a start or end tag.
    pub const fn tag_name_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::StartTag { tag_name, .. } | Self::EndTag { tag_name } => Some(tag_name),
            _ => None,
        }
    }

    /// Mutable attribute list. Only start tags carry attributes.
    pub const fn attributes_mut(&mut self) -> Option<&mut Vec<Attribute>> {
        match self {
            Self::StartTag { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Mutable comment text.
    pub const fn comment_data_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Comment { data } => Some(data),
            _ => None,
        }
    }

    /// Set the self-closing flag. Returns false if this is not a start tag.
    pub const fn set_self_closing(&mut self) -> bool {
        match self {
            Self::StartTag { self_closing, .. } => {
                *self_closing = true;
                true
            }
            _ => false,
        }
    }
}

/// `count` space character tokens.
#[must_use]
pub fn spaces(count: usize) -> Vec<Token> {
    vec![Token::character(' '); count]
}

/// One character token per character of `text`.
#[must_use]
pub fn word(text: &str) -> Vec<Token> {
    text.chars().map(Token::character).collect()
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                tag_name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{tag_name}")?;
                for attr in attributes {
                    write!(f, " {attr}")?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { tag_name } => write!(f, "</{tag_name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => {
                // Show whitespace characters explicitly
                match data {
                    '\n' => write!(f, "Character(\\n)"),
                    '\t' => write!(f, "Character(\\t)"),
                    ' ' => write!(f, "Character(SPACE)"),
                    c => write!(f, "Character({c})"),
                }
            }
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}
