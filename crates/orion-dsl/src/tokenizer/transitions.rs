//! The state-transition table.
//!
//! [`actions_for`] maps the current state and one input character to the
//! ordered list of [`Action`]s the interpreter applies. The table never
//! mutates anything. It looks at the snapshot in two places only: the
//! attribute value so far, to decide whether a `]` or `}` closes an array or
//! object value, and the variant of the current token, to reject attribute
//! and self-closing syntax on end tags.

use super::action::Action;
use super::error::UnexpectedCharacter;
use super::helpers::{
    closes_json_value, is_ascii_letter, is_digit, is_forbidden_in_name, is_whitespace,
};
use super::state::TokenizerState;
use super::token::Token;
use super::world::Snapshot;

use Action::{
    AppendAttributeName, AppendAttributeValue, AppendBuffer, AppendComment, AppendTagName,
    ChangeAttrToBinding, ClearBuffer, CreateAttribute, CreateComment, CreateEndTag,
    CreateStartTag, EmitCharacter, EmitComment, EmitTagToken, SetSelfClosing, Transition,
};
use TokenizerState as S;

type Actions = Result<Vec<Action>, UnexpectedCharacter>;

/// Actions for consuming `c` in the snapshot's current state.
///
/// # Errors
///
/// Returns [`UnexpectedCharacter`] when `c` has no rule in the current state.
pub fn actions_for(c: char, snapshot: &Snapshot) -> Actions {
    match snapshot.state() {
        S::Data => Ok(handle_data(c)),
        S::TagOpen => handle_tag_open(c),
        S::EndTagOpen => handle_end_tag_open(c),
        S::TagName => handle_tag_name(c, snapshot),
        S::SelfClosingStartTag => handle_self_closing_start_tag(c),
        S::BeforeAttributeName => handle_before_attribute_name(c, snapshot),
        S::AttributeName => handle_attribute_name(c),
        S::AfterAttributeName => handle_after_attribute_name(c),
        S::BeforeAttributeValue => handle_before_attribute_value(c),
        S::AttributeValueString => Ok(handle_attribute_value_string(c)),
        S::AttributeValueNumber => handle_attribute_value_number(c),
        S::AttributeValueArray => Ok(handle_json_container(c, ']', snapshot)),
        S::AttributeValueObjectOrBinding => Ok(handle_attribute_value_object_or_binding(c)),
        S::AttributeValueObject => Ok(handle_json_container(c, '}', snapshot)),
        S::AttributeValueBinding => Ok(handle_attribute_value_binding(c)),
        S::AfterAttributeValue => handle_after_attribute_value(c),
        S::MarkupDeclarationOpen => handle_markup_declaration_open(c, snapshot),
        S::CommentStart => handle_comment_start(c),
        S::CommentStartDash => handle_comment_start_dash(c),
        S::Comment => Ok(handle_comment(c)),
        S::CommentEndDash => Ok(handle_comment_end_dash(c)),
        S::CommentEnd => Ok(handle_comment_end(c)),
    }
}

const fn unexpected(character: char, state: TokenizerState) -> UnexpectedCharacter {
    UnexpectedCharacter { character, state }
}

const fn in_end_tag(snapshot: &Snapshot) -> bool {
    matches!(snapshot.current_token(), Some(Token::EndTag { .. }))
}

/// `>` after a tag name, attribute or value: commit the tag.
fn emit_tag() -> Vec<Action> {
    vec![EmitTagToken, Transition(S::Data)]
}

fn handle_data(c: char) -> Vec<Action> {
    match c {
        '<' => vec![Transition(S::TagOpen)],
        _ => vec![EmitCharacter(c)],
    }
}

fn handle_tag_open(c: char) -> Actions {
    match c {
        '/' => Ok(vec![Transition(S::EndTagOpen)]),
        '!' => Ok(vec![Transition(S::MarkupDeclarationOpen)]),
        c if is_ascii_letter(c) => Ok(vec![
            CreateStartTag(c.to_ascii_lowercase()),
            Transition(S::TagName),
        ]),
        _ => Err(unexpected(c, S::TagOpen)),
    }
}

fn handle_end_tag_open(c: char) -> Actions {
    if is_ascii_letter(c) {
        Ok(vec![
            CreateEndTag(c.to_ascii_lowercase()),
            Transition(S::TagName),
        ])
    } else {
        Err(unexpected(c, S::EndTagOpen))
    }
}

fn handle_tag_name(c: char, snapshot: &Snapshot) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(vec![Transition(S::BeforeAttributeName)]),
        // End tags cannot be self-closing.
        '/' if in_end_tag(snapshot) => Err(unexpected(c, S::TagName)),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        '>' => Ok(vec![Transition(S::Data), EmitTagToken]),
        c if is_forbidden_in_name(c) => Err(unexpected(c, S::TagName)),
        _ => Ok(vec![AppendTagName(c.to_ascii_lowercase())]),
    }
}

fn handle_self_closing_start_tag(c: char) -> Actions {
    match c {
        '>' => Ok(vec![SetSelfClosing, Transition(S::Data), EmitTagToken]),
        _ => Err(unexpected(c, S::SelfClosingStartTag)),
    }
}

fn handle_before_attribute_name(c: char, snapshot: &Snapshot) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(Vec::new()),
        '>' => Ok(emit_tag()),
        // End tags carry neither attributes nor a self-closing flag.
        _ if in_end_tag(snapshot) => Err(unexpected(c, S::BeforeAttributeName)),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        c if is_forbidden_in_name(c) => Err(unexpected(c, S::BeforeAttributeName)),
        _ => Ok(vec![
            CreateAttribute(c.to_ascii_lowercase()),
            Transition(S::AttributeName),
        ]),
    }
}

fn handle_attribute_name(c: char) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(vec![Transition(S::AfterAttributeName)]),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        '=' => Ok(vec![Transition(S::BeforeAttributeValue)]),
        '>' => Ok(emit_tag()),
        '\'' | '"' | '<' => Err(unexpected(c, S::AttributeName)),
        _ => Ok(vec![AppendAttributeName(c.to_ascii_lowercase())]),
    }
}

fn handle_after_attribute_name(c: char) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(Vec::new()),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        '=' => Ok(vec![Transition(S::BeforeAttributeValue)]),
        '>' => Ok(emit_tag()),
        '\'' | '"' | '<' => Err(unexpected(c, S::AfterAttributeName)),
        _ => Ok(vec![
            CreateAttribute(c.to_ascii_lowercase()),
            Transition(S::AttributeName),
        ]),
    }
}

fn handle_before_attribute_value(c: char) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(Vec::new()),
        '"' => Ok(vec![AppendAttributeValue(c), Transition(S::AttributeValueString)]),
        c if is_digit(c) => Ok(vec![AppendAttributeValue(c), Transition(S::AttributeValueNumber)]),
        '[' => Ok(vec![AppendAttributeValue(c), Transition(S::AttributeValueArray)]),
        // Nothing is appended until the next character tells object from binding.
        '{' => Ok(vec![Transition(S::AttributeValueObjectOrBinding)]),
        _ => Err(unexpected(c, S::BeforeAttributeValue)),
    }
}

fn handle_attribute_value_string(c: char) -> Vec<Action> {
    match c {
        '"' => vec![AppendAttributeValue(c), Transition(S::AfterAttributeValue)],
        _ => vec![AppendAttributeValue(c)],
    }
}

fn handle_attribute_value_number(c: char) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(vec![Transition(S::BeforeAttributeName)]),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        '>' => Ok(emit_tag()),
        c if is_digit(c) => Ok(vec![AppendAttributeValue(c)]),
        _ => Err(unexpected(c, S::AttributeValueNumber)),
    }
}

/// Array and object values. A candidate closer ends the value only if the
/// value with the closer appended parses as JSON; otherwise it belongs to a
/// nested structure or a string and is kept as content.
fn handle_json_container(c: char, closer: char, snapshot: &Snapshot) -> Vec<Action> {
    let value = snapshot.current_attribute().map_or("", |attr| attr.value.as_str());
    if c == closer && closes_json_value(value, closer) {
        vec![AppendAttributeValue(c), Transition(S::AfterAttributeValue)]
    } else {
        vec![AppendAttributeValue(c)]
    }
}

fn handle_attribute_value_object_or_binding(c: char) -> Vec<Action> {
    match c {
        c if is_whitespace(c) => Vec::new(),
        // A quoted key: this is a JSON object.
        '"' => vec![
            AppendAttributeValue('{'),
            AppendAttributeValue(c),
            Transition(S::AttributeValueObject),
        ],
        // `{}` is the empty object.
        '}' => vec![
            AppendAttributeValue('{'),
            AppendAttributeValue(c),
            Transition(S::AfterAttributeValue),
        ],
        _ => vec![
            AppendAttributeValue('{'),
            AppendAttributeValue(c),
            ChangeAttrToBinding,
            Transition(S::AttributeValueBinding),
        ],
    }
}

fn handle_attribute_value_binding(c: char) -> Vec<Action> {
    match c {
        '}' => vec![AppendAttributeValue(c), Transition(S::AfterAttributeValue)],
        _ => vec![AppendAttributeValue(c)],
    }
}

fn handle_after_attribute_value(c: char) -> Actions {
    match c {
        c if is_whitespace(c) => Ok(vec![Transition(S::BeforeAttributeName)]),
        '/' => Ok(vec![Transition(S::SelfClosingStartTag)]),
        '>' => Ok(emit_tag()),
        _ => Err(unexpected(c, S::AfterAttributeValue)),
    }
}

fn handle_markup_declaration_open(c: char, snapshot: &Snapshot) -> Actions {
    match c {
        '-' if snapshot.buffer() == "-" => Ok(vec![
            ClearBuffer,
            CreateComment,
            Transition(S::CommentStart),
        ]),
        '-' => Ok(vec![AppendBuffer(c)]),
        _ => Err(unexpected(c, S::MarkupDeclarationOpen)),
    }
}

fn handle_comment_start(c: char) -> Actions {
    match c {
        '-' => Ok(vec![Transition(S::CommentStartDash)]),
        '>' => Err(unexpected(c, S::CommentStart)),
        _ => Ok(vec![Transition(S::Comment), AppendComment(c)]),
    }
}

fn handle_comment_start_dash(c: char) -> Actions {
    match c {
        '-' => Ok(vec![Transition(S::CommentEnd)]),
        '>' => Err(unexpected(c, S::CommentStartDash)),
        _ => Ok(vec![
            AppendComment('-'),
            AppendComment(c),
            Transition(S::Comment),
        ]),
    }
}

fn handle_comment(c: char) -> Vec<Action> {
    match c {
        '-' => vec![Transition(S::CommentEndDash)],
        _ => vec![AppendComment(c)],
    }
}

fn handle_comment_end_dash(c: char) -> Vec<Action> {
    match c {
        '-' => vec![Transition(S::CommentEnd)],
        _ => vec![AppendComment('-'), AppendComment(c), Transition(S::Comment)],
    }
}

/// After `--`. Anything but `>` was not a close after all: the dashes go
/// back into the comment.
fn handle_comment_end(c: char) -> Vec<Action> {
    match c {
        '>' => vec![EmitComment, Transition(S::Data)],
        '-' => vec![AppendComment(c)],
        _ => vec![
            AppendComment('-'),
            AppendComment('-'),
            AppendComment(c),
            Transition(S::Comment),
        ],
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn at(state: TokenizerState) -> Snapshot {
        Snapshot {
            state,
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_data_state() {
        assert_eq!(actions_for('<', &at(S::Data)), Ok(vec![Transition(S::TagOpen)]));
        assert_eq!(actions_for('x', &at(S::Data)), Ok(vec![EmitCharacter('x')]));
        assert_eq!(actions_for('>', &at(S::Data)), Ok(vec![EmitCharacter('>')]));
    }

    #[test]
    fn test_tag_open_folds_case() {
        assert_eq!(
            actions_for('D', &at(S::TagOpen)),
            Ok(vec![CreateStartTag('d'), Transition(S::TagName)])
        );
        assert_eq!(
            actions_for(' ', &at(S::TagOpen)),
            Err(unexpected(' ', S::TagOpen))
        );
    }

    #[test]
    fn test_forbidden_name_characters() {
        for c in ['"', '\'', '<', '='] {
            assert_eq!(
                actions_for(c, &at(S::BeforeAttributeName)),
                Err(unexpected(c, S::BeforeAttributeName))
            );
        }
        for c in ['"', '\'', '<'] {
            assert!(actions_for(c, &at(S::AttributeName)).is_err());
            assert!(actions_for(c, &at(S::AfterAttributeName)).is_err());
        }
    }

    #[test]
    fn test_object_or_binding_lookahead() {
        let state = S::AttributeValueObjectOrBinding;
        assert_eq!(
            actions_for('"', &at(state)),
            Ok(vec![
                AppendAttributeValue('{'),
                AppendAttributeValue('"'),
                Transition(S::AttributeValueObject),
            ])
        );
        assert_eq!(
            actions_for('x', &at(state)),
            Ok(vec![
                AppendAttributeValue('{'),
                AppendAttributeValue('x'),
                ChangeAttrToBinding,
                Transition(S::AttributeValueBinding),
            ])
        );
        assert_eq!(actions_for(' ', &at(state)), Ok(Vec::new()));
    }

    #[test]
    fn test_speculative_close_reads_current_value() {
        let mut snapshot = at(S::AttributeValueArray);
        snapshot.current_token = Some(Token::start_tag("a", Vec::new(), false));
        snapshot.current_attribute = Some(crate::Attribute::json("data", "[[1"));
        assert_eq!(actions_for(']', &snapshot), Ok(vec![AppendAttributeValue(']')]));

        snapshot.current_attribute = Some(crate::Attribute::json("data", "[[1]"));
        assert_eq!(
            actions_for(']', &snapshot),
            Ok(vec![AppendAttributeValue(']'), Transition(S::AfterAttributeValue)])
        );
    }

    #[test]
    fn test_markup_declaration_needs_two_dashes() {
        assert_eq!(
            actions_for('-', &at(S::MarkupDeclarationOpen)),
            Ok(vec![AppendBuffer('-')])
        );
        let mut snapshot = at(S::MarkupDeclarationOpen);
        snapshot.buffer.push('-');
        assert_eq!(
            actions_for('-', &snapshot),
            Ok(vec![ClearBuffer, CreateComment, Transition(S::CommentStart)])
        );
        assert!(actions_for('D', &snapshot).is_err());
    }

    #[test]
    fn test_end_tag_rejects_attributes() {
        let mut snapshot = at(S::BeforeAttributeName);
        snapshot.current_token = Some(Token::end_tag("a"));
        assert!(actions_for('x', &snapshot).is_err());
        assert!(actions_for('/', &snapshot).is_err());
        assert_eq!(
            actions_for('>', &snapshot),
            Ok(vec![EmitTagToken, Transition(S::Data)])
        );
    }

    #[test]
    fn test_every_state_handles_any_character() {
        for state in TokenizerState::iter() {
            for c in ['>', '<', '-', '"', '{', '}', '[', ']', 'a', '1', ' ', '/', '=', '\''] {
                match actions_for(c, &at(state)) {
                    Ok(actions) => {
                        // Only whitespace between tag parts may be skipped.
                        assert!(
                            !actions.is_empty() || c == ' ',
                            "{state} dropped {c:?} without an action"
                        );
                    }
                    Err(error) => {
                        assert_ne!(state, S::Data, "data state rejected {c:?}");
                        assert_eq!(error, unexpected(c, state));
                    }
                }
            }
        }
    }
}
