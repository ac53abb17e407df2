//! Field predicates.
//!
//! Only the presence predicates (`NotNull`, `NotBlank`, `NotEmpty`) reject a
//! null or missing value. Every other predicate treats absence as valid so
//! that presence and shape can be constrained independently.

use std::borrow::Cow;

use serde_json::Value;
use validator::ValidateLength;

use super::emoji;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Value must be present and non-null.
    NotNull,
    /// String must contain at least one non-whitespace character.
    NotBlank,
    /// String or collection must have at least one element.
    NotEmpty,
    /// Length of a string (in scalar values) or collection must lie within
    /// the inclusive bounds.
    Size { min: Option<u64>, max: Option<u64> },
    /// String must not contain emoji.
    NoEmoji,
    /// String must be one of the listed values.
    OneOf(&'static [&'static str]),
}

impl Predicate {
    pub fn max_len(max: u64) -> Self {
        Predicate::Size {
            min: None,
            max: Some(max),
        }
    }

    pub fn min_len(min: u64) -> Self {
        Predicate::Size {
            min: Some(min),
            max: None,
        }
    }

    /// Short identifier reported alongside violations.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::NotNull => "not_null",
            Predicate::NotBlank => "not_blank",
            Predicate::NotEmpty => "not_empty",
            Predicate::Size { .. } => "size",
            Predicate::NoEmoji => "no_emoji",
            Predicate::OneOf(_) => "one_of",
        }
    }

    pub fn default_message(&self) -> Cow<'static, str> {
        match self {
            Predicate::NotNull => Cow::Borrowed("must not be null"),
            Predicate::NotBlank => Cow::Borrowed("must not be blank"),
            Predicate::NotEmpty => Cow::Borrowed("must not be empty"),
            Predicate::Size {
                min: Some(min),
                max: Some(max),
            } => Cow::Owned(format!("size must be between {min} and {max}")),
            Predicate::Size {
                min: Some(min),
                max: None,
            } => Cow::Owned(format!("size must be at least {min}")),
            Predicate::Size {
                min: None,
                max: Some(max),
            } => Cow::Owned(format!("size must be at most {max}")),
            Predicate::Size {
                min: None,
                max: None,
            } => Cow::Borrowed("size is unconstrained"),
            Predicate::NoEmoji => Cow::Borrowed("Emoji is not allowed"),
            Predicate::OneOf(values) => {
                Cow::Owned(format!("must be one of: {}", values.join(", ")))
            }
        }
    }

    /// Evaluate against a field value; `None` means the field is absent.
    pub fn test(&self, value: Option<&Value>) -> bool {
        let value = match value {
            None | Some(Value::Null) => return !self.requires_presence(),
            Some(v) => v,
        };

        match self {
            Predicate::NotNull => true,
            Predicate::NotBlank => value.as_str().is_some_and(|s| !s.trim().is_empty()),
            Predicate::NotEmpty => match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(map) => !map.is_empty(),
                _ => true,
            },
            Predicate::Size { min, max } => match value {
                Value::String(s) => s.validate_length(*min, *max, None),
                Value::Array(items) => items.validate_length(*min, *max, None),
                _ => true,
            },
            Predicate::NoEmoji => value.as_str().map_or(true, emoji::is_emoji_free),
            Predicate::OneOf(values) => value
                .as_str()
                .is_some_and(|s| values.iter().any(|v| *v == s)),
        }
    }

    fn requires_presence(&self) -> bool {
        matches!(
            self,
            Predicate::NotNull | Predicate::NotBlank | Predicate::NotEmpty
        )
    }
}
