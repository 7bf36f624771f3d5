//! Field input model.
//!
//! DESIGN
//! ======
//! A form control yields one value or a list of values (multi-select, tag
//! inputs, file pickers). `Input` makes that distinction explicit so each
//! rule states what it does with a collection instead of sniffing the value.
//! Both types deserialize straight from the JSON a control produces.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Metadata for a picked file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

/// One scalar value from a form control.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    #[default]
    Absent,
    Flag(bool),
    Number(f64),
    Text(String),
    File(FileMeta),
}

impl Field {
    /// Text form used by format rules. Numbers print without a trailing
    /// `.0`; files contribute their name.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Flag(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
            Self::File(file) => Cow::Borrowed(&file.name),
        }
    }

    /// Numeric form used by range checks. Blank text is zero; anything that
    /// does not parse is NaN and fails every comparison.
    #[must_use]
    pub fn number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Flag(flag) => f64::from(u8::from(*flag)),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() { 0.0 } else { trimmed.parse().unwrap_or(f64::NAN) }
            }
            Self::Absent | Self::File(_) => f64::NAN,
        }
    }

    /// Whether this value satisfies a required field: present, not `false`,
    /// and not blank text.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Flag(flag) => *flag,
            Self::Number(_) | Self::File(_) => true,
            Self::Text(s) => !s.trim().is_empty(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.is_empty(),
            Self::Flag(_) | Self::Number(_) | Self::File(_) => false,
        }
    }
}

/// The value of one form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    // Listed first: `FileMeta` also accepts `[name, size]`, so any
    // two-element array would otherwise parse as one file.
    Collection(Vec<Field>),
    Single(Field),
}

impl Default for Input {
    fn default() -> Self {
        Self::Single(Field::Absent)
    }
}

impl Input {
    /// Fields in this input, one for `Single`.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Single(field) => std::slice::from_ref(field),
            Self::Collection(fields) => fields,
        }
    }

    /// True when every field passes `pred`.
    pub fn all(&self, pred: impl Fn(&Field) -> bool) -> bool {
        self.fields().iter().all(pred)
    }
}

/// Absent, empty text, or an empty collection. Whitespace is not empty.
#[must_use]
pub fn is_empty(input: &Input) -> bool {
    match input {
        Input::Single(field) => field.is_empty(),
        Input::Collection(fields) => fields.is_empty(),
    }
}

/// Absent only.
#[must_use]
pub fn is_absent(input: &Input) -> bool {
    matches!(input, Input::Single(Field::Absent))
}

#[must_use]
pub fn is_empty_collection(input: &Input) -> bool {
    matches!(input, Input::Collection(fields) if fields.is_empty())
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Field {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<FileMeta> for Field {
    fn from(value: FileMeta) -> Self {
        Self::File(value)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Field> for Input {
    fn from(value: Field) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Single(value.into())
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Single(value.into())
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Self::Single(value.into())
    }
}

impl From<Vec<Field>> for Input {
    fn from(value: Vec<Field>) -> Self {
        Self::Collection(value)
    }
}

impl<T: Into<Field>> FromIterator<T> for Input {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Collection(iter.into_iter().map(Into::into).collect())
    }
}
