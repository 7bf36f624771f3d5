//! Individual validation rules.
//!
//! Every rule except [`required`] passes empty input (see
//! [`crate::input::is_empty`]). Format rules apply to each field of a
//! collection and pass only when all of them do.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::Outcome;
use crate::input::{Field, Input, is_empty};
use crate::pattern::{Pattern, PatternError};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "The Email field must be a valid email address";
pub const PASSWORD_MESSAGE: &str = "Your password must be at least 8 characters long and include at least one uppercase letter, one lowercase letter, one number, and one special character.";
pub const CONFIRMED_MESSAGE: &str = "The Confirm Password field confirmation does not match";
pub const PHONE_MESSAGE: &str =
    "The Phone Number field must be a valid number (e.g., 09123456789 or +639123456789)";
pub const INTEGER_MESSAGE: &str = "This field must be a number";
pub const PATTERN_MESSAGE: &str = "Your input doesn't match the expected format. Please try again.";
pub const ALPHA_MESSAGE: &str = "The Alpha field may only contain alphabetic characters";
pub const URL_MESSAGE: &str = "URL is invalid";
pub const ALPHA_DASH_MESSAGE: &str =
    "Your input must be alphanumeric and can only include dashes (-) and underscores (_).";
pub const IMAGE_MESSAGE: &str = "Image size should be less than 2 MB";

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%&*()";
/// Files must be strictly smaller than this many bytes.
pub const MAX_IMAGE_BYTES: u64 = 2_000_000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*)|(?:".+"))@(?:(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(?:(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex is valid")
});

/// Philippine mobile numbers: `09` or `+639`, then nine digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:09|\+639)[0-9]{9}$").expect("phone regex is valid"));

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("integer regex is valid"));

static ALPHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").expect("alpha regex is valid"));

// Prefix match: anything after the host's TLD is accepted.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,5}\.?").expect("url regex is valid")
});

static ALPHA_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]*$").expect("alpha-dash regex is valid"));

/// Pass empty input, otherwise require `check` on every field.
fn each_field(input: &Input, message: impl FnOnce() -> String, check: impl Fn(&Field) -> bool) -> Outcome {
    if is_empty(input) || input.all(check) { Ok(()) } else { Err(message()) }
}

fn each_text(input: &Input, message: &str, check: impl Fn(&str) -> bool) -> Outcome {
    each_field(input, || message.to_owned(), |field| check(&field.text()))
}

/// Fails absent input, `false`, blank text, and collections with no filled
/// field.
pub fn required(input: &Input) -> Outcome {
    let filled = match input {
        Input::Single(field) => field.is_filled(),
        Input::Collection(fields) => fields.iter().any(Field::is_filled),
    };
    if filled { Ok(()) } else { Err(REQUIRED_MESSAGE.to_owned()) }
}

pub fn email(input: &Input) -> Outcome {
    each_text(input, EMAIL_MESSAGE, |text| EMAIL_RE.is_match(text))
}

/// At least eight characters with an uppercase letter, a lowercase letter,
/// a digit, and one of `!@#$%&*()`.
pub fn password(input: &Input) -> Outcome {
    each_text(input, PASSWORD_MESSAGE, is_strong_password)
}

/// Line terminators a password requirement may not span.
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Some single line meets every requirement.
fn is_strong_password(text: &str) -> bool {
    text.split(LINE_BREAKS).any(|line| {
        line.chars().count() >= PASSWORD_MIN_CHARS
            && line.chars().any(|c| c.is_ascii_uppercase())
            && line.chars().any(|c| c.is_ascii_lowercase())
            && line.chars().any(|c| c.is_ascii_digit())
            && line.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
    })
}

/// `input` must equal `target` exactly.
pub fn confirmed(input: &Input, target: &Input) -> Outcome {
    if is_empty(input) || input == target { Ok(()) } else { Err(CONFIRMED_MESSAGE.to_owned()) }
}

/// Inclusive numeric range.
pub fn between(input: &Input, min: f64, max: f64) -> Outcome {
    each_field(
        input,
        || format!("Enter number between {min} and {max}"),
        |field| {
            let n = field.number();
            min <= n && n <= max
        },
    )
}

pub fn phone(input: &Input) -> Outcome {
    each_text(input, PHONE_MESSAGE, |text| PHONE_RE.is_match(text))
}

pub fn integer(input: &Input) -> Outcome {
    each_text(input, INTEGER_MESSAGE, |text| INTEGER_RE.is_match(text))
}

pub fn matches(input: &Input, pattern: &Pattern) -> Outcome {
    each_text(input, PATTERN_MESSAGE, |text| pattern.is_match(text))
}

/// Compile `pattern` and apply [`matches`]. The pattern is compiled even for
/// empty input so a malformed one is reported rather than skipped.
pub fn matches_str(input: &Input, pattern: &str) -> Result<Outcome, PatternError> {
    let pattern = Pattern::new(pattern)?;
    Ok(matches(input, &pattern))
}

/// ASCII letters only.
pub fn alpha(input: &Input) -> Outcome {
    each_text(input, ALPHA_MESSAGE, |text| ALPHA_RE.is_match(text))
}

pub fn url(input: &Input) -> Outcome {
    each_text(input, URL_MESSAGE, |text| URL_RE.is_match(text))
}

/// At least `length` characters (Unicode scalar values).
pub fn min_length(input: &Input, length: usize) -> Outcome {
    each_field(
        input,
        || format!("The Min Character field must be at least {length} characters"),
        |field| field.text().chars().count() >= length,
    )
}

/// ASCII letters, digits, `-` and `_`.
pub fn alpha_dash(input: &Input) -> Outcome {
    each_text(input, ALPHA_DASH_MESSAGE, |text| ALPHA_DASH_RE.is_match(text))
}

/// Every picked file must be under [`MAX_IMAGE_BYTES`]. Non-file fields are
/// not this rule's concern.
pub fn image_size(input: &Input) -> Outcome {
    each_field(
        input,
        || IMAGE_MESSAGE.to_owned(),
        |field| match field {
            Field::File(file) => file.size < MAX_IMAGE_BYTES,
            _ => true,
        },
    )
}
