//! Named rules and first-failure composition.
//!
//! A form field carries a list of rules; the first one that fails supplies
//! the message shown under the field.

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;

use crate::Outcome;
use crate::input::Input;
use crate::pattern::Pattern;
use crate::validators;

#[derive(Clone, Debug)]
pub enum Rule {
    Required,
    Email,
    Password,
    /// Must equal the given value, typically the password field.
    Confirmed(Input),
    Between { min: f64, max: f64 },
    Phone,
    Integer,
    Matches(Pattern),
    Alpha,
    Url,
    MinLength(usize),
    AlphaDash,
    ImageSize,
}

impl Rule {
    pub fn check(&self, input: &Input) -> Outcome {
        match self {
            Self::Required => validators::required(input),
            Self::Email => validators::email(input),
            Self::Password => validators::password(input),
            Self::Confirmed(target) => validators::confirmed(input, target),
            Self::Between { min, max } => validators::between(input, *min, *max),
            Self::Phone => validators::phone(input),
            Self::Integer => validators::integer(input),
            Self::Matches(pattern) => validators::matches(input, pattern),
            Self::Alpha => validators::alpha(input),
            Self::Url => validators::url(input),
            Self::MinLength(length) => validators::min_length(input, *length),
            Self::AlphaDash => validators::alpha_dash(input),
            Self::ImageSize => validators::image_size(input),
        }
    }
}

/// Run `rules` in order and return the first failure.
pub fn validate(input: &Input, rules: &[Rule]) -> Outcome {
    rules.iter().try_for_each(|rule| rule.check(input))
}
