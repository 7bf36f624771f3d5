//! Form field validation rules.
//!
//! Every rule is a pure function from an [`Input`] (plus parameters) to an
//! [`Outcome`]: `Ok(())` when valid, or the message to show under the field.
//! Empty input is valid for every rule except [`validators::required`], so
//! forms pair `required` with a format rule through [`validate`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`input`] | `Single` / `Collection` input model and emptiness helpers |
//! | [`validators`] | The individual rules and their messages |
//! | [`pattern`] | Caller-supplied regular expressions |
//! | [`rule`] | `Rule` enum and first-failure composition |

pub mod input;
pub mod pattern;
pub mod rule;
pub mod validators;

pub use input::{Field, FileMeta, Input, is_absent, is_empty, is_empty_collection};
pub use pattern::{Pattern, PatternError};
pub use rule::{Rule, validate};

/// `Ok(())` when valid, otherwise a human-readable message.
pub type Outcome = Result<(), String>;
