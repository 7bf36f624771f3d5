//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls, reading shared state
//! from Leptos context providers.

pub mod form_field;
pub mod nav_bar;
