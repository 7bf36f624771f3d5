//! Entry form: one transaction line checked with the rule set on submit.
//!
//! DESIGN
//! ======
//! Validation is a pure function over the draft so it can be tested without
//! a reactive runtime. The page only copies per-field messages into signals.

#[cfg(test)]
#[path = "input_form_test.rs"]
mod input_form_test;

use leptos::prelude::*;
use rules::{Field, Input, Rule, validate};

use crate::components::form_field::FormField;

pub(crate) const MIN_AMOUNT: f64 = 1.0;
pub(crate) const MAX_AMOUNT: f64 = 1_000_000.0;

/// Raw field text as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct EntryDraft {
    pub reference: String,
    pub description: String,
    pub amount: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// A draft that passed every rule.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Entry {
    pub reference: String,
    pub description: String,
    pub amount: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EntryErrors {
    pub reference: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl EntryErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn check(text: &str, rules: &[Rule]) -> Option<String> {
    validate(&Input::from(text.trim()), rules).err()
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

pub(crate) fn validate_entry(draft: &EntryDraft) -> Result<Entry, EntryErrors> {
    let errors = EntryErrors {
        reference: check(&draft.reference, &[Rule::Required, Rule::AlphaDash]),
        description: check(&draft.description, &[Rule::Required]),
        amount: check(&draft.amount, &[Rule::Required, Rule::Between { min: MIN_AMOUNT, max: MAX_AMOUNT }]),
        email: check(&draft.email, &[Rule::Email]),
        phone: check(&draft.phone, &[Rule::Phone]),
        website: check(&draft.website, &[Rule::Url]),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Entry {
        reference: draft.reference.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        amount: Field::from(draft.amount.as_str()).number(),
        email: optional(&draft.email),
        phone: optional(&draft.phone),
        website: optional(&draft.website),
    })
}

#[component]
pub fn InputFormPage() -> impl IntoView {
    let reference = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());

    let reference_error = RwSignal::new(None::<String>);
    let description_error = RwSignal::new(None::<String>);
    let amount_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let phone_error = RwSignal::new(None::<String>);
    let website_error = RwSignal::new(None::<String>);

    let saved = RwSignal::new(Vec::<Entry>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = EntryDraft {
            reference: reference.get(),
            description: description.get(),
            amount: amount.get(),
            email: email.get(),
            phone: phone.get(),
            website: website.get(),
        };
        let errors = match validate_entry(&draft) {
            Ok(entry) => {
                saved.update(|entries| entries.push(entry));
                for field in [reference, description, amount, email, phone, website] {
                    field.set(String::new());
                }
                EntryErrors::default()
            }
            Err(errors) => errors,
        };
        reference_error.set(errors.reference);
        description_error.set(errors.description);
        amount_error.set(errors.amount);
        email_error.set(errors.email);
        phone_error.set(errors.phone);
        website_error.set(errors.website);
    };

    view! {
        <div class="page input-form-page">
            <h2>"Input Form"</h2>
            <form class="entry-form" on:submit=on_submit>
                <FormField label="Reference" value=reference error=reference_error placeholder="INV-0001"/>
                <FormField label="Description" value=description error=description_error/>
                <FormField label="Amount" value=amount error=amount_error input_type="number"/>
                <FormField label="Email" value=email error=email_error input_type="email"/>
                <FormField label="Phone Number" value=phone error=phone_error placeholder="09123456789"/>
                <FormField label="Website" value=website error=website_error/>
                <button class="btn" type="submit">"Save"</button>
            </form>
            <ul class="entry-list">
                <For
                    each=move || saved.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, entry): (usize, Entry)| {
                        view! { <li>{entry.reference} " · " {entry.description} " · " {entry.amount}</li> }
                    }
                />
            </ul>
        </div>
    }
}
