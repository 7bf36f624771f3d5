//! Remarks editor with optional image attachments.

#[cfg(test)]
#[path = "remarks_test.rs"]
mod remarks_test;

use leptos::prelude::*;
use rules::{Field, FileMeta, Input, Rule, validate};

pub(crate) const REMARKS_MIN_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Remark {
    pub text: String,
    pub attachments: Vec<FileMeta>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RemarkErrors {
    pub text: Option<String>,
    pub attachments: Option<String>,
}

pub(crate) fn validate_remark(text: &str, attachments: &[FileMeta]) -> Result<Remark, RemarkErrors> {
    let text = text.trim();
    let files: Input = attachments.iter().cloned().map(Field::File).collect();
    let errors = RemarkErrors {
        text: validate(&Input::from(text), &[Rule::Required, Rule::MinLength(REMARKS_MIN_CHARS)]).err(),
        attachments: validate(&files, &[Rule::ImageSize]).err(),
    };
    if errors == RemarkErrors::default() {
        Ok(Remark { text: text.to_owned(), attachments: attachments.to_vec() })
    } else {
        Err(errors)
    }
}

/// Files picked for the next remark.
///
/// The browser keeps showing a file input's selection after the page clears
/// its own copy, so `clear` also bumps `picker` and the page renders a fresh
/// input keyed on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Attachments {
    files: Vec<FileMeta>,
    picker: u32,
}

impl Attachments {
    pub fn files(&self) -> &[FileMeta] {
        &self.files
    }

    pub fn picker(&self) -> u32 {
        self.picker
    }

    pub fn pick(&mut self, files: Vec<FileMeta>) {
        self.files = files;
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.picker = self.picker.wrapping_add(1);
    }
}

/// Name and size of every file picked in a file input.
#[cfg(feature = "csr")]
fn picked_files(ev: &leptos::ev::Event) -> Vec<FileMeta> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            FileMeta { name: file.name(), size }
        })
        .collect()
}

#[cfg(not(feature = "csr"))]
fn picked_files(_ev: &leptos::ev::Event) -> Vec<FileMeta> {
    Vec::new()
}

#[component]
pub fn RemarksPage() -> impl IntoView {
    let text = RwSignal::new(String::new());
    let attachments = RwSignal::new(Attachments::default());
    let picker = Memo::new(move |_| attachments.with(Attachments::picker));
    let text_error = RwSignal::new(None::<String>);
    let attachments_error = RwSignal::new(None::<String>);
    let remarks = RwSignal::new(Vec::<Remark>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match attachments.with(|picked| validate_remark(&text.get(), picked.files())) {
            Ok(remark) => {
                remarks.update(|list| list.push(remark));
                text.set(String::new());
                attachments.update(Attachments::clear);
                text_error.set(None);
                attachments_error.set(None);
            }
            Err(errors) => {
                text_error.set(errors.text);
                attachments_error.set(errors.attachments);
            }
        }
    };

    view! {
        <div class="page remarks-page">
            <h2>"Remarks"</h2>
            <form class="remarks-form" on:submit=on_submit>
                <textarea
                    class="remarks-form__text"
                    rows="5"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        text.set(event_target_value(&ev));
                        text_error.set(None);
                    }
                ></textarea>
                <Show when=move || text_error.get().is_some()>
                    <span class="form-field__error">{move || text_error.get().unwrap_or_default()}</span>
                </Show>
                {move || {
                    picker.track();
                    view! {
                        <input
                            class="remarks-form__files"
                            type="file"
                            accept="image/*"
                            multiple=true
                            on:change=move |ev| {
                                attachments.update(|picked| picked.pick(picked_files(&ev)));
                                attachments_error.set(None);
                            }
                        />
                    }
                }}
                <Show when=move || attachments_error.get().is_some()>
                    <span class="form-field__error">{move || attachments_error.get().unwrap_or_default()}</span>
                </Show>
                <button class="btn" type="submit">"Add Remark"</button>
            </form>
            <ul class="remarks-list">
                <For
                    each=move || remarks.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, remark): (usize, Remark)| {
                        let count = remark.attachments.len();
                        view! {
                            <li>
                                {remark.text}
                                <Show when=move || count != 0>
                                    <span class="remarks-list__files">{format!(" ({count} attached)")}</span>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
