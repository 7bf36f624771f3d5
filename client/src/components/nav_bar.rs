//! Top bar with the page links, the signed-in user, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hidden while nobody is signed in. Logout is an ordinary link to the
//! logout route so the guard performs it like any other navigation.

use gate::routes::{CALENDAR_PATH, INPUT_FORM_PATH, LOGOUT_PATH, REMARKS_PATH, TRANSACTIONS_PATH};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionState, display_name};

const LINKS: [(&str, &str); 4] = [
    (TRANSACTIONS_PATH, "Transactions"),
    (INPUT_FORM_PATH, "Input Form"),
    (REMARKS_PATH, "Remarks"),
    (CALENDAR_PATH, "Calendar"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;

    let user = move || session.with(display_name);

    view! {
        <Show when=move || user().is_some()>
            <nav class="toolbar">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=href
                                class="toolbar__link"
                                class:toolbar__link--active=move || pathname.get() == href
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{move || user().unwrap_or_default()}</span>
                <a href=LOGOUT_PATH class="btn toolbar__logout" title="Logout">
                    "Logout"
                </a>
            </nav>
        </Show>
    }
}
