//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Pages are picked by route name from the gate's route table rather than
//! by a static router tree, because the login path comes from configuration.
//! `RouteGuard` redirects; `RouteOutlet` renders only what the guard allows.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    calendar::CalendarPage, input_form::InputFormPage, login::LoginPage, remarks::RemarksPage,
    transactions::TransactionsPage,
};
use crate::state::session::{SessionState, build_lookup, load_state};
use crate::util::guard::{install_route_guard, visible_page};
use crate::util::storage::BrowserStore;

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = match load_state(BrowserStore, build_lookup) {
        Ok(state) => state,
        Err(err) => {
            return view! { <p class="app-error">{format!("Configuration error: {err}")}</p> }.into_any();
        }
    };
    provide_context(RwSignal::new(state));

    view! {
        <Title text="formdesk"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main class="app-main">
                <RouteOutlet/>
            </main>
        </Router>
    }
    .into_any()
}

#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    install_route_guard(session, location.pathname, use_navigate());
}

#[component]
fn RouteOutlet() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let page = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|state| visible_page(state, &path))
    });

    move || match page.get() {
        Some("Login") => view! { <LoginPage/> }.into_any(),
        Some("Transactions") => view! { <TransactionsPage/> }.into_any(),
        Some("InputForm") => view! { <InputFormPage/> }.into_any(),
        Some("Remarks") => view! { <RemarksPage/> }.into_any(),
        Some("Calendar") => view! { <CalendarPage/> }.into_any(),
        _ => view! { <p class="page page--transient">"Redirecting..."</p> }.into_any(),
    }
}
