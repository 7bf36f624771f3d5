//! Login page: username and password, checked only for presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no credential check behind this form. Signing in writes the
//! session flags through the shared context and moves on to the landing
//! route; the guard keeps signed-in users from coming back here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::Identity;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use rules::{Input, Rule, validate};

use crate::components::form_field::FormField;
use crate::state::session::{DEFAULT_ROLE, SessionState};
use crate::util::clock;

/// Per-field messages from [`validate_login_input`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Check both fields and return the trimmed username.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<String, LoginErrors> {
    let username = username.trim().to_owned();
    let errors = LoginErrors {
        username: validate(&Input::from(username.as_str()), &[Rule::Required]).err(),
        password: validate(&Input::from(password), &[Rule::Required]).err(),
    };
    if errors == LoginErrors::default() { Ok(username) } else { Err(errors) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_login_input(&username.get(), &password.get()) {
            Ok(valid) => valid,
            Err(errors) => {
                username_error.set(errors.username);
                password_error.set(errors.password);
                return;
            }
        };
        username_error.set(None);
        password_error.set(None);

        let identity = Identity::new(name, DEFAULT_ROLE, clock::now_ms());
        match session.try_update(|state| state.login(identity)) {
            Some(Ok(())) => {
                let landing = session.with_untracked(|state| state.config().landing_path.clone());
                navigate(&landing, NavigateOptions::default());
            }
            Some(Err(err)) => info.set(format!("Could not start session: {err}")),
            None => info.set("Session is unavailable.".to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"formdesk"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <FormField label="Username" value=username error=username_error/>
                    <FormField label="Password" value=password error=password_error input_type="password"/>
                    <button class="login-button" type="submit">"Sign In"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
