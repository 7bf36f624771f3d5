//! Landing page for signed-in users.

use leptos::prelude::*;

use crate::state::session::{SessionState, display_name};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || session.with(display_name).map(|name| format!("Welcome, {name}"));

    view! {
        <div class="page transactions-page">
            <h2>"Transactions"</h2>
            <p class="page__subtitle">{greeting}</p>
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>"Reference"</th>
                        <th>"Description"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td colspan="3" class="transactions-table__empty">"No transactions yet."</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
