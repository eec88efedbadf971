//! Admin transaction browser with account-number search.

use leptos::prelude::*;
use models::{ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;

/// Admin page showing transactions across the system, optionally narrowed
/// to one account number.
#[component]
pub fn AdminTransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rows = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);
    let query = RwSignal::new(String::new());

    let fetch = move |account_number: Option<String>| {
        let Some(active) = session.get_untracked().with_role(Role::Admin).cloned() else {
            rows.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        rows.set(RemoteData::Loading);
        crate::net::spawn(async move {
            rows.set(RemoteData::from_result(
                crate::net::api::fetch_transactions(&active, account_number.as_deref()).await,
            ));
        });
    };

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if state.with_role(Role::Admin).is_none() {
            rows.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        }
        if matches!(rows.get_untracked(), RemoteData::Idle) {
            fetch(None);
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = query.get().trim().to_owned();
        fetch(if trimmed.is_empty() { None } else { Some(trimmed) });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Transactions"</h1>
                <form class="page__search" on:submit=on_search>
                    <input
                        class="page__search-input"
                        type="text"
                        placeholder="Account number"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
            </header>

            <Show when=move || rows.get().is_loading()>
                <p>"Loading transactions..."</p>
            </Show>
            <Show when=move || rows.get().error().is_some()>
                <p class="page__error">
                    {move || rows.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                rows.get()
                    .data()
                    .map(|list| view! { <TransactionTable rows=list.clone()/> })
            }}
        </div>
    }
}
