//! Bank-wide transaction ledger for the manager's own bank.

use leptos::prelude::*;
use models::{ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;

/// Bank manager page showing every transaction at this manager's bank.
/// The bank id comes from the session minted at login.
#[component]
pub fn BankTransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rows = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Bank).cloned() else {
            rows.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(rows.get_untracked(), RemoteData::Idle) {
            return;
        }
        let Some(bank_id) = active.bank_id else {
            rows.set(RemoteData::Errored("No bank is linked to this session. Please log in again.".to_owned()));
            return;
        };
        rows.set(RemoteData::Loading);
        crate::net::spawn(async move {
            rows.set(RemoteData::from_result(crate::net::api::fetch_bank_transactions(&active, bank_id).await));
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Bank transactions"</h1>
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
