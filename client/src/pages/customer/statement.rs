//! Customer statement with date-range filtering and export.

use leptos::prelude::*;
use models::{ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::{export, statement};

/// Customer statement page. The full ledger is fetched once; the date
/// range narrows it entirely on the client, and the export writes exactly
/// what the filtered table shows.
#[component]
pub fn StatementPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ledger = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Customer).cloned() else {
            ledger.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(ledger.get_untracked(), RemoteData::Idle) {
            return;
        }
        let Some(number) = active.account_number.clone() else {
            ledger.set(RemoteData::Errored("No account is linked to this session. Please log in again.".to_owned()));
            return;
        };
        ledger.set(RemoteData::Loading);
        crate::net::spawn(async move {
            ledger.set(RemoteData::from_result(crate::net::api::fetch_transactions(&active, Some(&number)).await));
        });
    });

    let filtered = move || {
        ledger.get().data().map(|rows| {
            statement::filter_by_date_range(
                rows,
                statement::parse_bound(&from.get()),
                statement::parse_bound(&to.get()),
            )
        })
    };

    let on_export = move |_| {
        let Some(rows) = filtered() else {
            return;
        };
        let account_number = session
            .get_untracked()
            .ready()
            .and_then(|s| s.account_number.clone())
            .unwrap_or_default();
        let range = match (parse_label(&from.get_untracked()), parse_label(&to.get_untracked())) {
            (Some(from), Some(to)) => format!("{account_number}, {from} to {to}"),
            (Some(from), None) => format!("{account_number}, from {from}"),
            (None, Some(to)) => format!("{account_number}, up to {to}"),
            (None, None) => account_number.clone(),
        };
        let html = export::statement_html("Account Statement", &range, &rows);
        export::download_html(&format!("statement-{account_number}.html"), &html);
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Statement"</h1>
                <div class="page__filters">
                    <label class="page__filter">
                        "From"
                        <input
                            type="date"
                            prop:value=move || from.get()
                            on:input=move |ev| from.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="page__filter">
                        "To"
                        <input
                            type="date"
                            prop:value=move || to.get()
                            on:input=move |ev| to.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" on:click=on_export>
                        "Export"
                    </button>
                </div>
            </header>

            <Show when=move || ledger.get().is_loading()>
                <p>"Loading statement..."</p>
            </Show>
            <Show when=move || ledger.get().error().is_some()>
                <p class="page__error">
                    {move || ledger.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || filtered().map(|rows| view! { <TransactionTable rows=rows/> })}
        </div>
    }
}

/// Keep a bound in the export subtitle only when it is a real date.
fn parse_label(raw: &str) -> Option<String> {
    statement::parse_bound(raw).map(|_| raw.trim().to_owned())
}
