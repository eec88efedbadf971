//! Customer's own account overview.

use leptos::prelude::*;
use models::{Account, ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Customer page showing the account detail and recent transactions. The
/// account number comes from the session minted at login.
#[component]
pub fn CustomerAccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let account = RwSignal::new(RemoteData::<Account>::Idle);
    let ledger = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Customer).cloned() else {
            account.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(account.get_untracked(), RemoteData::Idle) {
            return;
        }
        let Some(number) = active.account_number.clone() else {
            account.set(RemoteData::Errored("No account is linked to this session. Please log in again.".to_owned()));
            return;
        };
        account.set(RemoteData::Loading);
        ledger.set(RemoteData::Loading);
        crate::net::spawn(async move {
            account.set(RemoteData::from_result(crate::net::api::fetch_account(&active, &number).await));
            ledger.set(RemoteData::from_result(crate::net::api::fetch_transactions(&active, Some(&number)).await));
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"My account"</h1>
                <a class="btn" href="/customer/statement">
                    "Statement"
                </a>
            </header>

            <Show when=move || account.get().is_loading()>
                <p>"Loading account..."</p>
            </Show>
            <Show when=move || account.get().error().is_some()>
                <p class="page__error">
                    {move || account.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                account
                    .get()
                    .data()
                    .map(|detail| {
                        let bank = detail.bank.clone().unwrap_or_default();
                        view! {
                            <dl class="detail-list">
                                <dt>"Account"</dt>
                                <dd>{detail.account_number.clone()}</dd>
                                <dt>"Bank"</dt>
                                <dd>{format::opt_text(bank.bank_name.as_deref())}</dd>
                                <dt>"IFSC"</dt>
                                <dd>{format::opt_text(detail.ifsc_code.as_deref())}</dd>
                                <dt>"Type"</dt>
                                <dd>{format::opt_text(detail.account_type.as_deref())}</dd>
                                <dt>"Balance"</dt>
                                <dd class="detail-list__balance">{format::money(detail.balance)}</dd>
                                <dt>"Status"</dt>
                                <dd>{detail.status.as_str()}</dd>
                                <dt>"Opened"</dt>
                                <dd>{format::timestamp(detail.created_on.as_deref())}</dd>
                            </dl>
                        }
                    })
            }}

            <h2>"Recent transactions"</h2>
            <Show when=move || ledger.get().is_loading()>
                <p>"Loading transactions..."</p>
            </Show>
            <Show when=move || ledger.get().error().is_some()>
                <p class="page__error">
                    {move || ledger.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>
            {move || {
                ledger
                    .get()
                    .data()
                    .map(|rows| view! { <TransactionTable rows=rows.clone()/> })
            }}
        </div>
    }
}
