//! Teller screen: one customer's account with deposit and withdraw.

#[cfg(test)]
#[path = "account_detail_test.rs"]
mod account_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::{AccountInfo, AmountRequest, ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Validate a money-movement amount, producing the request to send.
///
/// Amounts are positive with at most two decimal places; the balance
/// itself is never checked here, the server owns that rule.
fn validate_amount(email: &str, raw: &str) -> Result<AmountRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Missing customer email.".to_owned());
    }
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Please enter an amount.".to_owned());
    }
    let Ok(amount) = raw.parse::<f64>() else {
        return Err("Please enter a valid amount.".to_owned());
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.".to_owned());
    }
    if let Some((_, decimals)) = raw.split_once('.') {
        if decimals.len() > 2 {
            return Err("Amount can have at most two decimal places.".to_owned());
        }
    }
    Ok(AmountRequest { email: email.to_owned(), amount })
}

/// Bank manager teller page. Deposits and withdrawals refetch the account
/// and ledger after the server accepts, so the displayed balance is always
/// the server's figure.
#[component]
pub fn AccountDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let email = move || params.read().get("email").unwrap_or_default();

    let account = RwSignal::new(RemoteData::<AccountInfo>::Idle);
    let ledger = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let refetch = move || {
        let Some(active) = session.get_untracked().with_role(Role::Bank).cloned() else {
            account.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        let customer_email = email();
        if customer_email.is_empty() {
            account.set(RemoteData::Errored("Missing customer email.".to_owned()));
            return;
        }
        account.set(RemoteData::Loading);
        ledger.set(RemoteData::Loading);
        crate::net::spawn(async move {
            account.set(RemoteData::from_result(
                crate::net::api::fetch_account_detail(&active, &customer_email).await,
            ));
            ledger.set(RemoteData::from_result(
                crate::net::api::fetch_account_transactions(&active, &customer_email).await,
            ));
        });
    };

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if state.with_role(Role::Bank).is_none() {
            account.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        }
        if matches!(account.get_untracked(), RemoteData::Idle) {
            refetch();
        }
    });

    let movement = move |withdraw: bool| {
        let request = match validate_amount(&email(), &amount.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let Some(active) = session.get_untracked().with_role(Role::Bank).cloned() else {
            error.set(Some(ApiError::NoSession.friendly_message()));
            return;
        };
        error.set(None);
        notice.set(None);
        busy.set(true);
        crate::net::spawn(async move {
            let outcome = if withdraw {
                crate::net::api::withdraw(&active, &request).await
            } else {
                crate::net::api::deposit(&active, &request).await
            };
            busy.set(false);
            match outcome {
                Ok(()) => {
                    amount.set(String::new());
                    notice.set(Some(if withdraw {
                        "Withdrawal recorded.".to_owned()
                    } else {
                        "Deposit recorded.".to_owned()
                    }));
                    refetch();
                }
                Err(err) => error.set(Some(err.friendly_message())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Account detail"</h1>
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
                    .map(|info| {
                        view! {
                            <dl class="detail-list">
                                <dt>"Account"</dt>
                                <dd>{info.account_no.clone()}</dd>
                                <dt>"Customer"</dt>
                                <dd>{format::opt_text(info.customer_name.as_deref())}</dd>
                                <dt>"Bank"</dt>
                                <dd>{format::opt_text(info.bank_name.as_deref())}</dd>
                                <dt>"IFSC"</dt>
                                <dd>{format::opt_text(info.ifsc.as_deref())}</dd>
                                <dt>"Balance"</dt>
                                <dd>{format::money(info.balance)}</dd>
                                <dt>"Status"</dt>
                                <dd>{info.status.as_str()}</dd>
                            </dl>
                        }
                    })
            }}

            <div class="teller">
                <label class="form__label">
                    "Amount"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| movement(false)>
                    "Deposit"
                </button>
                <button class="btn" disabled=move || busy.get() on:click=move |_| movement(true)>
                    "Withdraw"
                </button>
            </div>

            <Show when=move || notice.get().is_some()>
                <p class="page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <h2>"Transactions"</h2>
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
