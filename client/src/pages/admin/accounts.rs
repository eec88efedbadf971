//! Admin account list with lock/unlock controls and a per-account
//! transaction drill-down.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use leptos::prelude::*;
use models::{Account, AccountStatus, ApiError, Role, Transaction};

use crate::components::transaction_table::TransactionTable;
use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::{export, format};

/// The status an account moves to when its lock toggle is pressed.
fn toggled(status: AccountStatus) -> AccountStatus {
    match status {
        AccountStatus::Active => AccountStatus::Inactive,
        AccountStatus::Inactive => AccountStatus::Active,
    }
}

/// Set the status of one account in the loaded list. Returns the previous
/// status when the account was found, for rollback on a failed request.
fn apply_status(accounts: &mut [Account], account_number: &str, status: AccountStatus) -> Option<AccountStatus> {
    let account = accounts.iter_mut().find(|a| a.account_number == account_number)?;
    let previous = account.status;
    account.status = status;
    Some(previous)
}

/// Admin page listing every account. The lock toggle flips the row
/// immediately and rolls back if the server rejects the change.
#[component]
pub fn AdminAccountsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let accounts = RwSignal::new(RemoteData::<Vec<Account>>::Idle);
    let ledger = RwSignal::new(RemoteData::<Vec<Transaction>>::Idle);
    let selected = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Admin).cloned() else {
            accounts.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(accounts.get_untracked(), RemoteData::Idle) {
            return;
        }
        accounts.set(RemoteData::Loading);
        crate::net::spawn(async move {
            accounts.set(RemoteData::from_result(crate::net::api::fetch_all_accounts(&active).await));
        });
    });

    let toggle_lock = move |account_number: String, current: AccountStatus| {
        let Some(active) = session.get_untracked().with_role(Role::Admin).cloned() else {
            return;
        };
        let target = toggled(current);
        notice.set(None);
        accounts.update(|state| {
            state.update_loaded(|list| {
                apply_status(list, &account_number, target);
            });
        });
        crate::net::spawn(async move {
            let lock = !target.is_active();
            if let Err(err) = crate::net::api::set_account_lock(&active, &account_number, lock).await {
                accounts.update(|state| {
                    state.update_loaded(|list| {
                        apply_status(list, &account_number, current);
                    });
                });
                notice.set(Some(err.friendly_message()));
            }
        });
    };

    let open_ledger = move |account_number: String| {
        let Some(active) = session.get_untracked().with_role(Role::Admin).cloned() else {
            return;
        };
        selected.set(Some(account_number.clone()));
        ledger.set(RemoteData::Loading);
        crate::net::spawn(async move {
            ledger.set(RemoteData::from_result(
                crate::net::api::fetch_transactions(&active, Some(&account_number)).await,
            ));
        });
    };

    let close_ledger = move |_| {
        selected.set(None);
        ledger.set(RemoteData::Idle);
    };

    let export_ledger = move |_| {
        let Some(account_number) = selected.get_untracked() else {
            return;
        };
        if let Some(rows) = ledger.get_untracked().data() {
            let html = export::statement_html("Account Statement", &account_number, rows);
            export::download_html(&format!("statement-{account_number}.html"), &html);
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Accounts"</h1>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="page__error">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || accounts.get().is_loading()>
                <p>"Loading accounts..."</p>
            </Show>
            <Show when=move || accounts.get().error().is_some()>
                <p class="page__error">
                    {move || accounts.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                accounts
                    .get()
                    .data()
                    .map(|list| {
                        if list.is_empty() {
                            return view! { <p class="table-empty">"No accounts yet."</p> }.into_any();
                        }
                        view! {
                            <table class="records">
                                <thead>
                                    <tr>
                                        <th>"Account"</th>
                                        <th>"Customer"</th>
                                        <th>"Bank"</th>
                                        <th>"Type"</th>
                                        <th class="records__num">"Balance"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|account| {
                                            let number = account.account_number.clone();
                                            let number_for_ledger = number.clone();
                                            let status = account.status;
                                            let customer = account
                                                .customer
                                                .as_ref()
                                                .and_then(|c| c.name.as_deref())
                                                .map(str::to_owned);
                                            let bank = account
                                                .bank
                                                .as_ref()
                                                .and_then(|b| b.bank_name.as_deref())
                                                .map(str::to_owned);
                                            view! {
                                                <tr>
                                                    <td>{account.account_number.clone()}</td>
                                                    <td>{format::opt_text(customer.as_deref())}</td>
                                                    <td>{format::opt_text(bank.as_deref())}</td>
                                                    <td>{format::opt_text(account.account_type.as_deref())}</td>
                                                    <td class="records__num">{format::money(account.balance)}</td>
                                                    <td>{status.as_str()}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| toggle_lock(number.clone(), status)
                                                        >
                                                            {if status.is_active() { "Lock" } else { "Unlock" }}
                                                        </button>
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| open_ledger(number_for_ledger.clone())
                                                        >
                                                            "Transactions"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    })
            }}

            <Show when=move || selected.get().is_some()>
                <div class="dialog-backdrop" on:click=close_ledger>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || format!("Transactions for {}", selected.get().unwrap_or_default())}</h2>

                        <Show when=move || ledger.get().is_loading()>
                            <p>"Loading transactions..."</p>
                        </Show>
                        <Show when=move || ledger.get().error().is_some()>
                            <p class="dialog__error">
                                {move || ledger.get().error().map(str::to_owned).unwrap_or_default()}
                            </p>
                        </Show>

                        {move || {
                            ledger
                                .get()
                                .data()
                                .map(|rows| view! { <TransactionTable rows=rows.clone()/> })
                        }}

                        <div class="dialog__actions">
                            <button class="btn" on:click=export_ledger>
                                "Export"
                            </button>
                            <button class="btn" on:click=close_ledger>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
