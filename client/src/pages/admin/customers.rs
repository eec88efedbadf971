//! Admin customer list with per-customer account drill-down.

use leptos::prelude::*;
use models::{Account, ApiError, Customer, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Admin page listing every customer. Selecting a customer with a linked
/// account opens a drill-down panel with the account detail; a failed
/// drill-down fetch degrades only that panel.
#[component]
pub fn AdminCustomersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let customers = RwSignal::new(RemoteData::<Vec<Customer>>::Idle);
    let detail = RwSignal::new(RemoteData::<Account>::Idle);
    let selected = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Admin).cloned() else {
            customers.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(customers.get_untracked(), RemoteData::Idle) {
            return;
        }
        customers.set(RemoteData::Loading);
        crate::net::spawn(async move {
            customers.set(RemoteData::from_result(crate::net::api::fetch_all_customers(&active).await));
        });
    });

    let open_detail = move |account_number: String| {
        let Some(active) = session.get_untracked().with_role(Role::Admin).cloned() else {
            return;
        };
        selected.set(Some(account_number.clone()));
        detail.set(RemoteData::Loading);
        crate::net::spawn(async move {
            detail.set(RemoteData::from_result(crate::net::api::fetch_account(&active, &account_number).await));
        });
    };

    let close_detail = move |_| {
        selected.set(None);
        detail.set(RemoteData::Idle);
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Customers"</h1>
            </header>

            <Show when=move || customers.get().is_loading()>
                <p>"Loading customers..."</p>
            </Show>
            <Show when=move || customers.get().error().is_some()>
                <p class="page__error">
                    {move || customers.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                customers
                    .get()
                    .data()
                    .map(|list| {
                        if list.is_empty() {
                            return view! { <p class="table-empty">"No customers registered yet."</p> }
                                .into_any();
                        }
                        view! {
                            <table class="records">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Bank"</th>
                                        <th>"Account"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|customer| {
                                            let account = customer.account_number.clone();
                                            view! {
                                                <tr>
                                                    <td>{customer.name.clone()}</td>
                                                    <td>{customer.email.clone()}</td>
                                                    <td>{format::opt_text(customer.bank_name.as_deref())}</td>
                                                    <td>{format::opt_text(customer.account_number.as_deref())}</td>
                                                    <td>
                                                        {customer
                                                            .status
                                                            .map_or(format::MISSING, |status| status.as_str())}
                                                    </td>
                                                    <td>
                                                        {account
                                                            .map(|number| {
                                                                view! {
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| open_detail(number.clone())
                                                                    >
                                                                        "View account"
                                                                    </button>
                                                                }
                                                            })}
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
                <div class="dialog-backdrop" on:click=close_detail>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || format!("Account {}", selected.get().unwrap_or_default())}</h2>

                        <Show when=move || detail.get().is_loading()>
                            <p>"Loading account..."</p>
                        </Show>
                        <Show when=move || detail.get().error().is_some()>
                            <p class="dialog__error">
                                {move || detail.get().error().map(str::to_owned).unwrap_or_default()}
                            </p>
                        </Show>

                        {move || {
                            detail
                                .get()
                                .data()
                                .map(|account| {
                                    view! {
                                        <dl class="detail-list">
                                            <dt>"IFSC"</dt>
                                            <dd>{format::opt_text(account.ifsc_code.as_deref())}</dd>
                                            <dt>"Type"</dt>
                                            <dd>{format::opt_text(account.account_type.as_deref())}</dd>
                                            <dt>"Balance"</dt>
                                            <dd>{format::money(account.balance)}</dd>
                                            <dt>"Status"</dt>
                                            <dd>{account.status.as_str()}</dd>
                                            <dt>"Opened"</dt>
                                            <dd>{format::timestamp(account.created_on.as_deref())}</dd>
                                        </dl>
                                    }
                                })
                        }}

                        <div class="dialog__actions">
                            <button class="btn" on:click=close_detail>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
