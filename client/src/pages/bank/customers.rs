//! Bank manager's customer list with account actions and deletion.

use leptos::prelude::*;
use models::{ApiError, Customer, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Bank manager page listing the bank's customers. Each row links to
/// account provisioning or the teller screen depending on whether the
/// customer already holds an account; deletion removes the row on success.
#[component]
pub fn BankCustomersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let customers = RwSignal::new(RemoteData::<Vec<Customer>>::Idle);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Bank).cloned() else {
            customers.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(customers.get_untracked(), RemoteData::Idle) {
            return;
        }
        customers.set(RemoteData::Loading);
        crate::net::spawn(async move {
            customers.set(RemoteData::from_result(crate::net::api::fetch_bank_customers(&active).await));
        });
    });

    let delete = move |email: String| {
        let Some(active) = session.get_untracked().with_role(Role::Bank).cloned() else {
            return;
        };
        notice.set(None);
        crate::net::spawn(async move {
            match crate::net::api::delete_customer(&active, &email).await {
                Ok(()) => {
                    customers.update(|state| {
                        state.update_loaded(|list| list.retain(|c| c.email != email));
                    });
                }
                Err(err) => notice.set(Some(err.friendly_message())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Customers"</h1>
                <a class="btn btn--primary" href="/bank/customers/register">
                    "+ Register customer"
                </a>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="page__error">{move || notice.get().unwrap_or_default()}</p>
            </Show>
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
                                        <th>"Contact"</th>
                                        <th>"Account"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|customer| {
                                            let email = customer.email.clone();
                                            let email_for_delete = email.clone();
                                            let has_account = customer.account_number.is_some();
                                            let action_href = if has_account {
                                                format!("/bank/accounts/detail/{email}")
                                            } else {
                                                format!("/bank/accounts/add/{email}")
                                            };
                                            view! {
                                                <tr>
                                                    <td>{customer.name.clone()}</td>
                                                    <td>{customer.email.clone()}</td>
                                                    <td>{format::opt_text(customer.contact.as_deref())}</td>
                                                    <td>{format::opt_text(customer.account_number.as_deref())}</td>
                                                    <td>
                                                        <a class="btn btn--small" href=action_href>
                                                            {if has_account { "Account" } else { "Open account" }}
                                                        </a>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete(email_for_delete.clone())
                                                        >
                                                            "Delete"
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
        </div>
    }
}
