//! Admin bank list.

use leptos::prelude::*;
use models::{ApiError, Bank, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Admin page listing every registered bank.
#[component]
pub fn BanksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let banks = RwSignal::new(RemoteData::<Vec<Bank>>::Idle);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Admin).cloned() else {
            banks.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(banks.get_untracked(), RemoteData::Idle) {
            return;
        }
        banks.set(RemoteData::Loading);
        crate::net::spawn(async move {
            banks.set(RemoteData::from_result(crate::net::api::fetch_banks(&active).await));
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Banks"</h1>
                <a class="btn btn--primary" href="/admin/banks/add">
                    "+ Add bank"
                </a>
            </header>

            <Show when=move || banks.get().is_loading()>
                <p>"Loading banks..."</p>
            </Show>
            <Show when=move || banks.get().error().is_some()>
                <p class="page__error">
                    {move || banks.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                banks
                    .get()
                    .data()
                    .map(|list| {
                        if list.is_empty() {
                            return view! { <p class="table-empty">"No banks registered yet."</p> }
                                .into_any();
                        }
                        view! {
                            <table class="records">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Code"</th>
                                        <th>"Email"</th>
                                        <th>"Phone"</th>
                                        <th>"Country"</th>
                                        <th>"Currency"</th>
                                        <th>"Website"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|bank| {
                                            view! {
                                                <tr>
                                                    <td>{bank.bank_name.clone()}</td>
                                                    <td>{bank.bank_code.clone()}</td>
                                                    <td>{format::opt_text(bank.bank_email.as_deref())}</td>
                                                    <td>{format::opt_text(bank.phone_number.as_deref())}</td>
                                                    <td>{format::opt_text(bank.country.as_deref())}</td>
                                                    <td>{format::opt_text(bank.currency.as_deref())}</td>
                                                    <td>{format::opt_text(bank.website.as_deref())}</td>
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
