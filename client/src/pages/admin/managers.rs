//! Admin bank-manager list.

use leptos::prelude::*;
use models::{ApiError, BankManager, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// Admin page listing bank managers and their assigned banks.
#[component]
pub fn ManagersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let managers = RwSignal::new(RemoteData::<Vec<BankManager>>::Idle);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Admin).cloned() else {
            managers.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(managers.get_untracked(), RemoteData::Idle) {
            return;
        }
        managers.set(RemoteData::Loading);
        crate::net::spawn(async move {
            managers.set(RemoteData::from_result(crate::net::api::fetch_bank_managers(&active).await));
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Bank managers"</h1>
                <a class="btn btn--primary" href="/admin/managers/register">
                    "+ Register manager"
                </a>
            </header>

            <Show when=move || managers.get().is_loading()>
                <p>"Loading managers..."</p>
            </Show>
            <Show when=move || managers.get().error().is_some()>
                <p class="page__error">
                    {move || managers.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                managers
                    .get()
                    .data()
                    .map(|list| {
                        if list.is_empty() {
                            return view! { <p class="table-empty">"No managers registered yet."</p> }
                                .into_any();
                        }
                        view! {
                            <table class="records">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Contact"</th>
                                        <th>"City"</th>
                                        <th>"Bank"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|manager| {
                                            view! {
                                                <tr>
                                                    <td>{manager.name.clone()}</td>
                                                    <td>{manager.email.clone()}</td>
                                                    <td>{format::opt_text(manager.contact_no.as_deref())}</td>
                                                    <td>{format::opt_text(manager.city.as_deref())}</td>
                                                    <td>{format::opt_text(manager.bank_name.as_deref())}</td>
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
