//! Admin bank registration form.

#[cfg(test)]
#[path = "add_bank_test.rs"]
mod add_bank_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::{AddBankRequest, ApiError, BankManager, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;

/// Raw form fields for the add-bank form.
#[derive(Clone, Debug, Default)]
struct AddBankForm {
    bank_name: String,
    bank_code: String,
    website: String,
    bank_address: String,
    bank_email: String,
    phone_number: String,
    country: String,
    currency: String,
    bank_manager_id: String,
}

/// Validate the form, producing the request to send. Every field is
/// required; the manager must be picked from the dropdown.
fn validate_add_bank(form: &AddBankForm) -> Result<AddBankRequest, String> {
    let required = [
        (&form.bank_name, "bank name"),
        (&form.bank_code, "bank code"),
        (&form.website, "website"),
        (&form.bank_address, "address"),
        (&form.bank_email, "email"),
        (&form.phone_number, "phone number"),
        (&form.country, "country"),
        (&form.currency, "currency"),
    ];
    for (value, label) in required {
        if value.trim().is_empty() {
            return Err(format!("Please enter the {label}."));
        }
    }
    if !form.bank_email.contains('@') {
        return Err("Please enter a valid bank email address.".to_owned());
    }
    let Ok(bank_manager_id) = form.bank_manager_id.trim().parse::<i64>() else {
        return Err("Please select a bank manager.".to_owned());
    };
    Ok(AddBankRequest {
        bank_name: form.bank_name.trim().to_owned(),
        bank_code: form.bank_code.trim().to_owned(),
        website: form.website.trim().to_owned(),
        bank_address: form.bank_address.trim().to_owned(),
        bank_email: form.bank_email.trim().to_owned(),
        phone_number: form.phone_number.trim().to_owned(),
        country: form.country.trim().to_owned(),
        currency: form.currency.trim().to_owned(),
        bank_manager_id,
    })
}

/// Admin page for registering a bank under an existing manager.
#[component]
pub fn AddBankPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let managers = RwSignal::new(RemoteData::<Vec<BankManager>>::Idle);
    let form = RwSignal::new(AddBankForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_add_bank(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let Some(active) = session.get_untracked().with_role(Role::Admin).cloned() else {
            error.set(Some(ApiError::NoSession.friendly_message()));
            return;
        };
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        crate::net::spawn(async move {
            match crate::net::api::add_bank(&active, &request).await {
                Ok(()) => navigate("/admin/banks", NavigateOptions::default()),
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.friendly_message()));
                }
            }
        });
    };

    let text_field = move |label: &'static str, write: fn(&mut AddBankForm, String), read: fn(&AddBankForm) -> String| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || read(&form.get())
                    on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="page page--form">
            <h1>"Add bank"</h1>
            <form class="form" on:submit=on_submit>
                {text_field("Bank name", |f, v| f.bank_name = v, |f| f.bank_name.clone())}
                {text_field("Bank code", |f, v| f.bank_code = v, |f| f.bank_code.clone())}
                {text_field("Website", |f, v| f.website = v, |f| f.website.clone())}
                {text_field("Address", |f, v| f.bank_address = v, |f| f.bank_address.clone())}
                {text_field("Email", |f, v| f.bank_email = v, |f| f.bank_email.clone())}
                {text_field("Phone number", |f, v| f.phone_number = v, |f| f.phone_number.clone())}
                {text_field("Country", |f, v| f.country = v, |f| f.country.clone())}
                {text_field("Currency", |f, v| f.currency = v, |f| f.currency.clone())}

                <label class="form__label">
                    "Bank manager"
                    <select
                        class="form__input"
                        on:change=move |ev| form.update(|f| f.bank_manager_id = event_target_value(&ev))
                    >
                        <option value="">"Select manager"</option>
                        {move || {
                            managers
                                .get()
                                .data()
                                .map(|list| {
                                    list.iter()
                                        .filter_map(|manager| {
                                            let id = manager.id?;
                                            Some(
                                                view! {
                                                    <option value=id.to_string()>
                                                        {format!("{} ({})", manager.name, manager.email)}
                                                    </option>
                                                },
                                            )
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <Show when=move || managers.get().error().is_some()>
                    <p class="form__error">
                        {move || managers.get().error().map(str::to_owned).unwrap_or_default()}
                    </p>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Add bank" }}
                </button>
            </form>
        </div>
    }
}
