//! Account provisioning screen for one customer.

#[cfg(test)]
#[path = "account_add_test.rs"]
mod account_add_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use models::{AddAccountRequest, ApiError, CustomerAccountInfo, Role};

use crate::state::remote::RemoteData;
use crate::state::session::SessionState;
use crate::util::format;

/// What the provisioning screen learned about the customer before showing
/// the form.
#[derive(Clone, Debug, PartialEq)]
struct ProvisioningContext {
    info: CustomerAccountInfo,
    /// Set when the customer already holds an account; the form is
    /// replaced by a notice and a link to the teller screen.
    existing_status: Option<String>,
}

/// Validate the form, producing the request to send.
fn validate_add_account(
    email: &str,
    account_number: &str,
    ifsc_code: &str,
    account_type: &str,
) -> Result<AddAccountRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Missing customer email.".to_owned());
    }
    let account_number = account_number.trim();
    if account_number.is_empty() {
        return Err("Please enter an account number.".to_owned());
    }
    let ifsc_code = ifsc_code.trim();
    if ifsc_code.is_empty() {
        return Err("Please enter an IFSC code.".to_owned());
    }
    let account_type = account_type.trim();
    if account_type.is_empty() {
        return Err("Please select an account type.".to_owned());
    }
    Ok(AddAccountRequest {
        customer_email: email.to_owned(),
        account_number: account_number.to_owned(),
        ifsc_code: ifsc_code.to_owned(),
        account_type: account_type.to_owned(),
    })
}

/// Bank manager page for opening an account. On load it checks whether the
/// customer already holds one; if so the form is replaced with the current
/// account status.
#[component]
pub fn AccountAddPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let email = move || params.read().get("email").unwrap_or_default();

    let context = RwSignal::new(RemoteData::<ProvisioningContext>::Idle);
    let account_number = RwSignal::new(String::new());
    let ifsc_code = RwSignal::new(String::new());
    let account_type = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(active) = state.with_role(Role::Bank).cloned() else {
            context.set(RemoteData::Errored(ApiError::NoSession.friendly_message()));
            return;
        };
        if !matches!(context.get_untracked(), RemoteData::Idle) {
            return;
        }
        let customer_email = email();
        if customer_email.is_empty() {
            context.set(RemoteData::Errored("Missing customer email.".to_owned()));
            return;
        }
        context.set(RemoteData::Loading);
        crate::net::spawn(async move {
            let loaded = async {
                let exists = crate::net::api::account_exists(&active, &customer_email).await?;
                let existing_status = if exists {
                    Some(crate::net::api::account_status(&active, &customer_email).await?)
                } else {
                    None
                };
                let info = crate::net::api::fetch_customer_info(&active, &customer_email).await?;
                Ok::<_, ApiError>(ProvisioningContext { info, existing_status })
            }
            .await;
            context.set(RemoteData::from_result(loaded));
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request =
            match validate_add_account(&email(), &account_number.get(), &ifsc_code.get(), &account_type.get()) {
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
        busy.set(true);
        let navigate = navigate.clone();
        crate::net::spawn(async move {
            match crate::net::api::add_account(&active, &request).await {
                Ok(()) => {
                    navigate(
                        &format!("/bank/accounts/detail/{}", request.customer_email),
                        NavigateOptions::default(),
                    );
                }
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.friendly_message()));
                }
            }
        });
    };

    view! {
        <div class="page page--form">
            <h1>"Open account"</h1>

            <Show when=move || context.get().is_loading()>
                <p>"Checking customer..."</p>
            </Show>
            <Show when=move || context.get().error().is_some()>
                <p class="page__error">
                    {move || context.get().error().map(str::to_owned).unwrap_or_default()}
                </p>
            </Show>

            {move || {
                context
                    .get()
                    .data()
                    .map(|ctx| {
                        let info = view! {
                            <dl class="detail-list">
                                <dt>"Customer"</dt>
                                <dd>{format::opt_text(ctx.info.customer_name.as_deref())}</dd>
                                <dt>"Email"</dt>
                                <dd>{format::opt_text(ctx.info.customer_email.as_deref())}</dd>
                                <dt>"Contact"</dt>
                                <dd>{format::opt_text(ctx.info.customer_contact.as_deref())}</dd>
                                <dt>"Bank"</dt>
                                <dd>{format::opt_text(ctx.info.bank_name.as_deref())}</dd>
                            </dl>
                        };
                        if let Some(status) = &ctx.existing_status {
                            let detail_href = format!("/bank/accounts/detail/{}", email());
                            return view! {
                                {info}
                                <p class="page__notice">
                                    {format!("This customer already holds an account ({status}).")}
                                </p>
                                <a class="btn" href=detail_href>
                                    "Go to account"
                                </a>
                            }
                                .into_any();
                        }
                        view! {
                            {info}
                            <form class="form" on:submit=on_submit.clone()>
                                <label class="form__label">
                                    "Account number"
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || account_number.get()
                                        on:input=move |ev| account_number.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "IFSC code"
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || ifsc_code.get()
                                        on:input=move |ev| ifsc_code.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "Account type"
                                    <select
                                        class="form__input"
                                        on:change=move |ev| account_type.set(event_target_value(&ev))
                                    >
                                        <option value="">"Select type"</option>
                                        <option value="SAVINGS">"Savings"</option>
                                        <option value="CURRENT">"Current"</option>
                                    </select>
                                </label>

                                <Show when=move || error.get().is_some()>
                                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                                </Show>

                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Opening..." } else { "Open account" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    })
            }}
        </div>
    }
}
