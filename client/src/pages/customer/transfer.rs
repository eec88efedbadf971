//! Customer money transfer form.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use leptos::prelude::*;
use models::{ApiError, Role, TransferRequest};

use crate::state::session::SessionState;

/// Validate the transfer form, producing the request to send.
///
/// The sender account comes from the session; transfers to the sender's
/// own account are rejected before any request goes out.
fn validate_transfer(
    sender_account: &str,
    receiver_account: &str,
    ifsc_code: &str,
    amount_raw: &str,
    purpose: &str,
) -> Result<TransferRequest, String> {
    let sender_account = sender_account.trim();
    if sender_account.is_empty() {
        return Err("No account is linked to this session. Please log in again.".to_owned());
    }
    let receiver_account = receiver_account.trim();
    if receiver_account.is_empty() {
        return Err("Please enter the recipient account number.".to_owned());
    }
    if receiver_account == sender_account {
        return Err("Cannot transfer to your own account.".to_owned());
    }
    let ifsc_code = ifsc_code.trim();
    if ifsc_code.is_empty() {
        return Err("Please enter the recipient IFSC code.".to_owned());
    }
    let amount_raw = amount_raw.trim();
    if amount_raw.is_empty() {
        return Err("Please enter an amount.".to_owned());
    }
    let Ok(amount) = amount_raw.parse::<f64>() else {
        return Err("Please enter a valid amount.".to_owned());
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.".to_owned());
    }
    let purpose = purpose.trim();
    if purpose.is_empty() {
        return Err("Please enter a purpose.".to_owned());
    }
    Ok(TransferRequest {
        sender_account_number: sender_account.to_owned(),
        receiver_account_number: receiver_account.to_owned(),
        ifsc_code: ifsc_code.to_owned(),
        amount,
        purpose: purpose.to_owned(),
    })
}

/// State applied to the form once a dispatched transfer has resolved.
struct TransferOutcome {
    confirmation: Option<String>,
    error: Option<String>,
    clear_form: bool,
}

/// Fold the server's response into what the form should show next.
fn settle_transfer(result: Result<String, ApiError>) -> TransferOutcome {
    match result {
        Ok(message) => TransferOutcome {
            confirmation: Some(if message.trim().is_empty() {
                "Transfer completed.".to_owned()
            } else {
                message.trim().to_owned()
            }),
            error: None,
            clear_form: true,
        },
        Err(err) => TransferOutcome {
            confirmation: None,
            error: Some(err.friendly_message()),
            clear_form: false,
        },
    }
}

/// Customer transfer page. A successful transfer shows the server's
/// confirmation and clears the form.
#[component]
pub fn TransferPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let receiver = RwSignal::new(String::new());
    let ifsc = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let confirmation = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let sender_account = move || {
        session
            .get()
            .with_role(Role::Customer)
            .and_then(|s| s.account_number.clone())
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_transfer(
            &sender_account(),
            &receiver.get(),
            &ifsc.get(),
            &amount.get(),
            &purpose.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let Some(active) = session.get_untracked().with_role(Role::Customer).cloned() else {
            error.set(Some(ApiError::NoSession.friendly_message()));
            return;
        };
        error.set(None);
        confirmation.set(None);
        busy.set(true);
        crate::net::spawn(async move {
            // The button stays disabled for the whole round trip; a second
            // submit must not go out while this one is in flight.
            let outcome = settle_transfer(crate::net::api::transfer(&active, &request).await);
            if outcome.clear_form {
                receiver.set(String::new());
                ifsc.set(String::new());
                amount.set(String::new());
                purpose.set(String::new());
            }
            confirmation.set(outcome.confirmation);
            error.set(outcome.error);
            busy.set(false);
        });
    };

    view! {
        <div class="page page--form">
            <h1>"Transfer money"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "From account"
                    <input class="form__input" type="text" readonly prop:value=sender_account/>
                </label>
                <label class="form__label">
                    "To account"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || receiver.get()
                        on:input=move |ev| receiver.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Recipient IFSC"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || ifsc.get()
                        on:input=move |ev| ifsc.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Amount"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Purpose"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || purpose.get()
                        on:input=move |ev| purpose.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || confirmation.get().is_some()>
                    <p class="page__notice">{move || confirmation.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Transfer" }}
                </button>
            </form>
        </div>
    }
}
