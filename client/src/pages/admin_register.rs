//! Open admin signup page.

#[cfg(test)]
#[path = "admin_register_test.rs"]
mod admin_register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::RegisterAdminRequest;

/// Validate the signup form, producing the request to send.
fn validate_register_input(email: &str, password: &str, confirm: &str) -> Result<RegisterAdminRequest, String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address.".to_owned());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(RegisterAdminRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Admin registration page. On success, navigates to the login page.
#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_register_input(&email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        crate::net::spawn(async move {
            match crate::net::api::register_admin(&request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.friendly_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Register as admin"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Confirm password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p>
                "Already registered? " <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
