//! Login page for all three roles.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::{LoginRequest, Role, Session};

use crate::state::session::SessionState;

/// Validate the login form, producing the request to send.
fn validate_login_input(role: Option<Role>, email: &str, password: &str) -> Result<LoginRequest, String> {
    let Some(role) = role else {
        return Err("Please select a role.".to_owned());
    };
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address.".to_owned());
    }
    if password.is_empty() {
        return Err("Please enter your password.".to_owned());
    }
    Ok(LoginRequest { role, email: email.to_owned(), password: password.to_owned() })
}

fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/banks",
        Role::Bank => "/bank/customers",
        Role::Customer => "/customer/account",
    }
}

/// Login page with a role selector. A successful login persists the
/// session and navigates to the role's landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let role = RwSignal::new(None::<Role>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_login_input(role.get(), &email.get(), &password.get()) {
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
            match crate::net::api::login(&request).await {
                Ok(response) => {
                    let active = Session::from_login(response);
                    crate::state::session::store(&active);
                    let target = landing_path(active.role);
                    session.set(SessionState { session: Some(active), loading: false });
                    navigate(target, NavigateOptions::default());
                }
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.friendly_message()));
                }
            }
        });
    };

    let select_role = move |value: String| {
        role.set(Role::from_str(&value));
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Role"
                    <select
                        class="auth-form__input"
                        on:change=move |ev| select_role(event_target_value(&ev))
                    >
                        <option value="" selected=move || role.get().is_none()>
                            "Select role"
                        </option>
                        <option value="ADMIN">"Admin"</option>
                        <option value="BANK">"Bank manager"</option>
                        <option value="CUSTOMER">"Customer"</option>
                    </select>
                </label>
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

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p>
                "No admin account yet? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
