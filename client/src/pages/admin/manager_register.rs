//! Admin bank-manager registration form.

#[cfg(test)]
#[path = "manager_register_test.rs"]
mod manager_register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::{ApiError, RegisterManagerRequest, Role};

use crate::state::session::SessionState;

/// Raw form fields for the manager registration form.
#[derive(Clone, Debug, Default)]
struct ManagerForm {
    name: String,
    email: String,
    password: String,
    gender: String,
    contact_no: String,
    age: String,
    street: String,
    city: String,
    pincode: String,
}

/// Validate the form, producing the request to send.
fn validate_manager(form: &ManagerForm) -> Result<RegisterManagerRequest, String> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Please enter the manager's name.".to_owned());
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address.".to_owned());
    }
    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_owned());
    }
    if form.gender.trim().is_empty() {
        return Err("Please select a gender.".to_owned());
    }
    let contact_no = form.contact_no.trim();
    if contact_no.is_empty() {
        return Err("Please enter a contact number.".to_owned());
    }
    let Ok(age) = form.age.trim().parse::<u32>() else {
        return Err("Please enter a valid age.".to_owned());
    };
    if !(18..=100).contains(&age) {
        return Err("Age must be between 18 and 100.".to_owned());
    }
    Ok(RegisterManagerRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        gender: form.gender.trim().to_owned(),
        contact_no: contact_no.to_owned(),
        age,
        street: form.street.trim().to_owned(),
        city: form.city.trim().to_owned(),
        pincode: form.pincode.trim().to_owned(),
    })
}

/// Admin page for registering a bank manager (role BANK login).
#[component]
pub fn ManagerRegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(ManagerForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_manager(&form.get()) {
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
            match crate::net::api::register_bank_manager(&active, &request).await {
                Ok(()) => navigate("/admin/managers", NavigateOptions::default()),
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.friendly_message()));
                }
            }
        });
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           write: fn(&mut ManagerForm, String),
                           read: fn(&ManagerForm) -> String| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    prop:value=move || read(&form.get())
                    on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="page page--form">
            <h1>"Register bank manager"</h1>
            <form class="form" on:submit=on_submit>
                {text_field("Name", "text", |f, v| f.name = v, |f| f.name.clone())}
                {text_field("Email", "email", |f, v| f.email = v, |f| f.email.clone())}
                {text_field("Password", "password", |f, v| f.password = v, |f| f.password.clone())}

                <label class="form__label">
                    "Gender"
                    <select
                        class="form__input"
                        on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="MALE">"Male"</option>
                        <option value="FEMALE">"Female"</option>
                        <option value="OTHER">"Other"</option>
                    </select>
                </label>

                {text_field("Contact number", "text", |f, v| f.contact_no = v, |f| f.contact_no.clone())}
                {text_field("Age", "number", |f, v| f.age = v, |f| f.age.clone())}
                {text_field("Street", "text", |f, v| f.street = v, |f| f.street.clone())}
                {text_field("City", "text", |f, v| f.city = v, |f| f.city.clone())}
                {text_field("Pincode", "text", |f, v| f.pincode = v, |f| f.pincode.clone())}

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
