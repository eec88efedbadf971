//! Landing page that routes each role to its workspace.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::Role;

use crate::state::session::SessionState;

/// Landing page. A restored session redirects straight to the role's main
/// page; anonymous visitors get the welcome screen.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if let Some(active) = state.ready() {
            let target = match active.role {
                Role::Admin => "/admin/banks",
                Role::Bank => "/bank/customers",
                Role::Customer => "/customer/account",
            };
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <h1>"Webbank"</h1>
            <p>"Online banking for administrators, bank managers and customers."</p>
            <div class="home-page__actions">
                <a href="/login" class="btn btn--primary">
                    "Log in"
                </a>
                <a href="/register" class="btn">
                    "Register as admin"
                </a>
            </div>
        </div>
    }
}
