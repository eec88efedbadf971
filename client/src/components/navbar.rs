//! Top navigation bar, rendered on every page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use models::Role;

use crate::state::session::SessionState;

/// Navigation bar with role-dependent links and a logout button.
///
/// Links only render once the session has been restored; an anonymous
/// visitor sees the login link alone.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let role = move || session.get().ready().map(|s| s.role);
    let logged_in = move || role().is_some();

    let on_logout = move |_| {
        crate::state::session::clear();
        session.set(SessionState { session: None, loading: false });
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/">
                <span class="navbar__brand">"Webbank"</span>
            </A>

            <div class="navbar__links">
                <Show when=move || role() == Some(Role::Admin)>
                    <A href="/admin/banks">"Banks"</A>
                    <A href="/admin/managers">"Managers"</A>
                    <A href="/admin/customers">"Customers"</A>
                    <A href="/admin/accounts">"Accounts"</A>
                    <A href="/admin/transactions">"Transactions"</A>
                </Show>
                <Show when=move || role() == Some(Role::Bank)>
                    <A href="/bank/customers">"Customers"</A>
                    <A href="/bank/transactions">"Transactions"</A>
                </Show>
                <Show when=move || role() == Some(Role::Customer)>
                    <A href="/customer/account">"My Account"</A>
                    <A href="/customer/statement">"Statement"</A>
                    <A href="/customer/transfer">"Transfer"</A>
                </Show>
            </div>

            <div class="navbar__session">
                <Show
                    when=logged_in
                    fallback=|| {
                        view! { <A href="/login">"Log in"</A> }
                    }
                >
                    <span class="navbar__email">
                        {move || session.get().ready().map(|s| s.email.clone()).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
