//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::admin::accounts::AdminAccountsPage;
use crate::pages::admin::add_bank::AddBankPage;
use crate::pages::admin::banks::BanksPage;
use crate::pages::admin::customers::AdminCustomersPage;
use crate::pages::admin::manager_register::ManagerRegisterPage;
use crate::pages::admin::managers::ManagersPage;
use crate::pages::admin::transactions::AdminTransactionsPage;
use crate::pages::admin_register::AdminRegisterPage;
use crate::pages::bank::account_add::AccountAddPage;
use crate::pages::bank::account_detail::AccountDetailPage;
use crate::pages::bank::customer_register::CustomerRegisterPage;
use crate::pages::bank::customers::BankCustomersPage;
use crate::pages::bank::transactions::BankTransactionsPage;
use crate::pages::customer::account::CustomerAccountPage;
use crate::pages::customer::statement::StatementPage;
use crate::pages::customer::transfer::TransferPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// The session is read from localStorage exactly once, here; pages only
/// ever see it through the context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    Effect::new(move || {
        if session.get_untracked().loading {
            let restored = crate::state::session::load();
            session.set(SessionState { session: restored, loading: false });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/webbank.css"/>
        <Title text="Webbank"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=AdminRegisterPage/>

                <Route path=(StaticSegment("admin"), StaticSegment("banks")) view=BanksPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("banks"), StaticSegment("add")) view=AddBankPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("managers")) view=ManagersPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("managers"), StaticSegment("register"))
                    view=ManagerRegisterPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("customers")) view=AdminCustomersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("accounts")) view=AdminAccountsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("transactions")) view=AdminTransactionsPage/>

                <Route path=(StaticSegment("bank"), StaticSegment("customers")) view=BankCustomersPage/>
                <Route
                    path=(StaticSegment("bank"), StaticSegment("customers"), StaticSegment("register"))
                    view=CustomerRegisterPage
                />
                <Route
                    path=(StaticSegment("bank"), StaticSegment("accounts"), StaticSegment("add"), ParamSegment("email"))
                    view=AccountAddPage
                />
                <Route
                    path=(StaticSegment("bank"), StaticSegment("accounts"), StaticSegment("detail"), ParamSegment("email"))
                    view=AccountDetailPage
                />
                <Route path=(StaticSegment("bank"), StaticSegment("transactions")) view=BankTransactionsPage/>

                <Route path=(StaticSegment("customer"), StaticSegment("account")) view=CustomerAccountPage/>
                <Route path=(StaticSegment("customer"), StaticSegment("statement")) view=StatementPage/>
                <Route path=(StaticSegment("customer"), StaticSegment("transfer")) view=TransferPage/>
            </Routes>
        </Router>
    }
}
