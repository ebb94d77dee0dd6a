//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal and its manager are provided here and nowhere
//! else; boot-time token validation is kicked off from the component
//! body so it runs exactly once per application lifetime.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    candidaturas::CandidaturasPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, user::UserPage,
};
use crate::state::session::SessionManager;
use crate::util::token_store::BrowserTokens;

/// Root application component.
///
/// Provides the shared session context, hydrates it from the persisted
/// token and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = SessionManager::new(BrowserTokens);
    let session = RwSignal::new(manager.boot());
    provide_context(session);
    provide_context(manager);

    // A stored token puts the session in `Validating`; confirm it against
    // the backend before any protected route is admitted.
    let boot_token = session.get_untracked().token;
    if let Some(token) = boot_token {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_profile(&token).await;
                if outcome.is_err() {
                    log::warn!("stored token rejected, starting anonymous");
                }
                session.update(|s| manager.finish_validation(s, outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    view! {
        <Title text="Ensemble"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("candidaturas")
                        view=|| view! { <RequireAuth><CandidaturasPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("usuario"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><UserPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
