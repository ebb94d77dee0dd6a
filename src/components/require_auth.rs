//! Route guard for views that require an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`RequireAuth`] so redirect
//! behavior stays identical across screens. The decision itself is the
//! pure `state::session::gate` function.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{GateDecision, Session, gate};

/// Gate `children` on the session status.
///
/// While validation is pending this renders a neutral placeholder and
/// does not redirect, so a slow check never flashes the login page. An
/// anonymous session is sent to `/login`; the originally requested
/// location is discarded.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if gate(session.get().status) == GateDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || match gate(session.get().status) {
        GateDecision::Wait => view! { <p class="loading">"Carregando..."</p> }.into_any(),
        GateDecision::Render => children().into_any(),
        GateDecision::RedirectToLogin => ().into_any(),
    }
}
