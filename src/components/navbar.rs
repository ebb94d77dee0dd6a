//! Top navigation bar, hidden on the public entry routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{BrowserSession, Session};

/// Application chrome: logo plus session-aware links.
///
/// The bar is suppressed on the login and registration screens, which
/// render as stand-alone cards.
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let hidden = move || {
        matches!(
            location.pathname.get().as_str(),
            "/" | "/login" | "/register"
        )
    };

    view! {
        <Show when=move || !hidden()>
            <NavbarLinks/>
        </Show>
    }
}

#[component]
fn NavbarLinks() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(|s| manager.logout(s));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__logo" href="/home">"Ensemble"</a>
            <div class="navbar__actions">
                {move || {
                    let on_logout = on_logout.clone();
                    match session.get().user {
                        Some(user) => view! {
                            <a class="navbar__link" href="/candidaturas">"Candidaturas"</a>
                            <a class="navbar__link" href="/profile">{user.nome}</a>
                            <button class="navbar__link navbar__link--button" on:click=on_logout>
                                "Sair"
                            </button>
                        }
                            .into_any(),
                        None => view! { <a class="navbar__link" href="/login">"Entrar"</a> }.into_any(),
                    }
                }}
            </div>
        </nav>
    }
}
