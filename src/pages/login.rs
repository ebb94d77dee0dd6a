//! Login page: credential form handing the result to the session manager.
//!
//! The page performs the `POST /login` call itself; the session manager
//! only receives already-authenticated credentials.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::{BrowserSession, Session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let senha_value = senha.get();
        if email_value.is_empty() || senha_value.is_empty() {
            error.set("Email e senha são obrigatórios.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &senha_value).await {
                    Ok(resp) => {
                        session.update(|s| manager.login(s, resp.token, resp.user));
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message("Email ou senha incorretos."));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Ensemble"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Novo por aqui? " <a href="/register">"Crie uma conta"</a>
                </p>
            </div>
        </div>
    }
}
