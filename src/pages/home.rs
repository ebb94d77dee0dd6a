//! Home feed: project timeline, new-project modal, artist search and
//! the direct-message widget.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::post_card::PostCard;
use crate::net::types::{Post, User};
use crate::state::session::{BrowserSession, Session, report_failure};

/// Debounce window for the artist search box.
#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Client-side mirror of the backend's post requirements.
///
/// # Errors
///
/// Returns the message to show when a required field is blank.
pub fn validate_new_post(titulo: &str, texto: &str) -> Result<(), &'static str> {
    if titulo.trim().is_empty() || texto.trim().is_empty() {
        return Err("Título e texto do post não podem ser vazios.");
    }
    Ok(())
}

/// Whether the session user may apply to a post (never their own).
#[must_use]
pub fn can_apply(post_user_id: i64, me: Option<i64>) -> bool {
    me.is_some_and(|id| id != post_user_id)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();

    let posts = RwSignal::new(Vec::<Post>::new());
    let feed_error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Post>);

    let show_new = RwSignal::new(false);
    let titulo = RwSignal::new(String::new());
    let texto = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let search_term = RwSignal::new(String::new());
    let search_results = RwSignal::new(Vec::<User>::new());
    // Bumped per keystroke; debounced lookups bail when outdated.
    let search_gen = RwSignal::new(0u32);

    let load_posts = move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::fetch_posts(&token).await {
                    Ok(list) => posts.set(list),
                    Err(err) => {
                        feed_error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao carregar posts.",
                        ));
                    }
                }
            });
        }
    };
    load_posts();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let titulo_value = titulo.get().trim().to_owned();
        let texto_value = texto.get().trim().to_owned();
        if let Err(msg) = validate_new_post(&titulo_value, &texto_value) {
            form_error.set(msg.to_owned());
            return;
        }
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::create_post(&token, &titulo_value, &texto_value, None).await
                {
                    Ok(created) => {
                        posts.update(|list| list.insert(0, created.post));
                        titulo.set(String::new());
                        texto.set(String::new());
                        show_new.set(false);
                    }
                    Err(err) => {
                        form_error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao criar post.",
                        ));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    let on_apply = move |post_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::apply_to_post(&token, post_id).await {
                    Ok(ack) => {
                        notice.set(if ack.message.is_empty() {
                            "Candidatura enviada!".to_owned()
                        } else {
                            ack.message
                        });
                    }
                    Err(err) => {
                        notice.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao se candidatar.",
                        ));
                    }
                }
                selected.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_id;
        }
    };

    let on_search_input = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        search_term.set(term.clone());
        let generation = search_gen.get_untracked() + 1;
        search_gen.set(generation);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                if search_gen.get_untracked() != generation {
                    return;
                }
                let term = term.trim().to_owned();
                if term.is_empty() {
                    search_results.set(Vec::new());
                    return;
                }
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::search_users(&token, &term).await {
                    Ok(users) => {
                        if search_gen.get_untracked() == generation {
                            search_results.set(users);
                        }
                    }
                    Err(err) => {
                        // Search failures stay quiet, but a rejected
                        // credential still tears the session down.
                        let _ = report_failure(&manager, session, &err, "");
                        search_results.set(Vec::new());
                    }
                }
            });
        }
    };

    let on_select = Callback::new(move |post: Post| selected.set(Some(post)));

    view! {
        <div class="home-page">
            <aside class="home-page__nav">
                <nav>
                    <ul>
                        <li><a href="/home">"Início"</a></li>
                        <li>
                            <button
                                class="link-button"
                                on:click=move |_| {
                                    form_error.set(String::new());
                                    show_new.set(true);
                                }
                            >
                                "Novo Projeto"
                            </button>
                        </li>
                        <li><a href="/candidaturas">"Candidaturas"</a></li>
                        <li><a href="/profile">"Meu Perfil"</a></li>
                    </ul>
                </nav>
            </aside>

            <main class="home-page__feed">
                <h2 class="home-page__title">"Timeline Musical"</h2>
                <Show when=move || !notice.get().is_empty()>
                    <p class="notice" on:click=move |_| notice.set(String::new())>
                        {move || notice.get()}
                    </p>
                </Show>
                <Show when=move || !feed_error.get().is_empty()>
                    <p class="error">{move || feed_error.get()}</p>
                </Show>
                {move || {
                    let list = posts.get();
                    if list.is_empty() {
                        view! { <p class="home-page__empty">"Nenhum post disponível."</p> }
                            .into_any()
                    } else {
                        list.into_iter()
                            .map(|post| view! { <PostCard post=post on_select=on_select/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </main>

            <aside class="home-page__search">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Buscar artistas..."
                    prop:value=move || search_term.get()
                    on:input=on_search_input
                />
                <Show when=move || !search_results.get().is_empty()>
                    <div class="search-results">
                        {move || {
                            search_results
                                .get()
                                .into_iter()
                                .map(|u| {
                                    let href = format!("/usuario/{}", u.id);
                                    view! {
                                        <a class="search-result" href=href>
                                            <strong>{u.nome}</strong>
                                            <span>{u.email}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </aside>

            {move || {
                selected
                    .get()
                    .map(|post| {
                        let me = session.get().user.map(|u| u.id);
                        let applicable = can_apply(post.user_id, me);
                        let post_id = post.id;
                        view! {
                            <div class="overlay" on:click=move |_| selected.set(None)>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <h3>{post.nome.clone()}</h3>
                                    {(!post.titulo.is_empty())
                                        .then(|| view! { <h4>{post.titulo.clone()}</h4> })}
                                    <p>{post.texto.clone()}</p>
                                    <small>{post.data.clone().unwrap_or_default()}</small>
                                    <div class="modal__actions">
                                        <Show when=move || applicable>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| on_apply(post_id)
                                            >
                                                "Candidatar-se"
                                            </button>
                                        </Show>
                                        <button class="btn" on:click=move |_| selected.set(None)>
                                            "Fechar"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <Show when=move || show_new.get()>
                <div class="overlay" on:click=move |_| show_new.set(false)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Criar Novo Projeto"</h3>
                        <form on:submit=on_create>
                            <input
                                class="modal__input"
                                type="text"
                                placeholder="Título do projeto"
                                prop:value=move || titulo.get()
                                on:input=move |ev| titulo.set(event_target_value(&ev))
                            />
                            <textarea
                                class="modal__textarea"
                                rows="4"
                                placeholder="No que você está trabalhando?"
                                prop:value=move || texto.get()
                                on:input=move |ev| texto.set(event_target_value(&ev))
                            ></textarea>
                            <Show when=move || !form_error.get().is_empty()>
                                <p class="error">{move || form_error.get()}</p>
                            </Show>
                            <div class="modal__actions">
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Publicando..." } else { "Publicar" }}
                                </button>
                                <button
                                    class="btn"
                                    type="button"
                                    on:click=move |_| show_new.set(false)
                                >
                                    "Cancelar"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            <ChatWidget/>
        </div>
    }
}
