//! Public artist profile: identity card, follow toggle, follower
//! counts and that artist's projects.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Post, User, UserDetail};
use crate::state::session::{BrowserSession, Session, report_failure};

#[component]
pub fn UserPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();
    let params = use_params_map();

    let detail = RwSignal::new(None::<UserDetail>);
    let their_posts = RwSignal::new(Vec::<Post>::new());
    let followers = RwSignal::new(Vec::<User>::new());
    let following = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // Bumped per route change; a stale load must not populate the new page.
    let load_gen = RwSignal::new(0u32);

    // Reload whenever the `:id` segment changes.
    Effect::new(move || {
        let Some(user_id) = params.get().get("id").and_then(|v| v.parse::<i64>().ok()) else {
            error.set("Usuário inválido.".to_owned());
            return;
        };
        let generation = load_gen.get_untracked() + 1;
        load_gen.set(generation);
        detail.set(None);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                let fetched = crate::net::api::fetch_user(&token, user_id).await;
                if load_gen.get_untracked() != generation {
                    return;
                }
                match fetched {
                    Ok(d) => detail.set(Some(d)),
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao buscar usuário.",
                        ));
                        return;
                    }
                }
                if let Ok(list) = crate::net::api::fetch_user_posts(&token, user_id).await {
                    if load_gen.get_untracked() == generation {
                        their_posts.set(list);
                    }
                }
                if let Ok(list) = crate::net::api::fetch_followers(&token, user_id).await {
                    if load_gen.get_untracked() == generation {
                        followers.set(list);
                    }
                }
                if let Ok(list) = crate::net::api::fetch_following(&token, user_id).await {
                    if load_gen.get_untracked() == generation {
                        following.set(list);
                    }
                }
            });
        }
    });

    let on_toggle_follow = move |_| {
        if busy.get() {
            return;
        }
        let Some(current) = detail.get_untracked() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                let result = if current.is_following {
                    crate::net::api::unfollow_user(&token, current.id).await
                } else {
                    crate::net::api::follow_user(&token, current.id).await
                };
                match result {
                    Ok(ack) => {
                        detail.update(|opt| {
                            if let Some(d) = opt {
                                d.is_following = !current.is_following;
                            }
                        });
                        notice.set(ack.message);
                    }
                    Err(err) => {
                        notice.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao atualizar seguidores.",
                        ));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
            busy.set(false);
        }
    };

    view! {
        <div class="user-page">
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            {move || {
                detail
                    .get()
                    .map(|d| {
                        let pic = d
                            .profile_pic_url
                            .clone()
                            .unwrap_or_else(|| format!("https://i.pravatar.cc/150?u={}", d.id));
                        let nome = d.nome.clone();
                        let is_following = d.is_following;
                        view! {
                            <aside class="user-page__card">
                                <img class="user-page__photo" src=pic alt="Foto de perfil"/>
                                <h2>{nome.clone()}</h2>
                                <p class="user-page__email">{d.email.clone()}</p>
                                {d.descricao
                                    .clone()
                                    .filter(|bio| !bio.is_empty())
                                    .map(|bio| view! { <p class="user-page__bio">{bio}</p> })}
                                {d.links_sociais
                                    .clone()
                                    .filter(|l| !l.is_empty())
                                    .map(|l| view! { <p class="user-page__links">{l}</p> })}
                                <button
                                    class="btn btn--primary"
                                    on:click=on_toggle_follow
                                    disabled=move || busy.get()
                                >
                                    {if is_following { "Deixar de seguir" } else { "Seguir" }}
                                </button>
                                <p class="user-page__stats">
                                    {move || format!(
                                        "{} seguidores · seguindo {}",
                                        followers.get().len(),
                                        following.get().len(),
                                    )}
                                </p>
                                <Show when=move || !notice.get().is_empty()>
                                    <p class="notice">{move || notice.get()}</p>
                                </Show>
                            </aside>
                            <section class="user-page__projects">
                                <h3>{format!("Projetos de {nome}")}</h3>
                                {move || {
                                    let list = their_posts.get();
                                    if list.is_empty() {
                                        view! { <p>"Nenhum projeto publicado."</p> }.into_any()
                                    } else {
                                        list.into_iter()
                                            .map(|post| {
                                                view! {
                                                    <div class="project-card">
                                                        {(!post.titulo.is_empty())
                                                            .then(|| view! { <h4>{post.titulo.clone()}</h4> })}
                                                        <p>{post.texto.clone()}</p>
                                                        <span>{post.data.clone().unwrap_or_default()}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }
                                }}
                            </section>
                        }
                    })
            }}
        </div>
    }
}
