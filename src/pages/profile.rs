//! The session user's own profile: identity card, editable bio and
//! social links, and their published projects.

use leptos::prelude::*;

use crate::net::types::{Post, UserDetail};
use crate::state::session::{BrowserSession, Session, report_failure};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();

    let detail = RwSignal::new(None::<UserDetail>);
    let my_posts = RwSignal::new(Vec::<Post>::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let descricao = RwSignal::new(String::new());
    let links = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let snapshot = session.get_untracked();
                let Some(token) = snapshot.credential().map(str::to_owned) else {
                    return;
                };
                let Some(user_id) = snapshot.user.as_ref().map(|u| u.id) else {
                    return;
                };
                match crate::net::api::fetch_user(&token, user_id).await {
                    Ok(d) => {
                        descricao.set(d.descricao.clone().unwrap_or_default());
                        links.set(d.links_sociais.clone().unwrap_or_default());
                        detail.set(Some(d));
                    }
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao carregar perfil.",
                        ));
                        return;
                    }
                }
                match crate::net::api::fetch_user_posts(&token, user_id).await {
                    Ok(list) => my_posts.set(list),
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao carregar projetos.",
                        ));
                    }
                }
            });
        }
    };
    load();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                let descricao_value = descricao.get_untracked().trim().to_owned();
                let links_value = links.get_untracked().trim().to_owned();
                let outcome = match crate::net::api::update_descricao(&token, &descricao_value)
                    .await
                {
                    Ok(_) => crate::net::api::update_links(&token, &links_value)
                        .await
                        .map(|_| ()),
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(()) => {
                        notice.set("Perfil atualizado com sucesso!".to_owned());
                        editing.set(false);
                        load();
                    }
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao atualizar perfil.",
                        ));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            saving.set(false);
        }
    };

    view! {
        <div class="profile-page">
            <aside class="profile-page__card">
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            let pic = d
                                .profile_pic_url
                                .clone()
                                .unwrap_or_else(|| format!("https://i.pravatar.cc/150?u={}", d.id));
                            view! {
                                <img class="profile-page__photo" src=pic alt="Foto de perfil"/>
                                <h2>{d.nome.clone()}</h2>
                                <p class="profile-page__email">{d.email.clone()}</p>
                                <Show when=move || !editing.get()>
                                    <p class="profile-page__bio">
                                        {move || {
                                            let bio = descricao.get();
                                            if bio.is_empty() {
                                                "Sem descrição ainda.".to_owned()
                                            } else {
                                                bio
                                            }
                                        }}
                                    </p>
                                    <p class="profile-page__links">{move || links.get()}</p>
                                    <button class="btn" on:click=move |_| editing.set(true)>
                                        "Editar perfil"
                                    </button>
                                </Show>
                            }
                        })
                }}
                <Show when=move || editing.get()>
                    <form class="profile-page__form" on:submit=on_save>
                        <label>
                            "Descrição"
                            <textarea
                                rows="3"
                                prop:value=move || descricao.get()
                                on:input=move |ev| descricao.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label>
                            "Links"
                            <input
                                type="text"
                                placeholder="https://..."
                                prop:value=move || links.get()
                                on:input=move |ev| links.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="modal__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                            </button>
                            <button class="btn" type="button" on:click=move |_| editing.set(false)>
                                "Cancelar"
                            </button>
                        </div>
                    </form>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="notice">{move || notice.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
            </aside>

            <section class="profile-page__projects">
                <h3>"Meus Projetos"</h3>
                {move || {
                    let list = my_posts.get();
                    if list.is_empty() {
                        view! { <p>"Você ainda não criou nenhum projeto."</p> }.into_any()
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
        </div>
    }
}
