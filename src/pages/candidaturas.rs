//! Candidaturas received on the session user's projects: review list,
//! detail modal with accept/reject actions, and an accepted summary.

#[cfg(test)]
#[path = "candidaturas_test.rs"]
mod candidaturas_test;

use leptos::prelude::*;

use crate::net::types::Candidatura;
use crate::state::session::{BrowserSession, Session, report_failure};

/// Record the outcome of a review action on the local list.
pub fn apply_review(list: &mut [Candidatura], candidatura_id: i64, accepted: bool) {
    if let Some(c) = list
        .iter_mut()
        .find(|c| c.candidatura_id == candidatura_id)
    {
        c.status = Some(if accepted { "aceito" } else { "rejeitado" }.to_owned());
    }
}

/// Group accepted candidaturas by post, preserving first-seen post order.
#[must_use]
pub fn group_accepted(list: &[Candidatura]) -> Vec<(i64, Vec<Candidatura>)> {
    let mut groups: Vec<(i64, Vec<Candidatura>)> = Vec::new();
    for c in list.iter().filter(|c| c.is_accepted()) {
        match groups.iter_mut().find(|(post_id, _)| *post_id == c.post_id) {
            Some((_, members)) => members.push(c.clone()),
            None => groups.push((c.post_id, vec![c.clone()])),
        }
    }
    groups
}

#[component]
pub fn CandidaturasPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();

    let list = RwSignal::new(Vec::<Candidatura>::new());
    let selected = RwSignal::new(None::<Candidatura>);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::fetch_candidaturas(&token).await {
                    Ok(items) => list.set(items),
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao buscar candidaturas.",
                        ));
                    }
                }
            });
        }
    };
    load();

    let on_review = move |accept: bool| {
        let Some(current) = selected.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::review_candidatura(&token, current.candidatura_id, accept)
                    .await
                {
                    Ok(ack) => {
                        list.update(|l| apply_review(l, current.candidatura_id, accept));
                        notice.set(ack.message);
                        selected.set(None);
                    }
                    Err(err) => {
                        notice.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao atualizar status.",
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, accept);
        }
    };

    view! {
        <div class="candidaturas-page">
            <h2>"Candidaturas Recebidas"</h2>

            <Show when=move || !notice.get().is_empty()>
                <p class="notice" on:click=move |_| notice.set(String::new())>
                    {move || notice.get()}
                </p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            {move || {
                let items = list.get();
                if items.is_empty() {
                    return view! { <p>"Nenhuma candidatura recebida ainda."</p> }.into_any();
                }
                view! {
                    <div class="candidaturas-page__list">
                        {items
                            .into_iter()
                            .map(|c| {
                                let summary = c.clone();
                                view! {
                                    <div
                                        class="candidatura-card"
                                        on:click=move |_| selected.set(Some(summary.clone()))
                                    >
                                        <p><strong>"Projeto: "</strong>{c.texto_post.clone()}</p>
                                        <p>
                                            <strong>"Artista: "</strong>
                                            {format!("{} ({})", c.nome_candidato, c.email_candidato)}
                                        </p>
                                        <p><strong>"Data: "</strong>{c.data_candidatura.clone()}</p>
                                        <p><strong>"Status: "</strong>{c.status_label()}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            <h3>"Candidatos Aprovados"</h3>
            {move || {
                let groups = group_accepted(&list.get());
                if groups.is_empty() {
                    return view! { <p>"Nenhum candidato aprovado ainda."</p> }.into_any();
                }
                view! {
                    <div class="candidaturas-page__accepted">
                        {groups
                            .into_iter()
                            .map(|(post_id, members)| {
                                let title = members
                                    .first()
                                    .map_or_else(
                                        || format!("ID {post_id}"),
                                        |c| c.texto_post.clone(),
                                    );
                                view! {
                                    <div class="accepted-group">
                                        <h4>{format!("Projeto: {title}")}</h4>
                                        <ul>
                                            {members
                                                .into_iter()
                                                .map(|m| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} ({}) — aceita em {}",
                                                                m.nome_candidato,
                                                                m.email_candidato,
                                                                m.data_candidatura,
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            {move || {
                selected
                    .get()
                    .map(|c| {
                        let accepted = c.is_accepted();
                        let rejected = c.is_rejected();
                        view! {
                            <div class="overlay" on:click=move |_| selected.set(None)>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <h3>"Detalhes da Candidatura"</h3>
                                    <p><strong>"Projeto: "</strong>{c.texto_post.clone()}</p>
                                    <p>
                                        <strong>"Artista: "</strong>
                                        {format!("{} ({})", c.nome_candidato, c.email_candidato)}
                                    </p>
                                    <p><strong>"Data: "</strong>{c.data_candidatura.clone()}</p>
                                    <p><strong>"Status: "</strong>{c.status_label()}</p>
                                    <div class="modal__actions">
                                        <Show when=move || !accepted>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| on_review(true)
                                            >
                                                "Aceitar"
                                            </button>
                                        </Show>
                                        <Show when=move || !rejected>
                                            <button class="btn btn--danger" on:click=move |_| on_review(false)>
                                                "Rejeitar"
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
        </div>
    }
}
