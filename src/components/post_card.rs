//! Feed card for a single project post.

use leptos::prelude::*;

use crate::net::types::Post;

/// Compact post rendering for the timeline; clicking selects the post
/// for the detail modal.
#[component]
pub fn PostCard(post: Post, on_select: Callback<Post>) -> impl IntoView {
    let selected = post.clone();

    view! {
        <div class="post-card" on:click=move |_| on_select.run(selected.clone())>
            <strong class="post-card__author">{post.nome.clone()}</strong>
            {(!post.titulo.is_empty())
                .then(|| view! { <h4 class="post-card__title">{post.titulo.clone()}</h4> })}
            <p class="post-card__text">{post.texto.clone()}</p>
            <small class="post-card__date">{post.data.clone().unwrap_or_default()}</small>
        </div>
    }
}
