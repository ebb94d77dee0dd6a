//! Floating direct-message widget shown on the home feed.
//!
//! Messaging is plain request/response: the open conversation is
//! re-fetched after a send and refreshed on a fixed cadence while
//! visible; there is no push channel. Responses that arrive after the
//! conversation changed are discarded via a generation counter.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::net::types::{ChatMessage, Contact};
use crate::state::session::{BrowserSession, Session, report_failure};

/// Milliseconds between conversation refreshes while a chat is open.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u32 = 5_000;

/// Longest contact preview before truncation, in characters.
const PREVIEW_CHARS: usize = 40;

/// Bubble class for a message, aligned by who sent it.
fn message_class(is_sender: bool) -> &'static str {
    if is_sender {
        "chat-widget__msg chat-widget__msg--sent"
    } else {
        "chat-widget__msg chat-widget__msg--received"
    }
}

/// One-line contact preview: the last message truncated, or the email
/// when no conversation exists yet.
fn contact_preview(contact: &Contact) -> String {
    match &contact.last_message {
        Some(last) if !last.is_empty() => {
            let mut preview: String = last.chars().take(PREVIEW_CHARS).collect();
            if last.chars().count() > PREVIEW_CHARS {
                preview.push('…');
            }
            preview
        }
        _ => contact.email.clone(),
    }
}

/// Collapsible chat widget: contact list, conversation view, composer.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let manager = expect_context::<BrowserSession>();

    let open = RwSignal::new(false);
    let contacts = RwSignal::new(Vec::<Contact>::new());
    let selected = RwSignal::new(None::<Contact>);
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    // Bumped whenever the open conversation changes; in-flight refreshes
    // compare against it and drop stale responses.
    let poll_gen = RwSignal::new(0u32);

    let load_contacts = move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::fetch_contacts(&token).await {
                    Ok(list) => contacts.set(list),
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao buscar contatos.",
                        ));
                    }
                }
            });
        }
    };

    let refresh_conversation = move |contact_id: i64, generation: u32| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                let outcome = crate::net::api::fetch_conversation(&token, contact_id).await;
                if poll_gen.get_untracked() != generation {
                    return;
                }
                match outcome {
                    Ok(list) => messages.set(list),
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao buscar mensagens.",
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (contact_id, generation);
        }
    };

    let start_polling = move |contact_id: i64, generation: u32| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    if poll_gen.get_untracked() != generation {
                        break;
                    }
                    refresh_conversation(contact_id, generation);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (contact_id, generation);
        }
    };

    let select_contact = move |contact: Contact| {
        let generation = poll_gen.get_untracked() + 1;
        poll_gen.set(generation);
        messages.set(Vec::new());
        error.set(String::new());
        let contact_id = contact.id;
        selected.set(Some(contact));
        refresh_conversation(contact_id, generation);
        start_polling(contact_id, generation);
    };

    let back_to_contacts = move |_| {
        poll_gen.update(|g| *g += 1);
        selected.set(None);
        messages.set(Vec::new());
        load_contacts();
    };

    let toggle_open = move |_| {
        let now_open = !open.get_untracked();
        open.set(now_open);
        if now_open {
            load_contacts();
        } else {
            poll_gen.update(|g| *g += 1);
            selected.set(None);
            messages.set(Vec::new());
        }
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get().trim().to_owned();
        let Some(contact) = selected.get_untracked() else {
            return;
        };
        if text.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().credential().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::send_message(&token, contact.id, &text).await {
                    Ok(_) => {
                        draft.set(String::new());
                        refresh_conversation(contact.id, poll_gen.get_untracked());
                    }
                    Err(err) => {
                        error.set(report_failure(
                            &manager,
                            session,
                            &err,
                            "Erro ao enviar mensagem.",
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, contact);
        }
    };

    view! {
        <div class="chat-widget">
            <Show when=move || !open.get()>
                <button class="chat-widget__bubble" on:click=toggle_open title="Chat">
                    "💬"
                </button>
            </Show>
            <Show when=move || open.get()>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <Show when=move || selected.get().is_some()>
                            <button class="chat-widget__back" on:click=back_to_contacts>
                                "‹"
                            </button>
                        </Show>
                        <span class="chat-widget__title">
                            {move || selected.get().map_or("Conversas".to_owned(), |c| c.nome)}
                        </span>
                        <button class="chat-widget__close" on:click=toggle_open>
                            "✕"
                        </button>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="chat-widget__error">{move || error.get()}</p>
                    </Show>

                    {move || {
                        if selected.get().is_none() {
                            let list = contacts.get();
                            if list.is_empty() {
                                return view! {
                                    <div class="chat-widget__empty">"Nenhum contato para conversar."</div>
                                }
                                    .into_any();
                            }
                            view! {
                                <div class="chat-widget__contacts">
                                    {list
                                        .into_iter()
                                        .map(|c| {
                                            let preview = contact_preview(&c);
                                            let nome = c.nome.clone();
                                            view! {
                                                <button
                                                    class="chat-widget__contact"
                                                    on:click=move |_| select_contact(c.clone())
                                                >
                                                    <strong>{nome}</strong>
                                                    <span class="chat-widget__preview">{preview}</span>
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="chat-widget__messages">
                                    {move || {
                                        messages
                                            .get()
                                            .into_iter()
                                            .map(|m| {
                                                view! {
                                                    <div class=message_class(m.is_sender)>
                                                        <p>{m.content}</p>
                                                        <small>{m.timestamp}</small>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                                <form class="chat-widget__compose" on:submit=on_send>
                                    <input
                                        class="chat-widget__input"
                                        type="text"
                                        placeholder="Escreva uma mensagem..."
                                        prop:value=move || draft.get()
                                        on:input=move |ev| draft.set(event_target_value(&ev))
                                    />
                                    <button class="chat-widget__send" type="submit">
                                        "Enviar"
                                    </button>
                                </form>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
