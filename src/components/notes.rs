//! Notes Screen
//!
//! Quick-notes pad: title + content editor doubling as add and edit form,
//! list ordered by last modification. A note needs a non-empty trimmed
//! title to persist.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::bridge::Subscription;
use crate::context::AppContext;
use crate::models::{NewNote, Note, NotePatch};
use crate::state::{current_records, use_app_store};
use crate::stats;

#[component]
pub fn Notes() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (editing, set_editing) = signal(None::<String>);
    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let records = current_records(&store);
        spawn_local(async move {
            match records.list_notes().await {
                Ok(list) => set_notes.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("[NOTES] list failed: {}", err).into())
                }
            }
        });
    });

    let records = current_records(&store);
    if let Some(sub) = records.subscribe_notes(move |list| set_notes.set(list)) {
        subscription.set_value(Some(sub));
    }
    on_cleanup(move || {
        subscription.update_value(|slot| {
            if let Some(sub) = slot.take() {
                sub.cancel();
            }
        });
    });

    let clear_editor = move || {
        set_editing.set(None);
        set_title.set(String::new());
        set_content.set(String::new());
    };

    let save_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed_title = title.get().trim().to_string();
        if trimmed_title.is_empty() {
            return;
        }
        let trimmed_content = content.get().trim().to_string();
        let records = current_records(&store);

        match editing.get() {
            Some(id) => {
                let patch = NotePatch {
                    title: Some(trimmed_title),
                    content: Some(trimmed_content),
                    last_modified: Some(stats::now_millis()),
                };
                spawn_local(async move {
                    match records.update_note(&id, &patch).await {
                        Ok(()) => {
                            clear_editor();
                            ctx.reload();
                        }
                        Err(err) => web_sys::console::error_1(
                            &format!("[NOTES] update failed: {}", err).into(),
                        ),
                    }
                });
            }
            None => {
                let new = NewNote {
                    title: trimmed_title,
                    content: trimmed_content,
                    last_modified: stats::now_millis(),
                };
                spawn_local(async move {
                    match records.create_note(new).await {
                        Ok(_) => {
                            clear_editor();
                            ctx.reload();
                        }
                        Err(err) => web_sys::console::error_1(
                            &format!("[NOTES] add failed: {}", err).into(),
                        ),
                    }
                });
            }
        }
    };

    let edit_note = move |note: Note| {
        set_editing.set(Some(note.id));
        set_title.set(note.title);
        set_content.set(note.content);
    };

    let delete_note = move |id: String| {
        // Deleting the note under edit also clears the editor
        if editing.get_untracked().as_deref() == Some(id.as_str()) {
            clear_editor();
        }
        let records = current_records(&store);
        spawn_local(async move {
            match records.delete_note(&id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[NOTES] delete failed: {}", err).into())
                }
            }
        });
    };

    view! {
        <div class="screen notes">
            <header class="screen-header">
                <h1 class="brand">"Kaarya"</h1>
                <p class="tagline">"Notes - Capture Your Thoughts"</p>
            </header>

            <form class="card note-editor" on:submit=save_note>
                <h2>"Quick Notes"</h2>
                <input
                    type="text"
                    placeholder="Note Title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <textarea
                    placeholder="Note Content"
                    rows="4"
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_content.set(textarea.value());
                    }
                ></textarea>
                <div class="editor-actions">
                    <button type="submit" disabled=move || title.get().trim().is_empty()>
                        {move || if editing.get().is_some() { "Update Note" } else { "Add Note" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="cancel-btn" on:click=move |_| clear_editor()>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <ul class="note-list">
                <For
                    each=move || notes.get()
                    key=|note| (note.id.clone(), note.last_modified)
                    children=move |note| {
                        let edit_target = note.clone();
                        let delete_id = note.id.clone();
                        view! {
                            <li class="card note">
                                <div class="note-body">
                                    <h3>{note.title.clone()}</h3>
                                    <p class="note-preview">{note.content.clone()}</p>
                                    <span class="note-time">
                                        {format!(
                                            "Last modified: {}",
                                            stats::datetime_label(note.last_modified),
                                        )}
                                    </span>
                                </div>
                                <div class="note-actions">
                                    <button on:click=move |_| edit_note(edit_target.clone())>
                                        "Edit"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| delete_note(delete_id.clone())
                                    >
                                        "×"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
