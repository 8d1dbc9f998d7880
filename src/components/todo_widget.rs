//! Todo Widget Component
//!
//! Dashboard task list. Toggle and delete apply optimistically with a full
//! snapshot rollback on failure; adding waits for the server's canonical
//! record so the client never invents an id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::api;
use crate::context::use_app_context;
use crate::models::Task;
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

#[component]
pub fn TodoWidget() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let tasks: SyncedList<Task> = SyncedList::new(|task| task.id);
    let (loading, set_loading) = signal(true);
    let (new_title, set_new_title) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_tasks().await {
            Ok(items) => {
                if is_alive(&alive) {
                    tasks.replace_all(items);
                    set_loading.set(false);
                }
            }
            Err(err) => {
                if is_alive(&alive) {
                    set_loading.set(false);
                    session.handle_api_error(&err);
                }
            }
        }
    });

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }
        set_adding.set(true);
        spawn_local(async move {
            match api::create_task(title.trim()).await {
                Ok(created) => {
                    tasks.push_front(created);
                    set_new_title.set(String::new());
                    ctx.toast_success("Task added");
                }
                Err(err) => session.handle_api_error(&err),
            }
            set_adding.set(false);
        });
    };

    view! {
        <div class="widget todo-widget">
            <h3 class="widget-title">"My Tasks"</h3>
            <form class="todo-add-form" on:submit=add_task>
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(input_value(&ev))
                />
                <button type="submit" disabled=move || adding.get()>
                    "+"
                </button>
            </form>
            <div class="todo-list">
                <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    <Show
                        when=move || !tasks.items().get().is_empty()
                        fallback=|| view! { <p class="muted">"No tasks yet."</p> }
                    >
                        {move || {
                            tasks
                                .items()
                                .get()
                                .into_iter()
                                .map(|task| {
                                    let id = task.id;
                                    let completed = task.is_completed;
                                    view! {
                                        <div class="todo-row">
                                            <input
                                                type="checkbox"
                                                prop:checked=completed
                                                on:change=move |_| {
                                                    let snapshot = tasks
                                                        .update_item(id, |t| t.is_completed = !t.is_completed);
                                                    spawn_local(async move {
                                                        if let Err(err) = api::set_task_completed(id, !completed)
                                                            .await
                                                        {
                                                            tasks.restore(snapshot);
                                                            session.handle_api_error(&err);
                                                        }
                                                    });
                                                }
                                            />
                                            <span class=move || {
                                                if completed { "todo-title done" } else { "todo-title" }
                                            }>{task.title}</span>
                                            <button
                                                class="row-delete"
                                                on:click=move |_| {
                                                    let snapshot = tasks.remove_item(id);
                                                    spawn_local(async move {
                                                        match api::delete_task(id).await {
                                                            Ok(()) => ctx.toast_success("Task deleted"),
                                                            Err(err) => {
                                                                tasks.restore(snapshot);
                                                                session.handle_api_error(&err);
                                                            }
                                                        }
                                                    });
                                                }
                                            >
                                                "\u{d7}"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </Show>
            </div>
        </div>
    }
}
