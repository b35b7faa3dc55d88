//! Daily Planner Screen
//!
//! Task CRUD against the record store: add form with category select,
//! stat cards, and the task list with toggle/delete actions. Store errors
//! on record mutations go to the console only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::bridge::Subscription;
use crate::context::AppContext;
use crate::models::{Category, NewTask, Task};
use crate::state::{current_records, use_app_store};
use crate::stats;

#[component]
pub fn Planner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (new_title, set_new_title) = signal(String::new());
    let (new_category, set_new_category) = signal(Category::Work);
    let subscription = StoredValue::new_local(None::<Subscription>);

    // Initial read and re-reads after each mutation
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let records = current_records(&store);
        spawn_local(async move {
            match records.list_tasks().await {
                Ok(list) => set_tasks.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLANNER] list failed: {}", err).into())
                }
            }
        });
    });

    // Remote push channel; replaces the list wholesale on every change
    let records = current_records(&store);
    if let Some(sub) = records.subscribe_tasks(move |list| set_tasks.set(list)) {
        subscription.set_value(Some(sub));
    }
    on_cleanup(move || {
        subscription.update_value(|slot| {
            if let Some(sub) = slot.take() {
                sub.cancel();
            }
        });
    });

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() {
            return;
        }
        let new = NewTask {
            title,
            category: new_category.get(),
            timestamp: stats::now_millis(),
        };
        let records = current_records(&store);
        spawn_local(async move {
            match records.create_task(new).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLANNER] add failed: {}", err).into())
                }
            }
        });
    };

    let toggle_task = move |task: Task| {
        let patch = task.toggle_patch(stats::now_millis());
        let records = current_records(&store);
        spawn_local(async move {
            match records.update_task(&task.id, &patch).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLANNER] toggle failed: {}", err).into())
                }
            }
        });
    };

    let delete_task = move |id: String| {
        let records = current_records(&store);
        spawn_local(async move {
            match records.delete_task(&id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLANNER] delete failed: {}", err).into())
                }
            }
        });
    };

    let totals = Memo::new(move |_| stats::totals(&tasks.get()));

    view! {
        <div class="screen planner">
            <header class="screen-header">
                <h1 class="brand">"Kaarya"</h1>
                <p class="tagline">"Daily Planner - Organize Your Day"</p>
            </header>

            <div class="stat-cards">
                <div class="stat-card total">
                    <span class="stat-value">{move || totals.get().total}</span>
                    <span class="stat-title">"Total Tasks"</span>
                </div>
                <div class="stat-card completed">
                    <span class="stat-value">{move || totals.get().completed}</span>
                    <span class="stat-title">"Completed"</span>
                </div>
                <div class="stat-card pending">
                    <span class="stat-value">{move || totals.get().pending}</span>
                    <span class="stat-title">"Pending"</span>
                </div>
            </div>

            <form class="card add-task-form" on:submit=add_task>
                <h2>"Add New Task"</h2>
                <div class="add-task-row">
                    <input
                        type="text"
                        placeholder="Task description"
                        prop:value=move || new_title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_title.set(input.value());
                        }
                    />
                    <select
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_new_category.set(Category::from_str(&select.value()));
                        }
                    >
                        {Category::ALL
                            .iter()
                            .map(|&category| {
                                view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || new_category.get() == category
                                    >
                                        {category.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button type="submit">"Add Task"</button>
                </div>
            </form>

            <div class="card task-list">
                <h2>"Today's Tasks"</h2>
                <Show when=move || tasks.get().is_empty()>
                    <p class="empty-hint">"No tasks added yet. Start by adding a new task above!"</p>
                </Show>
                <ul>
                    <For
                        each=move || tasks.get()
                        key=|task| task.id.clone()
                        children=move |task| {
                            let toggle_target = task.clone();
                            let delete_id = task.id.clone();
                            view! {
                                <li class=if task.completed { "task done" } else { "task" }>
                                    <input
                                        type="checkbox"
                                        prop:checked=task.completed
                                        on:change=move |_| toggle_task(toggle_target.clone())
                                    />
                                    <span class="task-title">{task.title.clone()}</span>
                                    <span class="chip">{task.category.label()}</span>
                                    <span class="task-time">{stats::time_label(task.timestamp)}</span>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| delete_task(delete_id.clone())
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <div class="card category-stats">
                <h2>"Tasks by Category"</h2>
                <div class="category-grid">
                    {move || {
                        stats::by_category(&tasks.get())
                            .into_iter()
                            .map(|(category, count)| {
                                view! {
                                    <div class="category-card">
                                        <span class="stat-value">{count}</span>
                                        <span class="stat-title">{category.label()}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
