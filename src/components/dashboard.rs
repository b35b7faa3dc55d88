//! Dashboard Screen
//!
//! Landing screen: hour-of-day greeting, live quick stats over the task
//! snapshot, and feature cards into the other screens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Task;
use crate::router::Route;
use crate::state::{current_records, use_app_store};
use crate::stats;

fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=3 => "It's Late Night! Time to Rest",
        4..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        17..=21 => "Good Evening",
        _ => "It's Getting Late! Time to Wind Down",
    }
}

fn greeting_message(hour: u32) -> &'static str {
    match hour {
        0..=3 => "Don't forget to get enough sleep for a productive tomorrow!",
        4..=11 => "Let's start the day with energy and focus!",
        12..=16 => "Keep up the great work today!",
        17..=21 => "Time to review your day's achievements!",
        _ => "Consider wrapping up your tasks for the day.",
    }
}

const FEATURES: [(Route, &str, &str); 4] = [
    (
        Route::Planner,
        "Daily Planner",
        "Plan your day with tasks and reminders",
    ),
    (
        Route::Notes,
        "Notes",
        "Keep track of your ideas and thoughts",
    ),
    (
        Route::Analytics,
        "Analytics",
        "View your productivity insights",
    ),
    (
        Route::FocusMusic,
        "Focus Music",
        "Stay focused with ambient sounds",
    ),
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let records = current_records(&store);
        spawn_local(async move {
            match records.list_tasks().await {
                Ok(list) => set_tasks.set(list),
                Err(err) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] list failed: {}", err).into())
                }
            }
        });
    });

    let totals = Memo::new(move |_| stats::totals(&tasks.get()));
    let score = move || {
        let t = totals.get();
        if t.total == 0 {
            0
        } else {
            t.completed * 100 / t.total
        }
    };
    let hour = stats::current_hour();

    view! {
        <div class="screen dashboard">
            <header class="screen-header">
                <h1 class="brand big">"Kaarya"</h1>
                <p class="tagline">"Your Personal Productivity Suite"</p>
            </header>

            <div class="card welcome">
                <h2>{greeting(hour)}</h2>
                <p>{greeting_message(hour)}</p>
            </div>

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{move || format!("{}%", score())}</span>
                    <span class="stat-title">"Productivity Score"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || totals.get().completed}</span>
                    <span class="stat-title">"Tasks Completed"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || totals.get().pending}</span>
                    <span class="stat-title">"Tasks Pending"</span>
                </div>
            </div>

            <h2>"Quick Access"</h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|&(route, title, description)| {
                        view! {
                            <div class="card feature" on:click=move |_| ctx.navigate(route)>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="quick-actions">
                <button on:click=move |_| ctx.navigate(Route::Planner)>"Start Planning"</button>
                <button class="secondary" on:click=move |_| ctx.navigate(Route::FocusMusic)>
                    "Focus Mode"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_covers_every_hour() {
        assert_eq!(greeting(2), "It's Late Night! Time to Rest");
        assert_eq!(greeting(9), "Good Morning");
        assert_eq!(greeting(14), "Good Afternoon");
        assert_eq!(greeting(19), "Good Evening");
        assert_eq!(greeting(23), "It's Getting Late! Time to Wind Down");
    }
}
