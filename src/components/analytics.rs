//! Analytics Screen
//!
//! Reads a task snapshot and renders the three derived-statistics charts:
//! weekly completions, today's distribution, and productivity by hour.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BarChart, LineChart, PieChart};
use crate::context::AppContext;
use crate::models::Task;
use crate::state::{current_records, use_app_store};
use crate::stats;

#[component]
pub fn Analytics() -> impl IntoView {
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
                    web_sys::console::error_1(&format!("[ANALYTICS] list failed: {}", err).into())
                }
            }
        });
    });

    let weekly = Memo::new(move |_| {
        stats::weekly_completion(&tasks.get(), stats::today())
            .into_iter()
            .map(|bucket| (bucket.label, bucket.count))
            .collect::<Vec<_>>()
    });

    let distribution = Memo::new(move |_| {
        let dist = stats::today_distribution(&tasks.get(), stats::today(), stats::DAILY_TARGET);
        vec![
            ("Completed".to_string(), dist.completed),
            ("In Progress".to_string(), dist.in_progress),
            ("Not Started".to_string(), dist.not_started),
        ]
    });

    let hourly = Memo::new(move |_| {
        stats::hourly_completion(&tasks.get(), stats::today())
            .into_iter()
            .map(|bucket| (bucket.label.to_string(), bucket.count))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="screen analytics">
            <header class="screen-header">
                <h1 class="brand">"Kaarya"</h1>
                <p class="tagline">"Analytics - Track Your Progress"</p>
            </header>

            <div class="card chart-card wide">
                <h2>"Weekly Task Completion"</h2>
                <LineChart series=weekly />
            </div>

            <div class="chart-row">
                <div class="card chart-card">
                    <h2>"Today's Task Distribution"</h2>
                    <PieChart slices=distribution />
                </div>
                <div class="card chart-card">
                    <h2>"Productivity by Hour"</h2>
                    <BarChart series=hourly />
                </div>
            </div>
        </div>
    }
}
