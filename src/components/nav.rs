//! Navigation Shell
//!
//! Top app bar and side drawer, rendered only for authenticated sessions,
//! plus the logout confirmation dialog. Logout itself is a provider call;
//! the session subscription clears local state afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth;
use crate::context::AppContext;
use crate::router::Route;

const MENU: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Planner, "Daily Planner"),
    (Route::Notes, "Notes"),
    (Route::Analytics, "Analytics"),
    (Route::FocusMusic, "Focus Music"),
];

#[component]
pub fn NavShell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (confirming_logout, set_confirming_logout) = signal(false);

    let logout = move |_| {
        set_confirming_logout.set(false);
        spawn_local(async move {
            if let Err(err) = auth::sign_out().await {
                web_sys::console::error_1(&format!("[NAV] logout failed: {}", err).into());
            }
        });
    };

    view! {
        <header class="app-bar">
            <span class="app-bar-title">"Kaarya"</span>
            <button class="logout-btn" on:click=move |_| set_confirming_logout.set(true)>
                "Logout"
            </button>
        </header>

        <nav class="drawer">
            <ul>
                {MENU
                    .iter()
                    .map(|&(route, label)| {
                        let is_active = move || ctx.route.get() == route;
                        view! {
                            <li>
                                <a
                                    class=move || {
                                        if is_active() { "drawer-link active" } else { "drawer-link" }
                                    }
                                    on:click=move |_| ctx.navigate(route)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>

        <Show when=move || confirming_logout.get()>
            <div class="dialog-backdrop">
                <div class="card dialog">
                    <h2>"Confirm Logout"</h2>
                    <p>"Are you sure you want to logout from Kaarya?"</p>
                    <div class="dialog-actions">
                        <button on:click=move |_| set_confirming_logout.set(false)>
                            "Cancel"
                        </button>
                        <button class="danger" on:click=logout>"Logout"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
