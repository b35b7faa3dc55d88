//! Kaarya App
//!
//! Root component: provides the state store and context, starts session
//! restoration through the provider subscription, wires browser history,
//! and switches screens behind the session gates.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;

use crate::auth;
use crate::bridge::Subscription;
use crate::components::{
    Analytics, Dashboard, FocusMusic, Login, NavShell, Notes, Planner, RedirectIfSession,
    RequireSession, SignUp,
};
use crate::context::AppContext;
use crate::router::Route;
use crate::state::{store_set_session, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (route, set_route) = signal(Route::current());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((route, set_route), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Restore-on-load: the provider pushes the current session immediately
    // and keeps pushing for the app's lifetime. Without a bridge there is
    // nothing to restore.
    let session_subscription = StoredValue::new_local(None::<Subscription>);
    match auth::subscribe_session(move |user| {
        web_sys::console::log_1(
            &format!("[APP] session changed, signed_in={}", user.is_some()).into(),
        );
        store_set_session(&store, user);
    }) {
        Some(subscription) => session_subscription.set_value(Some(subscription)),
        None => store_set_session(&store, None),
    }

    // Browser back/forward
    if let Some(window) = web_sys::window() {
        let follow = Closure::<dyn FnMut()>::new(move || {
            ctx.follow_location(Route::current());
        });
        if window
            .add_event_listener_with_callback("popstate", follow.as_ref().unchecked_ref())
            .is_ok()
        {
            follow.forget();
        }
    }

    let signed_in = move || store.session().get().is_some();

    view! {
        <div class="app-layout">
            <Show when=signed_in>
                <NavShell />
            </Show>

            <main class=move || if signed_in() { "main-content with-nav" } else { "main-content" }>
                {move || match route.get() {
                    Route::Login => {
                        view! { <RedirectIfSession><Login /></RedirectIfSession> }.into_any()
                    }
                    Route::SignUp => {
                        view! { <RedirectIfSession><SignUp /></RedirectIfSession> }.into_any()
                    }
                    Route::Dashboard => {
                        view! { <RequireSession><Dashboard /></RequireSession> }.into_any()
                    }
                    Route::Planner => {
                        view! { <RequireSession><Planner /></RequireSession> }.into_any()
                    }
                    Route::Notes => {
                        view! { <RequireSession><Notes /></RequireSession> }.into_any()
                    }
                    Route::Analytics => {
                        view! { <RequireSession><Analytics /></RequireSession> }.into_any()
                    }
                    Route::FocusMusic => {
                        view! { <RequireSession><FocusMusic /></RequireSession> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
