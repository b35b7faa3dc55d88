//! Session Gate
//!
//! Two guard components composed around route entry. `RequireSession`
//! renders its children only with an authenticated session and shows the
//! loading affordance while restoration is pending; `RedirectIfSession`
//! keeps signed-in users off the auth screens. Both apply the same pure
//! `gate` decision.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::Route;
use crate::state::{use_app_store, AppStateStoreFields};

/// What the gate does with the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Session restoration pending; show the loading affordance
    Wait,
    /// The route is allowed for this session state
    Stay,
    /// Leave for the given route, replacing the history entry
    Redirect(Route),
}

/// Session gate decision. Auth screens never wait on restoration: they
/// render for anonymous visitors and eject signed-in ones.
pub fn gate(route: Route, restoring: bool, signed_in: bool) -> GateAction {
    if route.public_only() {
        if signed_in {
            GateAction::Redirect(Route::Dashboard)
        } else {
            GateAction::Stay
        }
    } else if restoring {
        GateAction::Wait
    } else if signed_in {
        GateAction::Stay
    } else {
        GateAction::Redirect(Route::Login)
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let children = StoredValue::new(children);

    let decision = move || {
        gate(
            ctx.route.get(),
            store.restoring_session().get(),
            store.session().get().is_some(),
        )
    };

    Effect::new(move |_| {
        if let GateAction::Redirect(target) = decision() {
            ctx.redirect(target);
        }
    });

    view! {
        <Show
            when=move || decision() != GateAction::Wait
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <Show when=move || decision() == GateAction::Stay>
                {move || children.read_value()()}
            </Show>
        </Show>
    }
}

#[component]
pub fn RedirectIfSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let children = StoredValue::new(children);

    let decision = move || {
        gate(
            ctx.route.get(),
            store.restoring_session().get(),
            store.session().get().is_some(),
        )
    };

    Effect::new(move |_| {
        if let GateAction::Redirect(target) = decision() {
            ctx.redirect(target);
        }
    });

    view! {
        <Show when=move || decision() == GateAction::Stay>
            {move || children.read_value()()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_only_route_without_session_redirects_to_login() {
        assert_eq!(
            gate(Route::Planner, false, false),
            GateAction::Redirect(Route::Login)
        );
        assert_eq!(
            gate(Route::Dashboard, false, false),
            GateAction::Redirect(Route::Login)
        );
    }

    #[test]
    fn auth_screen_with_session_redirects_to_dashboard() {
        assert_eq!(
            gate(Route::Login, false, true),
            GateAction::Redirect(Route::Dashboard)
        );
        assert_eq!(
            gate(Route::SignUp, true, true),
            GateAction::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn restoration_holds_session_only_routes() {
        assert_eq!(gate(Route::Notes, true, false), GateAction::Wait);
        // Auth screens render while restoration is still pending
        assert_eq!(gate(Route::Login, true, false), GateAction::Stay);
    }

    #[test]
    fn settled_session_state_stays_put() {
        assert_eq!(gate(Route::Planner, false, true), GateAction::Stay);
        assert_eq!(gate(Route::Login, false, false), GateAction::Stay);
    }
}
