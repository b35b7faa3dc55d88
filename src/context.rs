//! Application Context
//!
//! Shared navigation and reload signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::router::{self, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    /// Trigger to re-read records from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-read records from the store - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// User-initiated navigation; pushes a history entry
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        router::sync_location(route, false);
        self.set_route.set(route);
    }

    /// Gate-initiated navigation; replaces the current history entry
    pub fn redirect(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        router::sync_location(route, true);
        self.set_route.set(route);
    }

    /// Follow a location change the browser already made (back/forward)
    pub fn follow_location(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a re-read of records
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
