//! Client-side Routes
//!
//! Fixed path set with History API navigation. Unknown paths fall back to
//! the dashboard; which routes are public-only versus session-only is
//! decided here, enforcement lives in the gate components.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Login,
    SignUp,
    #[default]
    Dashboard,
    Planner,
    Notes,
    Analytics,
    FocusMusic,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::Dashboard => "/",
            Route::Planner => "/planner",
            Route::Notes => "/notes",
            Route::Analytics => "/analytics",
            Route::FocusMusic => "/focus-music",
        }
    }

    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/signup" => Route::SignUp,
            "" => Route::Dashboard,
            "/planner" => Route::Planner,
            "/notes" => Route::Notes,
            "/analytics" => Route::Analytics,
            "/focus-music" => Route::FocusMusic,
            _ => Route::Dashboard,
        }
    }

    /// Sign-in/sign-up screens; everything else requires a session
    pub const fn public_only(self) -> bool {
        matches!(self, Route::Login | Route::SignUp)
    }

    /// Route for the browser's current location
    pub fn current() -> Route {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or_default()
    }
}

/// Rewrite the address bar without a page load. `replace` avoids polluting
/// history when a gate redirects.
pub fn sync_location(route: Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 7] = [
        Route::Login,
        Route::SignUp,
        Route::Dashboard,
        Route::Planner,
        Route::Notes,
        Route::Analytics,
        Route::FocusMusic,
    ];

    #[test]
    fn paths_round_trip() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/planner/"), Route::Planner);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
    }

    #[test]
    fn unknown_path_falls_back_to_dashboard() {
        assert_eq!(Route::from_path("/no-such-screen"), Route::Dashboard);
    }

    #[test]
    fn only_auth_screens_are_public() {
        for route in ALL {
            let public = matches!(route, Route::Login | Route::SignUp);
            assert_eq!(route.public_only(), public);
        }
    }
}
