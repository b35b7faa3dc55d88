//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Session state
//! lives here explicitly (no implicit globals): `restoring_session` starts
//! true and settles once the provider reports the current user.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::SessionUser;
use crate::records::RecordStore;

/// Process-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current session, owned by the external provider
    pub session: Option<SessionUser>,
    /// True until the restore-on-load check settles
    pub restoring_session: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            restoring_session: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Record-store backend for the current session, composed on demand.
/// Untracked read: the caller sits behind the session gate, so the session
/// cannot change underneath it without the whole view being torn down.
pub fn current_records(store: &AppStore) -> RecordStore {
    let session = store.session().get_untracked();
    RecordStore::select(session.as_ref().map(|u| u.uid.as_str()))
}

/// Replace the session wholesale and mark restoration settled
pub fn store_set_session(store: &AppStore, session: Option<SessionUser>) {
    *store.session().write() = session;
    *store.restoring_session().write() = false;
}
