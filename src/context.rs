//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload views from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload views from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current session, if signed in - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            session: session.0,
            set_session: session.1,
        }
    }

    /// Trigger a reload of the catalog and wishlist views
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Store the session after a successful login
    pub fn set_session(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    /// Drop the session on logout
    pub fn clear_session(&self) {
        self.set_session.set(None);
    }

    /// Session token for authenticated requests, if any
    pub fn token(&self) -> Option<String> {
        self.session.get_untracked().map(|s| s.token)
    }
}
