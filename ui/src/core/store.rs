//! Application state the navbar reads, and the actions it may dispatch.
//!
//! Components never reach for an ambient store. They receive a [`NavStore`]
//! trait object; [`AppStore`] is the signal-backed implementation the shells
//! use, tests substitute recording doubles.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::session::{AuthState, CurrentUser};
use super::storage;
use super::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    ToggleThemeMode,
    Logout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub auth: AuthState,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl AppState {
    pub fn new(user: Option<CurrentUser>, theme_mode: ThemeMode) -> Self {
        Self {
            auth: AuthState { current_user: user },
            theme_mode,
        }
    }

    pub fn reduce(&mut self, action: StoreAction) {
        match action {
            StoreAction::ToggleThemeMode => self.theme_mode = self.theme_mode.toggled(),
            StoreAction::Logout => self.auth.current_user = None,
        }
    }
}

/// Capability the navigation bar needs from the global store.
pub trait NavStore {
    fn auth_state(&self) -> AuthState;
    fn theme_mode(&self) -> ThemeMode;
    fn dispatch_theme_toggle(&self);
    fn dispatch_logout(&self);
}

/// [`NavStore`] over a Dioxus signal. Reads subscribe the calling component,
/// so a dispatch re-renders every reader.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl AppStore {
    pub fn new(state: Signal<AppState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Signal<AppState> {
        self.state
    }

    pub fn dispatch(&self, action: StoreAction) {
        let mut state = self.state;
        let theme_mode = {
            let mut current = state.write();
            current.reduce(action);
            current.theme_mode
        };
        debug!(?action, ?theme_mode, "store: dispatched");

        if action == StoreAction::ToggleThemeMode {
            if let Err(err) = storage::save_theme_mode(theme_mode) {
                warn!("store: theme mode not persisted ({err})");
            }
        }
    }
}

impl NavStore for AppStore {
    fn auth_state(&self) -> AuthState {
        self.state.read().auth.clone()
    }

    fn theme_mode(&self) -> ThemeMode {
        self.state.read().theme_mode
    }

    fn dispatch_theme_toggle(&self) {
        self.dispatch(StoreAction::ToggleThemeMode);
    }

    fn dispatch_logout(&self) {
        self.dispatch(StoreAction::Logout);
    }
}

/// Create the app store for the calling scope, restoring the persisted theme.
pub fn use_app_store(user: impl FnOnce() -> Option<CurrentUser>) -> AppStore {
    let state = use_signal(move || {
        let theme_mode = storage::load_theme_mode().unwrap_or_else(|err| {
            warn!("store: falling back to default theme ({err})");
            ThemeMode::default()
        });
        AppState::new(user(), theme_mode)
    });
    AppStore::new(state)
}
