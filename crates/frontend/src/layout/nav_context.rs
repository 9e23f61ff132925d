use std::collections::HashMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::shared::defer::DeferSlot;

/// Cosmetic fade delay between screens
const TRANSITION_MS: u32 = 200;

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Login,
    Admin,
}

impl Screen {
    pub fn code(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Login => "login",
            Screen::Admin => "admin",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "home" => Some(Screen::Home),
            "login" => Some(Screen::Login),
            "admin" => Some(Screen::Admin),
            _ => None,
        }
    }
}

/// Admission rule for screen changes: the admin screen requires an active
/// session, everything else passes through. A rejected request lands on
/// home rather than on the previous screen so that stale history entries
/// cannot leak the dashboard after logout.
pub fn resolve(requested: Screen, session_active: bool) -> Screen {
    if requested == Screen::Admin && !session_active {
        Screen::Home
    } else {
        requested
    }
}

#[derive(Clone, Copy)]
pub struct NavContext {
    pub current: RwSignal<Screen>,
    /// Kept only to pick the fade direction
    pub previous: RwSignal<Option<Screen>>,
    pub transitioning: RwSignal<bool>,
    session_active: Signal<bool>,
    pending: DeferSlot,
}

impl NavContext {
    pub fn new(session_active: Signal<bool>) -> Self {
        Self {
            current: RwSignal::new(Screen::Home),
            previous: RwSignal::new(None),
            transitioning: RwSignal::new(false),
            session_active,
            pending: DeferSlot::new(),
        }
    }

    /// Picks the initial screen from the `?screen=` query and subscribes to
    /// popstate so browser back/forward restores the recorded screen. The
    /// restore never re-runs side effects; it only swaps the identifier,
    /// re-checked against the session.
    pub fn init_history_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let initial = params
            .get("screen")
            .and_then(|code| Screen::from_code(code))
            .unwrap_or(Screen::Home);
        let initial = resolve(initial, self.session_active.get_untracked());
        self.current.set(initial);
        // Tag the entry we landed on so going back to it restores the screen
        self.write_entry(initial, true);

        let this = *self;
        window_event_listener(leptos::ev::popstate, move |ev: web_sys::PopStateEvent| {
            let recorded = serde_wasm_bindgen::from_value::<Screen>(ev.state())
                .unwrap_or(Screen::Home);
            let target = resolve(recorded, this.session_active.get_untracked());
            log::debug!("popstate: restoring screen '{}'", target.code());
            this.pending.cancel();
            this.previous.set(Some(this.current.get_untracked()));
            this.transitioning.set(false);
            this.current.set(target);
        });
    }

    /// Records a history entry for the destination and stages the swap.
    pub fn navigate(&self, requested: Screen) {
        let target = resolve(requested, self.session_active.get_untracked());
        if target == self.current.get_untracked() {
            return;
        }
        self.write_entry(target, false);
        self.begin_transition(target);
    }

    /// Swaps the screen without recording a history entry. Used by guards
    /// rerouting an inadmissible screen.
    pub fn replace(&self, requested: Screen) {
        let target = resolve(requested, self.session_active.get_untracked());
        if target == self.current.get_untracked() {
            return;
        }
        self.write_entry(target, true);
        self.pending.cancel();
        self.previous.set(Some(self.current.get_untracked()));
        self.transitioning.set(false);
        self.current.set(target);
    }

    fn write_entry(&self, screen: Screen, replace: bool) {
        let Some(w) = window() else {
            return;
        };
        let Ok(history) = w.history() else {
            return;
        };
        let state = serde_wasm_bindgen::to_value(&screen).unwrap_or(JsValue::NULL);
        let url = format!("?screen={}", screen.code());
        let result = if replace {
            history.replace_state_with_url(&state, "", Some(&url))
        } else {
            history.push_state_with_url(&state, "", Some(&url))
        };
        if result.is_err() {
            log::warn!("history entry for '{}' was not recorded", screen.code());
        }
    }

    /// Marks the transition, then swaps the active screen once the fade
    /// delay elapses. A newer navigation replaces the pending swap.
    fn begin_transition(&self, target: Screen) {
        log::debug!("screen transition -> '{}'", target.code());
        self.previous.set(Some(self.current.get_untracked()));
        self.transitioning.set(true);
        let this = *self;
        self.pending.schedule(TRANSITION_MS, move || {
            this.current.set(target);
            this.transitioning.set(false);
        });
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_requires_session() {
        assert_eq!(resolve(Screen::Admin, false), Screen::Home);
        assert_eq!(resolve(Screen::Admin, true), Screen::Admin);
    }

    #[test]
    fn test_public_screens_pass_through() {
        for screen in [Screen::Home, Screen::Login] {
            assert_eq!(resolve(screen, false), screen);
            assert_eq!(resolve(screen, true), screen);
        }
    }

    #[test]
    fn test_screen_code_round_trip() {
        for screen in [Screen::Home, Screen::Login, Screen::Admin] {
            assert_eq!(Screen::from_code(screen.code()), Some(screen));
        }
        assert_eq!(Screen::from_code("dashboard"), None);
    }
}
