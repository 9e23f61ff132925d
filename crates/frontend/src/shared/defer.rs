use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Holds at most one pending cosmetic timer for the owning view.
///
/// Scheduling replaces (and thereby cancels) whatever was pending, and the
/// slot is emptied when the owner is cleaned up, so a callback can never
/// fire into a view that no longer exists.
#[derive(Clone, Copy)]
pub struct DeferSlot {
    handle: StoredValue<Option<Timeout>, LocalStorage>,
}

impl DeferSlot {
    pub fn new() -> Self {
        let handle = StoredValue::new_local(None);
        on_cleanup(move || handle.set_value(None));
        Self { handle }
    }

    pub fn schedule(&self, ms: u32, callback: impl FnOnce() + 'static) {
        self.handle.set_value(Some(Timeout::new(ms, callback)));
    }

    pub fn cancel(&self) {
        self.handle.set_value(None);
    }
}

impl Default for DeferSlot {
    fn default() -> Self {
        Self::new()
    }
}
