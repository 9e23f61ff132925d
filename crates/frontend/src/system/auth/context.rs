use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

/// Session holder: at most one authenticated identity at a time, mutated
/// only through `login` and `logout`. Injected through context rather than
/// living in ambient global state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    /// Rehydrates the initial session from the durable copy; an absent or
    /// malformed payload starts anonymous.
    pub fn restore() -> Self {
        let restored = storage::load_session();
        match &restored {
            Some(user) => log::info!("session restored for {}", user.email),
            None => log::debug!("no durable session, starting anonymous"),
        }
        Self {
            user: RwSignal::new(restored),
        }
    }

    /// Stores the identity in memory and in the durable copy,
    /// overwriting any prior session.
    pub fn login(&self, identity: SessionUser) {
        log::info!("session opened for {}", identity.email);
        storage::save_session(&identity);
        self.user.set(Some(identity));
    }

    /// Clears both the in-memory and the durable copy.
    pub fn logout(&self) {
        log::info!("session closed");
        storage::clear_session();
        self.user.set(None);
    }

    pub fn current(&self) -> Signal<Option<SessionUser>> {
        self.user.into()
    }

    pub fn is_active(&self) -> Signal<bool> {
        let user = self.user;
        Signal::derive(move || user.with(|u| u.is_some()))
    }

    pub fn is_admin(&self) -> Signal<bool> {
        let user = self.user;
        Signal::derive(move || user.with(|u| u.as_ref().map(SessionUser::is_admin).unwrap_or(false)))
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    provide_context(SessionContext::restore());

    children()
}

/// Hook to access the session holder
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
