use leptos::prelude::*;

use crate::layout::nav_context::NavContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::{use_session, SessionProvider};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

/// Builds the navigation controller on top of the restored session and
/// wires it to browser history before the first render.
#[component]
fn AppShell() -> impl IntoView {
    let session = use_session();

    let nav = NavContext::new(session.is_active());
    provide_context(nav);
    nav.init_history_integration();

    view! {
        <AppRoutes />
    }
}
