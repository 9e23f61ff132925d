use leptos::prelude::*;

use crate::layout::nav_context::{use_nav, Screen};

use super::context::use_session;

/// Renders children only while an admin session exists; anyone else is
/// rerouted to the home screen. Covers stale or forged history entries
/// that point at the dashboard after logout.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let is_admin = session.is_admin();

    Effect::new(move |_| {
        if !is_admin.get() {
            nav.replace(Screen::Home);
        }
    });

    view! {
        <Show when=move || is_admin.get()>
            {children()}
        </Show>
    }
}
