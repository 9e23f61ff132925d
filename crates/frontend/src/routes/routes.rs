use leptos::prelude::*;

use crate::layout::nav_context::{use_nav, Screen};
use crate::pages::admin::AdminDashboard;
use crate::pages::home::HomePage;
use crate::pages::login::AuthPage;
use crate::system::auth::guard::RequireAdmin;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_nav();

    // The transitioning flag only drives the fade styling
    let shell_class = move || {
        if nav.transitioning.get() {
            "screen screen--transitioning"
        } else {
            "screen"
        }
    };

    // Previous screen tags the shell so CSS can pick the fade direction
    let from_screen = move || nav.previous.get().map(|s| s.code());

    view! {
        <main class=shell_class data-from=from_screen>
            {move || match nav.current.get() {
                Screen::Home => view! { <HomePage /> }.into_any(),
                Screen::Login => view! { <AuthPage /> }.into_any(),
                Screen::Admin => view! {
                    <RequireAdmin>
                        <AdminDashboard />
                    </RequireAdmin>
                }
                .into_any(),
            }}
        </main>
    }
}
