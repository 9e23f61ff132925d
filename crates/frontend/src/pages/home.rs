use leptos::prelude::*;

use crate::layout::nav_context::{use_nav, Screen};
use crate::shared::components::ui::Button;
use crate::system::auth::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();
    let is_active = session.is_active();

    view! {
        <div class="home">
            <header class="home__header">
                <span class="home__brand">"MotionMatrix"</span>
                <Show
                    when=move || is_active.get()
                    fallback=move || view! {
                        <Button variant="ghost" on_click=Callback::new(move |_| nav.navigate(Screen::Login))>
                            "Sign in"
                        </Button>
                    }
                >
                    <Button variant="ghost" on_click=Callback::new(move |_| nav.navigate(Screen::Admin))>
                        "Open dashboard"
                    </Button>
                </Show>
            </header>

            <section class="home__hero">
                <h1>"Run your factory floor from one place"</h1>
                <p>
                    "MotionMatrix keeps departments, staff and daily output of a garment "
                    "production line in a single picture."
                </p>
                <Button on_click=Callback::new(move |_| nav.navigate(Screen::Login))>
                    "Get started"
                </Button>
            </section>

            <section class="home__features">
                <div class="home__feature">
                    <h3>"Departments"</h3>
                    <p>"Cutting to packaging, every line at a glance."</p>
                </div>
                <div class="home__feature">
                    <h3>"Staff"</h3>
                    <p>"Workers, supervisors and managers in one roster."</p>
                </div>
                <div class="home__feature">
                    <h3>"Accounts"</h3>
                    <p>"Role-based access for the people who run the floor."</p>
                </div>
            </section>
        </div>
    }
}
