pub mod add_account;
pub mod add_worker;
pub mod overview;

use leptos::prelude::*;

use crate::layout::nav_context::{use_nav, Screen};
use crate::shared::components::ui::Button;
use crate::system::auth::context::use_session;

use add_account::AddAccountSection;
use add_worker::AddWorkerSection;
use overview::OverviewSection;

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Overview,
    AddWorker,
    AddAccount,
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let nav = use_nav();
    let (section, set_section) = create_signal(Section::Overview);

    let user_name = move || {
        session
            .current()
            .with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };

    let on_logout = move |_| {
        session.logout();
        nav.navigate(Screen::Home);
    };

    let tab = move |target: Section, label: &'static str| {
        view! {
            <button
                class=move || {
                    if section.get() == target {
                        "dashboard__tab dashboard__tab--active"
                    } else {
                        "dashboard__tab"
                    }
                }
                on:click=move |_| set_section.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__brand">"MotionMatrix"</span>
                <div class="dashboard__user">
                    <span class="dashboard__user-name">{user_name}</span>
                    <Button variant="ghost" on_click=Callback::new(on_logout)>
                        "Log out"
                    </Button>
                </div>
            </header>

            <nav class="dashboard__tabs">
                {tab(Section::Overview, "Overview")}
                {tab(Section::AddWorker, "Add worker")}
                {tab(Section::AddAccount, "Add account")}
            </nav>

            <section class="dashboard__body">
                {move || match section.get() {
                    Section::Overview => view! { <OverviewSection /> }.into_any(),
                    Section::AddWorker => view! { <AddWorkerSection /> }.into_any(),
                    Section::AddAccount => view! { <AddAccountSection /> }.into_any(),
                }}
            </section>
        </div>
    }
}
