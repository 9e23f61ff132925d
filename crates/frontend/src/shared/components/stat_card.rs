use leptos::prelude::*;

/// Card with one headline number for the dashboard overview
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Headline value
    value: usize,
    /// Secondary line under the value (optional)
    #[prop(optional, into)]
    caption: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
            {move || caption.get().map(|text| view! {
                <div class="stat-card__caption">{text}</div>
            })}
        </div>
    }
}
