use leptos::*;

/// Placeholder shown inside an accordion that was given no items.
#[component]
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <div class="accordion-empty">
            <span class="accordion-empty-text">{children()}</span>
        </div>
    }
}
