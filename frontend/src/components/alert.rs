use leptos::*;

/// Error banner rendered in place of content that could not be built.
#[component]
pub fn Alert(
    #[prop(into)] title: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            <strong>{title}</strong>
            {detail.map(|d| view! {
                <div class="alert-detail">{d}</div>
            })}
        </div>
    }
}
