use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum HeaderLevel {
    H1,
    #[default]
    H2,
}

/// Page or section heading above an accordion.
#[component]
pub fn SectionHeader(
    #[prop(optional)] level: HeaderLevel,
    children: Children,
) -> impl IntoView {
    match level {
        HeaderLevel::H1 => view! {
            <h1 class="page-title">{children()}</h1>
        }.into_view(),
        HeaderLevel::H2 => view! {
            <h2 class="section-title">{children()}</h2>
        }.into_view(),
    }
}
