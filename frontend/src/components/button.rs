use leptos::*;

/// Toggle-style button; `active` picks the highlighted variant.
#[component]
pub fn Button(
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(into)] on_click: Callback<ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm"
        }
    };

    view! {
        <button type="button" class=class on:click=move |ev| on_click.call(ev)>
            {children()}
        </button>
    }
}
