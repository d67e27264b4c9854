use leptos::*;
use shared::{ExclusiveState, Item, Section};

use crate::components::accordion::{AccordionClasses, AccordionList};

/// Accordion with at most one section open. Opening a section closes the
/// one that was open before.
#[component]
pub fn BasicAccordion(#[prop(into)] items: Vec<Item>) -> impl IntoView {
    let state = create_rw_signal(ExclusiveState::new());

    let on_toggle = move |index: usize| {
        state.update(|s| {
            let open = s.toggle(index);
            log::debug!("basic accordion: toggled {} -> open {:?}", index, open);
        });
    };

    view! {
        <AccordionList
            classes=AccordionClasses::for_section(Section::Basic)
            items=items
            is_open=move |index: usize| state.with(|s| s.is_open(index))
            on_toggle=on_toggle
        />
    }
}
