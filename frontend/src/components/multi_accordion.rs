use leptos::*;
use shared::{Item, MultiState, Section};

use crate::components::accordion::{AccordionClasses, AccordionList};

/// Accordion whose sections open and close independently of each other.
#[component]
pub fn MultiAccordion(#[prop(into)] items: Vec<Item>) -> impl IntoView {
    let state = create_rw_signal(MultiState::new());

    let on_toggle = move |index: usize| {
        state.update(|s| {
            let open = s.toggle(index);
            log::debug!(
                "multi accordion: toggled {} -> {} ({} open)",
                index,
                if open { "open" } else { "closed" },
                s.len()
            );
        });
    };

    view! {
        <AccordionList
            classes=AccordionClasses::for_section(Section::Multi)
            items=items
            is_open=move |index: usize| state.with(|s| s.is_open(index))
            on_toggle=on_toggle
        />
    }
}
