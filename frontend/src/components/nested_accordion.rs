use leptos::*;
use shared::{Item, NestedState, Section};

use crate::components::accordion::{AccordionClasses, AccordionList, AccordionSection};
use crate::components::empty_state::EmptyState;
use crate::i18n::use_i18n;

/// Two-level accordion. One top-level section is open at a time and, inside
/// it, one sub-section. Any top-level click collapses the sub level.
#[component]
pub fn NestedAccordion(#[prop(into)] items: Vec<Item>) -> impl IntoView {
    let state = create_rw_signal(NestedState::new());
    let classes = AccordionClasses::for_section(Section::Nested);

    if items.is_empty() {
        let i18n = use_i18n();
        return view! {
            <div class={classes.root}>
                <EmptyState>{move || i18n.t("accordion.empty")}</EmptyState>
            </div>
        }
        .into_view();
    }

    let toggle_top = move |index: usize| {
        state.update(|s| {
            let open = s.toggle_top(index);
            log::debug!("nested accordion: toggled section {} -> open {:?}", index, open);
        });
    };

    view! {
        <div class={classes.root}>
            {items.into_iter().enumerate().map(|(index, item)| {
                let Item { title, content, sub_items } = item;
                let sub_items = sub_items.unwrap_or_default();
                view! {
                    <AccordionSection
                        classes=classes
                        title=title
                        open=Signal::derive(move || state.with(|s| s.is_top_open(index)))
                        on_toggle=Callback::new(move |_| toggle_top(index))
                    >
                        {content.clone()}
                        <NestedSubItems parent=index items=sub_items.clone() state=state />
                    </AccordionSection>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}

/// Sub-sections of the open top-level section `parent`. Renders nothing for
/// an item without sub-items. Deeper levels are not rendered.
#[component]
fn NestedSubItems(parent: usize, items: Vec<Item>, state: RwSignal<NestedState>) -> impl IntoView {
    if items.is_empty() {
        return ().into_view();
    }

    let on_toggle = move |index: usize| {
        state.update(|s| {
            let open = s.toggle_sub(index);
            log::debug!(
                "nested accordion: toggled sub-section {} of {} -> open {:?}",
                index,
                parent,
                open
            );
        });
    };

    view! {
        <AccordionList
            classes=AccordionClasses::NESTED_SUB
            items=items
            is_open=move |index: usize| state.with(|s| s.is_sub_open(parent, index))
            on_toggle=on_toggle
        />
    }
    .into_view()
}
