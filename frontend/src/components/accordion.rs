use leptos::*;
use shared::{Item, Section};

use crate::components::empty_state::EmptyState;
use crate::i18n::use_i18n;

/// Class labels of one accordion level. Styling hooks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionClasses {
    pub root: &'static str,
    pub item: &'static str,
    pub header: &'static str,
    pub content: &'static str,
}

impl AccordionClasses {
    /// Second level of the nested accordion.
    pub const NESTED_SUB: AccordionClasses = AccordionClasses {
        root: "nested-sub-items",
        item: "nested-sub-item",
        header: "nested-sub-header",
        content: "nested-sub-content",
    };

    pub const fn for_section(section: Section) -> Self {
        match section {
            Section::Basic => AccordionClasses {
                root: "basic-accordion",
                item: "basic-accordion-item",
                header: "basic-accordion-header",
                content: "basic-accordion-content",
            },
            Section::Animated => AccordionClasses {
                root: "animated-accordion",
                item: "animated-accordion-item",
                header: "animated-accordion-header",
                content: "animated-accordion-content",
            },
            Section::Multi => AccordionClasses {
                root: "multi-accordion",
                item: "multi-accordion-item",
                header: "multi-accordion-header",
                content: "multi-accordion-content",
            },
            Section::Nested => AccordionClasses {
                root: "nested-accordion",
                item: "nested-accordion-item",
                header: "nested-accordion-header",
                content: "nested-accordion-content",
            },
        }
    }
}

/// One header/content pair. The body is mounted only while `open` holds.
#[component]
pub fn AccordionSection(
    classes: AccordionClasses,
    #[prop(into)] title: String,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class={classes.item}>
            <div class={classes.header} on:click=move |_| on_toggle.call(())>
                {title}
            </div>
            <Show when=move || open.get()>
                <div class={classes.content}>{children()}</div>
            </Show>
        </div>
    }
}

/// Vertical list of [`AccordionSection`]s for a flat item sequence.
///
/// Open state lives with the caller; `is_open` is read reactively per row and
/// `on_toggle` receives the clicked row's index.
#[component]
pub fn AccordionList(
    classes: AccordionClasses,
    items: Vec<Item>,
    #[prop(into)] is_open: Callback<usize, bool>,
    #[prop(into)] on_toggle: Callback<usize>,
) -> impl IntoView {
    if items.is_empty() {
        let i18n = use_i18n();
        return view! {
            <div class={classes.root}>
                <EmptyState>{move || i18n.t("accordion.empty")}</EmptyState>
            </div>
        }
        .into_view();
    }

    view! {
        <div class={classes.root}>
            {items.into_iter().enumerate().map(|(index, item)| {
                let content = item.content;
                view! {
                    <AccordionSection
                        classes=classes
                        title=item.title
                        open=Signal::derive(move || is_open.call(index))
                        on_toggle=Callback::new(move |_| on_toggle.call(index))
                    >
                        {content.clone()}
                    </AccordionSection>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
