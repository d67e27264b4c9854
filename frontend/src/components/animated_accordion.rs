use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use shared::{AnimatedState, Item, Phase, Section, TransitionConfig};

use crate::components::accordion::AccordionClasses;
use crate::components::empty_state::EmptyState;
use crate::i18n::use_i18n;

/// Class list of the content node for a transition phase, mirroring the
/// enter/exit class convention used by `style.css`.
pub fn content_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => {
            "animated-accordion-content accordion-content-enter accordion-content-enter-active"
        }
        Phase::Open => "animated-accordion-content accordion-content-enter-done",
        Phase::Exiting => {
            "animated-accordion-content accordion-content-exit accordion-content-exit-active"
        }
        Phase::Closed => "animated-accordion-content",
    }
}

/// Inline animation duration for a phase, so CSS timing follows the config.
pub fn content_style(phase: Phase, config: TransitionConfig) -> String {
    match phase {
        Phase::Entering => format!("animation-duration: {}ms;", config.enter_ms),
        Phase::Exiting => format!("animation-duration: {}ms;", config.exit_ms),
        Phase::Open | Phase::Closed => String::new(),
    }
}

/// Exclusive accordion whose content plays an enter transition on mount and
/// stays mounted through an exit transition after closing.
///
/// Each started transition arms a one-shot timer keyed by item index. Arming
/// a new timer for the same item drops (and so cancels) the previous one.
#[component]
pub fn AnimatedAccordion(
    #[prop(into)] items: Vec<Item>,
    #[prop(optional)] config: Option<TransitionConfig>,
) -> impl IntoView {
    let classes = AccordionClasses::for_section(Section::Animated);

    if items.is_empty() {
        let i18n = use_i18n();
        return view! {
            <div class={classes.root}>
                <EmptyState>{move || i18n.t("accordion.empty")}</EmptyState>
            </div>
        }
        .into_view();
    }

    let config = config.unwrap_or_default();
    let state = create_rw_signal(AnimatedState::new(config));
    let timers: Rc<RefCell<HashMap<usize, Timeout>>> = Rc::new(RefCell::new(HashMap::new()));

    let timers_for_cleanup = timers.clone();
    on_cleanup(move || {
        timers_for_cleanup.borrow_mut().clear();
    });

    let toggle = Callback::new(move |index: usize| {
        let scheduled = state
            .try_update(|s| s.toggle(index))
            .unwrap_or_default();
        log::debug!(
            "animated accordion: toggled {} -> open {:?}",
            index,
            state.with_untracked(|s| s.open_index())
        );

        for entry in scheduled {
            let ticket = entry.ticket;
            let timeout = Timeout::new(entry.delay_ms, move || {
                if let Some(Some(phase)) = state.try_update(|s| s.complete(ticket)) {
                    log::debug!(
                        "animated accordion: transition of {} finished as {:?}",
                        ticket.index,
                        phase
                    );
                }
            });
            timers.borrow_mut().insert(ticket.index, timeout);
        }
    });

    view! {
        <div class={classes.root}>
            {items.into_iter().enumerate().map(|(index, item)| {
                let content = item.content;
                let phase = Signal::derive(move || state.with(|s| s.phase(index)));
                view! {
                    <div class={classes.item}>
                        <div class={classes.header} on:click=move |_| toggle.call(index)>
                            {item.title}
                        </div>
                        <Show when=move || phase.get().is_mounted()>
                            <div
                                class=move || content_class(phase.get())
                                style=move || content_style(phase.get(), config)
                            >
                                {content.clone()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
