use leptos::*;
use shared::{SampleCatalog, Section};

use crate::catalog::load_samples;
use crate::components::alert::Alert;
use crate::components::animated_accordion::AnimatedAccordion;
use crate::components::basic_accordion::BasicAccordion;
use crate::components::button::Button;
use crate::components::multi_accordion::MultiAccordion;
use crate::components::nested_accordion::NestedAccordion;
use crate::components::section_header::{HeaderLevel, SectionHeader};
use crate::i18n::{provide_i18n, use_i18n, Language};

#[component]
pub fn App() -> impl IntoView {
    provide_i18n(Language::default());
    let i18n = use_i18n();

    let body = match load_samples() {
        Ok(catalog) => view! { <Showcase catalog=catalog /> }.into_view(),
        Err(e) => {
            log::error!("Failed to load sample catalog: {}", e);
            view! {
                <Alert title=i18n.t("error.catalog") detail=e.to_string() />
            }
            .into_view()
        }
    };

    view! {
        <div class="App">
            <header class="page-header">
                <SectionHeader level=HeaderLevel::H1>
                    {move || i18n.t("page.title")}
                </SectionHeader>
                <LanguageSwitch />
            </header>
            {body}
        </div>
    }
}

/// All four accordion variants, each with its own item list and state.
#[component]
fn Showcase(catalog: SampleCatalog) -> impl IntoView {
    let SampleCatalog {
        basic,
        animated,
        multi,
        nested,
        transition,
    } = catalog;

    view! {
        <SectionTitle section=Section::Basic />
        <BasicAccordion items=basic />

        <SectionTitle section=Section::Animated />
        <AnimatedAccordion items=animated config=transition />

        <SectionTitle section=Section::Multi />
        <MultiAccordion items=multi />

        <SectionTitle section=Section::Nested />
        <NestedAccordion items=nested />
    }
}

#[component]
fn SectionTitle(section: Section) -> impl IntoView {
    let i18n = use_i18n();
    let key = format!("section.{}", section);

    view! {
        <SectionHeader>{move || i18n.t(&key)}</SectionHeader>
    }
}

#[component]
fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="language-switch">
            <span class="language-label">{move || i18n.t("language.label")}</span>
            {Language::ALL.into_iter().map(|language| view! {
                <Button
                    active=Signal::derive(move || i18n.language() == language)
                    on_click=Callback::new(move |_| i18n.set_language(language))
                >
                    {language.label()}
                </Button>
            }).collect_view()}
        </div>
    }
}
