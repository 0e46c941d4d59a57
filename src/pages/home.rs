//! The single page: navigation, clocks, and the three dialogs.

use leptos::prelude::*;
use widgets::config::ClockConfig;
use widgets::registry::ModalRegistry;

use crate::components::clock_panel::ClockPanel;
use crate::components::modal_window::ModalWindow;
use crate::components::sections::{AboutSection, ExperienceSection, ProjectsSection};
use crate::state::modals::{ModalControls, SiteModal};
use crate::util::dom::DomMeasure;

#[component]
pub fn HomePage(clock: ClockConfig) -> impl IntoView {
    let registry = expect_context::<RwSignal<ModalRegistry>>();

    let nav = SiteModal::ALL
        .into_iter()
        .map(|modal| {
            let controls = ModalControls::new(modal, registry);
            view! {
                <button class="nav__link" on:click=move |_| controls.open(&DomMeasure)>
                    {modal.title()}
                </button>
            }
        })
        .collect_view();

    view! {
        <main class="home">
            <nav class="nav">{nav}</nav>
            <ClockPanel config=clock/>

            <ModalWindow modal=SiteModal::About>
                <AboutSection/>
            </ModalWindow>
            <ModalWindow modal=SiteModal::Projects>
                <ProjectsSection/>
            </ModalWindow>
            <ModalWindow modal=SiteModal::Experience>
                <ExperienceSection/>
            </ModalWindow>
        </main>
    }
}
