//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::modals::site_registry;
use crate::util::dom::read_site_config;

/// Root application component.
///
/// Builds the modal registry, provides it as context, installs the global
/// Escape handler, and renders the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = read_site_config();
    let registry = RwSignal::new(site_registry());
    provide_context(registry);

    #[cfg(feature = "csr")]
    crate::util::dom::bind_escape_listener(registry);

    view! {
        <Title text="Home"/>
        <HomePage clock=config.clock/>
    }
}
