//! Visitor and owner clocks.

use leptos::prelude::*;
use widgets::config::ClockConfig;

/// Two clocks side by side. Text is filled in by the first tick.
#[component]
pub fn ClockPanel(config: ClockConfig) -> impl IntoView {
    let viewer = RwSignal::new(String::new());
    let owner = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    crate::util::clock::start(&config, viewer, owner);

    let owner_label = format!("My time ({})", config.owner_timezone.replace('_', " "));

    view! {
        <div class="clocks">
            <div class="clock">
                <span class="clock__label">"Your time"</span>
                <span id=config.viewer_target class="clock__time">{move || viewer.get()}</span>
            </div>
            <div class="clock">
                <span class="clock__label">{owner_label}</span>
                <span id=config.owner_target class="clock__time">{move || owner.get()}</span>
            </div>
        </div>
    }
}
