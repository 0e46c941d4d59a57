//! Draggable, fullscreen-able dialog shell.

use leptos::prelude::*;
use widgets::consts::CONTROL_CLASS;
use widgets::modal::Modal;
use widgets::registry::ModalRegistry;

use crate::state::modals::{ModalControls, SiteModal};
use crate::util::dom::DomMeasure;

/// One dialog: header with drag handle and controls, then the body.
///
/// Always rendered; visibility comes from the `active` class so the element
/// keeps a measurable box while hidden.
#[component]
pub fn ModalWindow(modal: SiteModal, children: Children) -> impl IntoView {
    let registry = expect_context::<RwSignal<ModalRegistry>>();
    let controls = ModalControls::new(modal, registry);
    let state = Memo::new(move |_| controls.snapshot());

    #[cfg(feature = "csr")]
    crate::util::dom::bind_drag_listeners(controls);

    // toggle_fullscreen centres using the box measured while still fullscreen;
    // once the windowed class is applied, centre again on the real size.
    Effect::new(move |was_fullscreen: Option<bool>| {
        let fullscreen = state.with(|m| m.as_ref().is_some_and(Modal::is_fullscreen));
        if was_fullscreen == Some(true) && !fullscreen {
            controls.recenter(&DomMeasure);
        }
        fullscreen
    });

    let class = move || state.with(|m| m.as_ref().map_or_else(|| "modal".to_owned(), Modal::class_list));
    let left = move || state.with(|m| format!("{}px", m.as_ref().map_or(0.0, |m| m.position().x)));
    let top = move || state.with(|m| format!("{}px", m.as_ref().map_or(0.0, |m| m.position().y)));
    let header_id = move || state.with(|m| m.as_ref().map(|m| m.header_id().to_owned()));
    let cursor = move || state.with(|m| m.as_ref().map_or("move", Modal::header_cursor));

    let on_header_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        controls.pointer_down(crate::util::dom::pointer(&ev), crate::util::dom::pointer_origin(&ev));
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let control_class = format!("{CONTROL_CLASS} modal__control");

    view! {
        <section id=modal.element_id() class=class style:left=left style:top=top role="dialog">
            <header id=header_id class="modal__header" style:cursor=cursor on:mousedown=on_header_down>
                <h2 class="modal__title">{modal.title()}</h2>
                <div class="modal__controls">
                    <button
                        class=control_class.clone()
                        title="Toggle fullscreen"
                        on:click=move |_| controls.toggle_fullscreen(&DomMeasure)
                    >
                        "⛶"
                    </button>
                    <button class=control_class title="Close" on:click=move |_| controls.close()>
                        "✕"
                    </button>
                </div>
            </header>
            <div class="modal__body">{children()}</div>
        </section>
    }
}
