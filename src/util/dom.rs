//! DOM measurement, event decoding, and listener wiring.
//!
//! Without the `csr` feature there is no document: [`DomMeasure`] reports an
//! empty viewport and no dialogs, and configuration falls back to defaults.

use widgets::config::SiteConfig;
use widgets::geometry::{Measure, Size};
use widgets::modal::ModalId;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use widgets::consts::CONTROL_CLASS;
#[cfg(feature = "csr")]
use widgets::geometry::Point;
#[cfg(feature = "csr")]
use widgets::modal::PointerOrigin;
#[cfg(feature = "csr")]
use widgets::registry::ModalRegistry;

#[cfg(feature = "csr")]
use crate::state::modals::{ModalControls, dismiss_all, is_dismiss_key};

/// Id of the optional `<script type="application/json">` block holding a [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Live measurements: window inner size and each dialog's bounding box, looked
/// up by element id.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomMeasure;

impl Measure for DomMeasure {
    fn viewport(&self) -> Size {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Size::default();
            };
            let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
            };
            Size::new(dimension(window.inner_width()), dimension(window.inner_height()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Size::default()
        }
    }

    fn modal_size(&self, id: &ModalId) -> Option<Size> {
        #[cfg(feature = "csr")]
        {
            let element = web_sys::window()?.document()?.get_element_by_id(id.as_str())?;
            let rect = element.get_bounding_client_rect();
            Some(Size::new(rect.width(), rect.height()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            None
        }
    }
}

/// Read the page's [`SiteConfig`], falling back to defaults.
///
/// Only the lookup of the `#site-config` block is browser-specific; the
/// fallback rules live in [`SiteConfig::from_page`].
pub fn read_site_config() -> SiteConfig {
    #[cfg(feature = "csr")]
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    #[cfg(not(feature = "csr"))]
    let text: Option<String> = None;

    SiteConfig::from_page(text.as_deref())
}

/// Pointer position of a mouse event in viewport pixels.
#[cfg(feature = "csr")]
pub fn pointer(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Whether a pointer-down landed on a header control or on the bare header.
#[cfg(feature = "csr")]
pub fn pointer_origin(ev: &web_sys::MouseEvent) -> PointerOrigin {
    let selector = format!(".{CONTROL_CLASS}");
    let on_control = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&selector).ok().flatten())
        .is_some();
    if on_control { PointerOrigin::Control } else { PointerOrigin::Header }
}

/// Follow pointer motion and release anywhere on the page for one dialog.
///
/// Listeners live on `window` so a drag survives the pointer leaving the
/// header. They are removed when the owning component is cleaned up.
#[cfg(feature = "csr")]
pub fn bind_drag_listeners(controls: ModalControls) {
    let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
        if controls.pointer_move(pointer(&ev), &DomMeasure) {
            ev.prevent_default();
        }
    });
    let on_up = window_event_listener(leptos::ev::mouseup, move |_| controls.pointer_up());
    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
    });
}

/// Close every dialog on Escape.
#[cfg(feature = "csr")]
pub fn bind_escape_listener(registry: RwSignal<ModalRegistry>) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            log::debug!("escape: dismissing dialogs");
            dismiss_all(registry);
        }
    });
    on_cleanup(move || handle.remove());
}
