#[cfg(test)]
#[path = "modals_test.rs"]
mod modals_test;

use leptos::prelude::*;
use widgets::geometry::{Measure, Point};
use widgets::modal::{Modal, ModalId, PointerOrigin};
use widgets::registry::ModalRegistry;

/// The dialogs on the page, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteModal {
    About,
    Projects,
    Experience,
}

impl SiteModal {
    pub const ALL: [SiteModal; 3] = [Self::About, Self::Projects, Self::Experience];

    /// Id of the dialog's root element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::About => "modal",
            Self::Projects => "projectsModal",
            Self::Experience => "experienceModal",
        }
    }

    /// Id of the dialog's header (the drag handle).
    #[must_use]
    pub fn header_id(self) -> &'static str {
        match self {
            Self::About => "modalHeader",
            Self::Projects => "projectsModalHeader",
            Self::Experience => "experienceModalHeader",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
        }
    }

    #[must_use]
    pub fn modal_id(self) -> ModalId {
        ModalId::new(self.element_id())
    }
}

/// Registry with every [`SiteModal`] registered once, in order.
#[must_use]
pub fn site_registry() -> ModalRegistry {
    let mut registry = ModalRegistry::new();
    for modal in SiteModal::ALL {
        registry.register(Modal::new(modal.element_id(), modal.header_id()));
    }
    registry
}

/// Whether a `KeyboardEvent.key` value dismisses dialogs.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Close every dialog (Escape).
pub fn dismiss_all(registry: RwSignal<ModalRegistry>) {
    if registry.with_untracked(|r| r.active().is_none()) {
        return;
    }
    registry.update(|r| r.close_all_except(None));
}

/// Open / close / fullscreen / drag controls for one named dialog.
///
/// Cheap to copy into event handlers. Measurements are passed in so the
/// browser can hand over the live DOM and tests a fixed layout.
#[derive(Clone, Copy, Debug)]
pub struct ModalControls {
    modal: SiteModal,
    registry: RwSignal<ModalRegistry>,
}

impl ModalControls {
    #[must_use]
    pub fn new(modal: SiteModal, registry: RwSignal<ModalRegistry>) -> Self {
        Self { modal, registry }
    }

    #[must_use]
    pub fn modal(self) -> SiteModal {
        self.modal
    }

    /// Current state of this dialog. Tracked: re-runs reactive readers on change.
    #[must_use]
    pub fn snapshot(self) -> Option<Modal> {
        let id = self.modal.modal_id();
        self.registry.with(|r| r.get(&id).cloned())
    }

    fn is_dragging(self) -> bool {
        let id = self.modal.modal_id();
        self.registry.with_untracked(|r| r.dragging().is_some_and(|m| m.id() == &id))
    }

    pub fn open(self, measure: &impl Measure) {
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.open(&id, measure);
        });
    }

    pub fn close(self) {
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.close(&id);
        });
    }

    pub fn toggle_fullscreen(self, measure: &impl Measure) {
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.toggle_fullscreen(&id, measure);
        });
    }

    pub fn recenter(self, measure: &impl Measure) {
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.center(&id, measure);
        });
    }

    /// Pointer-down on the header.
    pub fn pointer_down(self, pointer: Point, origin: PointerOrigin) {
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.start_drag(&id, pointer, origin);
        });
    }

    /// Pointer-move anywhere on the page. Returns whether the dialog moved.
    ///
    /// Checked untracked first so idle pointer motion never notifies
    /// subscribers.
    pub fn pointer_move(self, pointer: Point, measure: &impl Measure) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let id = self.modal.modal_id();
        self.registry
            .try_update(|r| r.update_drag(&id, pointer, measure))
            .unwrap_or(false)
    }

    /// Pointer-up anywhere on the page.
    pub fn pointer_up(self) {
        if !self.is_dragging() {
            return;
        }
        let id = self.modal.modal_id();
        self.registry.update(|r| {
            r.end_drag(&id);
        });
    }
}
