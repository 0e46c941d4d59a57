//! Ordered collection of every dialog on the page.
//!
//! The registry is the only place that can see more than one [`Modal`], so it
//! owns the single-open policy: opening a dialog first closes all the others.
//! It also routes per-id operations coming from the front end, logging and
//! ignoring ids that were never registered.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use log::{debug, warn};

use crate::geometry::{Measure, Point};
use crate::modal::{Modal, ModalId, PointerOrigin};

/// All registered dialogs, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalRegistry {
    modals: Vec<Modal>,
}

impl ModalRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dialog. Duplicate ids are not rejected.
    pub fn register(&mut self, modal: Modal) {
        debug!("registering modal {}", modal.id());
        self.modals.push(modal);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.modals.iter()
    }

    /// First dialog registered under `id`.
    #[must_use]
    pub fn get(&self, id: &ModalId) -> Option<&Modal> {
        self.modals.iter().find(|m| m.id() == id)
    }

    fn get_mut(&mut self, id: &ModalId) -> Option<&mut Modal> {
        let found = self.modals.iter_mut().find(|m| m.id() == id);
        if found.is_none() {
            warn!("no modal registered as {id}");
        }
        found
    }

    /// Number of dialogs currently shown.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.modals.iter().filter(|m| m.is_open()).count()
    }

    /// The dialog currently shown, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Modal> {
        self.modals.iter().find(|m| m.is_open())
    }

    /// The dialog currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&Modal> {
        self.modals.iter().find(|m| m.is_dragging())
    }

    /// Close every dialog whose id differs from `keep`. `None` closes them all.
    pub fn close_all_except(&mut self, keep: Option<&ModalId>) {
        for modal in self.modals.iter_mut().filter(|m| Some(m.id()) != keep) {
            if modal.is_open() {
                debug!("closing modal {}", modal.id());
            }
            modal.close();
        }
    }

    /// Show `id`, close everything else, and centre it in the viewport.
    ///
    /// Returns `false` for an unknown id. If the dialog cannot be measured it
    /// still opens, at its previous position.
    pub fn open(&mut self, id: &ModalId, measure: &impl Measure) -> bool {
        if self.get(id).is_none() {
            warn!("cannot open unknown modal {id}");
            return false;
        }
        self.close_all_except(Some(id));
        let layout = measure.layout(id);
        let Some(modal) = self.get_mut(id) else {
            return false;
        };
        modal.show();
        match layout {
            Some(layout) => modal.center(layout),
            None => warn!("modal {id} could not be measured; leaving it in place"),
        }
        debug!("opened modal {id}");
        true
    }

    /// Hide `id`. Returns `false` for an unknown id.
    pub fn close(&mut self, id: &ModalId) -> bool {
        let Some(modal) = self.get_mut(id) else {
            return false;
        };
        modal.close();
        debug!("closed modal {id}");
        true
    }

    /// Flip fullscreen on `id`, re-centring when it returns to windowed mode.
    ///
    /// Returns the new fullscreen state, or `None` for an unknown id.
    pub fn toggle_fullscreen(&mut self, id: &ModalId, measure: &impl Measure) -> Option<bool> {
        let layout = measure.layout(id);
        let modal = self.get_mut(id)?;
        let fullscreen = modal.toggle_fullscreen(layout);
        debug!("modal {id} fullscreen={fullscreen}");
        Some(fullscreen)
    }

    /// Re-centre `id` using a fresh measurement.
    pub fn center(&mut self, id: &ModalId, measure: &impl Measure) -> bool {
        let Some(layout) = measure.layout(id) else {
            warn!("modal {id} could not be measured; not centring");
            return false;
        };
        let Some(modal) = self.get_mut(id) else {
            return false;
        };
        modal.center(layout);
        true
    }

    /// Pointer-down on the header of `id`.
    pub fn start_drag(&mut self, id: &ModalId, pointer: Point, origin: PointerOrigin) -> bool {
        let Some(modal) = self.get_mut(id) else {
            return false;
        };
        let started = modal.start_drag(pointer, origin);
        if started {
            debug!("drag started on modal {id}");
        }
        started
    }

    /// Pointer-move anywhere on the page while `id` may be dragging.
    ///
    /// Not dragging is the common case and is silent.
    pub fn update_drag(&mut self, id: &ModalId, pointer: Point, measure: &impl Measure) -> bool {
        let Some(modal) = self.get_mut(id) else {
            return false;
        };
        if !modal.is_dragging() {
            return false;
        }
        let Some(layout) = measure.layout(id) else {
            warn!("modal {id} could not be measured mid-drag");
            return false;
        };
        modal.update_drag(pointer, layout)
    }

    /// Pointer-up anywhere on the page.
    pub fn end_drag(&mut self, id: &ModalId) -> bool {
        let ended = self.get_mut(id).is_some_and(Modal::end_drag);
        if ended {
            debug!("drag ended on modal {id}");
        }
        ended
    }
}
