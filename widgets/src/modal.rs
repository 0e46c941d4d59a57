//! Per-dialog state machine.
//!
//! A [`Modal`] tracks whether its dialog is shown, whether it fills the
//! viewport, and where its windowed top-left sits. Dragging is a small
//! gesture state carried between pointer-down and pointer-up: the offset
//! captured at pointer-down keeps the dialog pinned under the cursor for the
//! rest of the gesture.
//!
//! Operations that need the dialog's rendered size take a [`Layout`]
//! measured at call time, never a cached one, so content that changes size
//! mid-drag is still clamped correctly.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CURSOR_GRABBING, CURSOR_MOVE};
use crate::geometry::{Layout, Point};

/// Identifier of a dialog; the id of its root element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(pub String);

impl ModalId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModalId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ModalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Where a pointer-down landed inside the dialog's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOrigin {
    /// Bare header area: the drag handle.
    Header,
    /// A header control (close / fullscreen button). Never starts a drag.
    Control,
}

/// State of one dialog.
///
/// Invariant: `is_dragging` implies `!is_fullscreen`.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    id: ModalId,
    header_id: String,
    is_open: bool,
    is_fullscreen: bool,
    is_dragging: bool,
    position: Point,
    drag_offset: Point,
}

impl Modal {
    /// A closed, windowed dialog at the viewport origin.
    #[must_use]
    pub fn new(id: impl Into<ModalId>, header_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header_id: header_id.into(),
            is_open: false,
            is_fullscreen: false,
            is_dragging: false,
            position: Point::default(),
            drag_offset: Point::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModalId {
        &self.id
    }

    /// Element id of the header that acts as the drag handle.
    #[must_use]
    pub fn header_id(&self) -> &str {
        &self.header_id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Windowed top-left in viewport pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Pointer position minus top-left, as captured at drag start.
    #[must_use]
    pub fn drag_offset(&self) -> Point {
        self.drag_offset
    }

    /// Mark the dialog shown. Closing the others is the registry's job.
    pub(crate) fn show(&mut self) {
        self.is_open = true;
    }

    /// Hide the dialog and drop it back to windowed mode.
    pub fn close(&mut self) {
        self.is_open = false;
        self.is_fullscreen = false;
    }

    /// Move the windowed top-left so the dialog sits in the middle of the viewport.
    pub fn center(&mut self, layout: Layout) {
        self.position = layout.centered();
    }

    /// Flip fullscreen. Leaving fullscreen re-centres when a layout is available.
    ///
    /// Entering fullscreen ends any drag in progress. Returns the new
    /// fullscreen state.
    pub fn toggle_fullscreen(&mut self, layout: Option<Layout>) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        if self.is_fullscreen {
            self.is_dragging = false;
        } else if let Some(layout) = layout {
            self.center(layout);
        }
        self.is_fullscreen
    }

    /// Begin a drag from a pointer-down at `pointer`.
    ///
    /// Ignored in fullscreen and for presses on header controls. Returns
    /// whether a drag started.
    pub fn start_drag(&mut self, pointer: Point, origin: PointerOrigin) -> bool {
        if self.is_fullscreen || origin == PointerOrigin::Control {
            return false;
        }
        self.is_dragging = true;
        self.drag_offset = pointer.offset_from(self.position);
        true
    }

    /// Follow the pointer, keeping the whole dialog inside the viewport.
    ///
    /// Returns `false` (and leaves the position untouched) when no drag is
    /// in progress.
    pub fn update_drag(&mut self, pointer: Point, layout: Layout) -> bool {
        if !self.is_dragging {
            return false;
        }
        self.position = layout.clamp(pointer.offset_from(self.drag_offset));
        true
    }

    /// Finish the drag. Returns whether one was in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.is_dragging, false)
    }

    /// Space-separated class list for the dialog's root element.
    #[must_use]
    pub fn class_list(&self) -> String {
        let mut classes = String::from("modal");
        if self.is_open {
            classes.push_str(" active");
        }
        if self.is_fullscreen {
            classes.push_str(" fullscreen");
        }
        if self.is_dragging {
            classes.push_str(" dragging");
        }
        classes
    }

    /// CSS cursor for the header.
    #[must_use]
    pub fn header_cursor(&self) -> &'static str {
        if self.is_dragging { CURSOR_GRABBING } else { CURSOR_MOVE }
    }
}
