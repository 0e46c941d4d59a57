//! Screen-space geometry shared by the modal state machine.
//!
//! All values are CSS pixels relative to the viewport's top-left corner,
//! matching what `clientX` / `getBoundingClientRect` report in the browser.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::modal::ModalId;

/// A point in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One measurement snapshot: the viewport and a single dialog's box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub viewport: Size,
    pub modal: Size,
}

impl Layout {
    #[must_use]
    pub fn new(viewport: Size, modal: Size) -> Self {
        Self { viewport, modal }
    }

    /// Largest top-left that still keeps the dialog inside the viewport.
    ///
    /// Never negative: a dialog larger than the viewport gets `0` on that axis.
    #[must_use]
    pub fn max_position(&self) -> Point {
        Point {
            x: (self.viewport.width - self.modal.width).max(0.0),
            y: (self.viewport.height - self.modal.height).max(0.0),
        }
    }

    /// Clamp a candidate top-left into `[0, viewport - modal]` on both axes.
    #[must_use]
    pub fn clamp(&self, candidate: Point) -> Point {
        let max = self.max_position();
        Point {
            x: clamp_axis(candidate.x, max.x),
            y: clamp_axis(candidate.y, max.y),
        }
    }

    /// Top-left that centres the dialog, clamped like any other position.
    #[must_use]
    pub fn centered(&self) -> Point {
        self.clamp(Point {
            x: (self.viewport.width - self.modal.width) / 2.0,
            y: (self.viewport.height - self.modal.height) / 2.0,
        })
    }
}

/// `max(0, min(value, max))`.
///
/// Written out instead of `f64::clamp`, which panics when `max < 0`.
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Source of live measurements.
///
/// The front end implements this against the DOM; tests use [`Layout`] or a
/// hand-built map. Returning `None` from [`Measure::modal_size`] means the
/// dialog's element could not be found.
pub trait Measure {
    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Current rendered size of the dialog with the given id.
    fn modal_size(&self, id: &ModalId) -> Option<Size>;

    /// Both measurements at once, if the dialog exists.
    fn layout(&self, id: &ModalId) -> Option<Layout> {
        self.modal_size(id).map(|modal| Layout::new(self.viewport(), modal))
    }
}

/// A fixed snapshot measures every dialog as the same size.
impl Measure for Layout {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn modal_size(&self, _id: &ModalId) -> Option<Size> {
        Some(self.modal)
    }
}
