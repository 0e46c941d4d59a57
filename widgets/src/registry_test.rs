#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;
use crate::geometry::{Layout, Size};
use crate::log_capture_test;

// =============================================================
// Helpers
// =============================================================

const VIEWPORT: Size = Size { width: 1280.0, height: 720.0 };

/// Per-dialog sizes; ids not in the map are treated as missing elements.
struct Sizes(HashMap<ModalId, Size>);

impl Measure for Sizes {
    fn viewport(&self) -> Size {
        VIEWPORT
    }

    fn modal_size(&self, id: &ModalId) -> Option<Size> {
        self.0.get(id).copied()
    }
}

fn page() -> ModalRegistry {
    let mut registry = ModalRegistry::new();
    registry.register(Modal::new("modal", "modalHeader"));
    registry.register(Modal::new("projectsModal", "projectsModalHeader"));
    registry.register(Modal::new("experienceModal", "experienceModalHeader"));
    registry
}

fn layout() -> Layout {
    Layout::new(VIEWPORT, Size::new(640.0, 360.0))
}

fn id(raw: &str) -> ModalId {
    ModalId::new(raw)
}

fn is_open(registry: &ModalRegistry, raw: &str) -> bool {
    registry.get(&id(raw)).is_some_and(Modal::is_open)
}

// =============================================================
// register
// =============================================================

#[test]
fn register_preserves_order() {
    let registry = page();
    let ids: Vec<&str> = registry.iter().map(|m| m.id().as_str()).collect();
    assert_eq!(ids, ["modal", "projectsModal", "experienceModal"]);
}

#[test]
fn register_does_not_deduplicate() {
    let mut registry = page();
    registry.register(Modal::new("modal", "modalHeader"));
    assert_eq!(registry.len(), 4);
}

#[test]
fn new_registry_is_empty() {
    let registry = ModalRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.active().is_none());
}

// =============================================================
// open / close
// =============================================================

#[test]
fn open_shows_and_centers() {
    let mut registry = page();
    assert!(registry.open(&id("projectsModal"), &layout()));
    let modal = registry.get(&id("projectsModal"));
    assert!(modal.is_some_and(Modal::is_open));
    assert_eq!(modal.map(Modal::position), Some(Point::new(320.0, 180.0)));
}

#[test]
fn open_leaves_exactly_one_open() {
    let mut registry = page();
    for raw in ["modal", "projectsModal", "experienceModal", "modal"] {
        registry.open(&id(raw), &layout());
        assert_eq!(registry.open_count(), 1);
        assert!(is_open(&registry, raw));
    }
    assert_eq!(registry.active().map(|m| m.id().as_str()), Some("modal"));
}

#[test]
fn open_closes_fullscreen_neighbour() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    registry.toggle_fullscreen(&id("modal"), &layout());
    registry.open(&id("experienceModal"), &layout());
    let about = registry.get(&id("modal"));
    assert!(about.is_some_and(|m| !m.is_open() && !m.is_fullscreen()));
}

#[test]
fn open_keeps_modal_inside_viewport() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    let p = registry.get(&id("modal")).map(Modal::position).unwrap_or_default();
    let size = layout().modal;
    assert!(p.x >= 0.0 && p.x + size.width <= VIEWPORT.width);
    assert!(p.y >= 0.0 && p.y + size.height <= VIEWPORT.height);
}

#[test]
fn open_unknown_id_changes_nothing() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    assert!(!registry.open(&id("nope"), &layout()));
    assert!(is_open(&registry, "modal"));
}

#[test]
fn open_unmeasurable_modal_still_opens_in_place() {
    let mut registry = page();
    let sizes = Sizes(HashMap::new());
    assert!(registry.open(&id("modal"), &sizes));
    assert!(is_open(&registry, "modal"));
    assert_eq!(registry.get(&id("modal")).map(Modal::position), Some(Point::default()));
}

#[test]
fn open_measures_the_target_modal() {
    let mut registry = page();
    let sizes = Sizes(HashMap::from([
        (id("modal"), Size::new(200.0, 100.0)),
        (id("projectsModal"), Size::new(1000.0, 600.0)),
    ]));
    registry.open(&id("projectsModal"), &sizes);
    assert_eq!(registry.get(&id("projectsModal")).map(Modal::position), Some(Point::new(140.0, 60.0)));
}

#[test]
fn close_hides_only_target() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    assert!(registry.close(&id("projectsModal")));
    assert!(is_open(&registry, "modal"));
    assert!(registry.close(&id("modal")));
    assert_eq!(registry.open_count(), 0);
}

#[test]
fn close_unknown_id_returns_false() {
    let mut registry = page();
    assert!(!registry.close(&id("nope")));
}

// =============================================================
// close_all_except
// =============================================================

#[test]
fn escape_closes_everything() {
    let mut registry = page();
    registry.open(&id("experienceModal"), &layout());
    registry.close_all_except(None);
    assert!(registry.iter().all(|m| !m.is_open()));
    assert_eq!(registry.len(), 3);
}

#[test]
fn close_all_except_keeps_target() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    registry.close_all_except(Some(&id("modal")));
    assert!(is_open(&registry, "modal"));
}

// =============================================================
// Fullscreen
// =============================================================

#[test]
fn toggle_fullscreen_round_trips() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    assert_eq!(registry.toggle_fullscreen(&id("modal"), &layout()), Some(true));
    assert_eq!(registry.toggle_fullscreen(&id("modal"), &layout()), Some(false));
}

#[test]
fn toggle_fullscreen_unknown_id_is_none() {
    let mut registry = page();
    assert_eq!(registry.toggle_fullscreen(&id("nope"), &layout()), None);
}

// =============================================================
// Drag routing
// =============================================================

#[test]
fn drag_moves_only_the_dragged_modal() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    assert!(registry.start_drag(&id("modal"), Point::new(330.0, 190.0), PointerOrigin::Header));
    assert_eq!(registry.dragging().map(|m| m.id().as_str()), Some("modal"));

    assert!(registry.update_drag(&id("modal"), Point::new(110.0, 60.0), &layout()));
    assert!(!registry.update_drag(&id("projectsModal"), Point::new(110.0, 60.0), &layout()));

    assert_eq!(registry.get(&id("modal")).map(Modal::position), Some(Point::new(100.0, 50.0)));
    assert_eq!(registry.get(&id("projectsModal")).map(Modal::position), Some(Point::default()));
}

#[test]
fn update_drag_when_idle_leaves_position() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    let before = registry.get(&id("modal")).map(Modal::position);
    assert!(!registry.update_drag(&id("modal"), Point::new(0.0, 0.0), &layout()));
    assert_eq!(registry.get(&id("modal")).map(Modal::position), before);
}

#[test]
fn update_drag_clamps_to_viewport() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    registry.start_drag(&id("modal"), Point::new(320.0, 180.0), PointerOrigin::Header);
    registry.update_drag(&id("modal"), Point::new(99_999.0, -99_999.0), &layout());
    assert_eq!(registry.get(&id("modal")).map(Modal::position), Some(Point::new(640.0, 0.0)));
}

#[test]
fn update_drag_on_unmeasurable_modal_does_not_move() {
    let mut registry = page();
    registry.open(&id("modal"), &layout());
    registry.start_drag(&id("modal"), Point::new(320.0, 180.0), PointerOrigin::Header);
    assert!(!registry.update_drag(&id("modal"), Point::new(0.0, 0.0), &Sizes(HashMap::new())));
    assert_eq!(registry.get(&id("modal")).map(Modal::position), Some(Point::new(320.0, 180.0)));
}

#[test]
fn end_drag_stops_following() {
    let mut registry = page();
    registry.start_drag(&id("modal"), Point::new(0.0, 0.0), PointerOrigin::Header);
    assert!(registry.end_drag(&id("modal")));
    assert!(registry.dragging().is_none());
    assert!(!registry.end_drag(&id("modal")));
}

#[test]
fn control_press_never_drags() {
    let mut registry = page();
    assert!(!registry.start_drag(&id("modal"), Point::new(0.0, 0.0), PointerOrigin::Control));
    assert!(registry.dragging().is_none());
}

#[test]
fn center_with_missing_element_returns_false() {
    let mut registry = page();
    assert!(!registry.center(&id("modal"), &Sizes(HashMap::new())));
    assert!(registry.center(&id("modal"), &layout()));
}

// =============================================================
// Unknown ids on the pointer paths
// =============================================================

#[test]
fn update_drag_on_unknown_id_warns() {
    log_capture_test::install();
    let mut registry = page();

    let moved = registry.update_drag(&id("ghostMoveModal"), Point::new(10.0, 10.0), &layout());

    assert!(!moved);
    assert_eq!(log_capture_test::warnings_mentioning("ghostMoveModal"), 1);
}

#[test]
fn end_drag_on_unknown_id_warns() {
    log_capture_test::install();
    let mut registry = page();

    assert!(!registry.end_drag(&id("ghostReleaseModal")));
    assert_eq!(log_capture_test::warnings_mentioning("ghostReleaseModal"), 1);
}

#[test]
fn idle_pointer_motion_is_silent() {
    log_capture_test::install();
    let mut registry = ModalRegistry::new();
    registry.register(Modal::new("quietModal", "quietModalHeader"));

    assert!(!registry.update_drag(&id("quietModal"), Point::new(10.0, 10.0), &layout()));
    assert!(!registry.end_drag(&id("quietModal")));
    assert_eq!(log_capture_test::warnings_mentioning("quietModal"), 0);
}
