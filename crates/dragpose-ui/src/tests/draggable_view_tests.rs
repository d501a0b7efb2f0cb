use super::support::{event, TestParent, TestSurface};
use crate::widgets::DraggableView;
use dragpose_foundation::{PointerEventKind, PointerInputTarget};
use dragpose_geometry::Point;

fn view(surface: &std::rc::Rc<TestSurface>, parent: &std::rc::Rc<TestParent>) -> DraggableView {
    DraggableView::new(surface.clone(), parent.clone(), parent.clone())
}

#[test]
fn test_view_moves_on_drag_events() {
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);

    assert!(widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0)));
    assert!(parent.disallowed.get());
    assert!(widget.on_pointer_event(&event(PointerEventKind::Move, 60.0, 10.0)));
    assert_eq!(surface.position.get(), Point::new(50.0, 0.0));
    assert!(widget.on_pointer_event(&event(PointerEventKind::Up, 60.0, 10.0)));
    assert!(!parent.disallowed.get());
}

#[test]
fn test_view_moves_below_slop() {
    // The leaf widget applies tap-range motion too.
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);

    widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0));
    widget.on_pointer_event(&event(PointerEventKind::Move, 13.0, 10.0));
    assert_eq!(surface.position.get(), Point::new(3.0, 0.0));
}

#[test]
fn test_view_never_intercepts() {
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);

    widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0));
    assert!(!widget.on_intercept_pointer_event(&event(PointerEventKind::Move, 60.0, 10.0)));
}

#[test]
fn test_view_hit_test_tracks_position() {
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);

    assert!(widget.hit_test(50.0, 50.0));
    assert!(!widget.hit_test(150.0, 50.0));

    widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0));
    widget.on_pointer_event(&event(PointerEventKind::Move, 60.0, 10.0));
    assert!(widget.hit_test(150.0, 50.0), "frame follows the surface");
    assert!(!widget.hit_test(20.0, 50.0));
}

#[test]
fn test_disabled_view_ignores_events() {
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);
    widget.set_enabled(false);

    assert!(!widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0)));
    assert!(!widget.on_pointer_event(&event(PointerEventKind::Move, 60.0, 10.0)));
    assert!(surface.applied.borrow().is_empty());
    assert!(!widget.hit_test(50.0, 50.0));
}

#[test]
fn test_cancel_releases_interception_and_rebases() {
    let parent = TestParent::new(400.0, 800.0);
    let surface = TestSurface::new(0.0, 0.0, 100.0, 100.0);
    let mut widget = view(&surface, &parent);

    widget.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0));
    widget.on_pointer_event(&event(PointerEventKind::Move, 60.0, 10.0));
    widget.on_pointer_event(&event(PointerEventKind::Cancel, 60.0, 10.0));
    assert!(!parent.disallowed.get());

    // The next gesture computes deltas from its own anchor.
    widget.on_pointer_event(&event(PointerEventKind::Down, 20.0, 20.0));
    widget.on_pointer_event(&event(PointerEventKind::Move, 25.0, 20.0));
    assert_eq!(surface.position.get(), Point::new(55.0, 0.0));
}
