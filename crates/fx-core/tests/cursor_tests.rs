// Host-side tests for the cursor tracker and magnetic pull.

use fx_core::{magnetic_offset, CursorTracker, Rect, CURSOR_OFFSCREEN, MAGNETIC_PULL};
use glam::Vec2;

#[test]
fn cursor_starts_parked_offscreen() {
    let tracker = CursorTracker::new();
    assert_eq!(tracker.ring(), Vec2::splat(CURSOR_OFFSCREEN));
    assert_eq!(tracker.pointer(), Vec2::splat(CURSOR_OFFSCREEN));
}

#[test]
fn dot_tracks_the_pointer_instantly() {
    let mut tracker = CursorTracker::new();
    tracker.set_pointer(320.0, 240.0);
    assert_eq!(tracker.pointer(), Vec2::new(320.0, 240.0));
    // The ring has not been ticked yet and still trails.
    assert_eq!(tracker.ring(), Vec2::splat(CURSOR_OFFSCREEN));
}

#[test]
fn ring_distance_strictly_decreases_toward_a_stationary_pointer() {
    let mut tracker = CursorTracker::new();
    tracker.set_pointer(400.0, 300.0);
    let target = Vec2::new(400.0, 300.0);

    let mut prev = tracker.ring().distance(target);
    for _ in 0..50 {
        let pos = tracker.tick();
        let d = pos.distance(target);
        assert!(d < prev, "distance must strictly decrease ({} !< {})", d, prev);
        prev = d;
    }
    // After 50 frames at factor 0.15 the ring has essentially arrived.
    assert!(prev < 1.0);
}

#[test]
fn pointer_at_element_center_produces_no_pull() {
    let rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 80.0,
    };
    let offset = magnetic_offset(rect.center(), rect);
    assert!(offset.length() < 1e-6);
}

#[test]
fn pull_is_linear_in_the_pointer_offset() {
    let rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };
    // 100px right of center.
    let offset = magnetic_offset(Vec2::new(150.0, 50.0), rect);
    assert!((offset.x - 100.0 * MAGNETIC_PULL).abs() < 1e-4);
    assert_eq!(offset.y, 0.0);

    // Doubling the distance doubles the pull.
    let doubled = magnetic_offset(Vec2::new(250.0, 50.0), rect);
    assert!((doubled.x - 2.0 * offset.x).abs() < 1e-3);
}
