//! Anchor Tracker Tests
//!
//! Tests for:
//! - Found/NotFound visibility transitions
//! - In-place transform overwrite semantics
//! - Opaque pass-through of the 16-element hit transform

use glam::{Mat4, Vec3};

use plinth::anchor::{AnchorTracker, HitTestResult};

const EPSILON: f32 = 1e-5;

fn approx_mat4(a: Mat4, b: Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < EPSILON)
}

// ============================================================================
// Visibility Transitions
// ============================================================================

#[test]
fn starts_invisible() {
    let tracker = AnchorTracker::new();
    assert!(!tracker.pose().visible);
}

#[test]
fn found_sets_visible() {
    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::Found(Mat4::IDENTITY));
    assert!(tracker.pose().visible);
}

#[test]
fn not_found_revokes_visibility() {
    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::Found(Mat4::IDENTITY));
    tracker.update(HitTestResult::NotFound);
    assert!(!tracker.pose().visible);
}

#[test]
fn visibility_recovers_after_loss() {
    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::Found(Mat4::IDENTITY));
    tracker.update(HitTestResult::NotFound);
    tracker.update(HitTestResult::Found(Mat4::IDENTITY));
    assert!(tracker.pose().visible);
}

// ============================================================================
// Transform Overwrite
// ============================================================================

#[test]
fn second_found_overwrites_first() {
    let transform_a = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let transform_b = Mat4::from_translation(Vec3::new(-4.0, 0.0, 9.0));

    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::Found(transform_a));
    tracker.update(HitTestResult::Found(transform_b));

    let pose = tracker.pose();
    assert!(pose.visible);
    assert!(approx_mat4(pose.transform, transform_b));
}

#[test]
fn not_found_after_either_leaves_invisible() {
    let transform_a = Mat4::from_translation(Vec3::X);
    let transform_b = Mat4::from_translation(Vec3::Y);

    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::Found(transform_a));
    tracker.update(HitTestResult::Found(transform_b));
    tracker.update(HitTestResult::NotFound);

    assert!(!tracker.pose().visible);
}

// ============================================================================
// Opaque Transform Pass-Through
// ============================================================================

#[test]
fn found_from_array_round_trips_elements() {
    // Arbitrary 16 elements; the tracker must carry them through without
    // decomposing or normalizing anything.
    let mut elements = [0.0_f32; 16];
    for (i, e) in elements.iter_mut().enumerate() {
        *e = i as f32 * 0.25 - 1.0;
    }

    let mut tracker = AnchorTracker::new();
    tracker.update(HitTestResult::found_from_array(&elements));

    let out = tracker.pose().transform.to_cols_array();
    for (x, y) in out.iter().zip(elements.iter()) {
        assert!((x - y).abs() < EPSILON);
    }
}
