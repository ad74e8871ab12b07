//! The placement anchor.
//!
//! Wraps the per-frame hit-test result into one mutable anchor pose. The
//! transform is an opaque 16-element matrix in the renderer's convention;
//! it is stored and handed on without decomposition or inspection.

use glam::Mat4;

/// Result of one frame's hit-test query against sensed real-world
/// geometry.
#[derive(Debug, Clone, Copy)]
pub enum HitTestResult {
    /// A surface was found; the matrix places the anchor on it.
    Found(Mat4),
    /// No surface was found this frame.
    NotFound,
}

impl HitTestResult {
    /// Builds a `Found` result from the raw column-major 16-element array
    /// delivered by hit-test APIs.
    #[must_use]
    pub fn found_from_array(elements: &[f32; 16]) -> Self {
        HitTestResult::Found(Mat4::from_cols_array(elements))
    }
}

/// The anchor's current state.
///
/// `transform` is only meaningful while `visible` is true. On a
/// not-found frame the stored matrix is left as-is and must not be read.
#[derive(Debug, Clone, Copy)]
pub struct AnchorPose {
    pub visible: bool,
    pub transform: Mat4,
}

/// Tracks the single active placement anchor.
///
/// One instance per session; overwritten in place every frame a surface
/// is found, flipped invisible the moment one is not. There is exactly
/// one writer (the frame loop) and the readers only see the pose through
/// [`AnchorTracker::pose`].
#[derive(Debug)]
pub struct AnchorTracker {
    pose: AnchorPose,
}

impl AnchorTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pose: AnchorPose {
                visible: false,
                transform: Mat4::IDENTITY,
            },
        }
    }

    /// Feeds this frame's hit-test result.
    ///
    /// Must be called every frame while tracking is active, with
    /// [`HitTestResult::NotFound`] whenever no surface was detected, so
    /// visibility is recomputed per frame rather than only on loss of
    /// tracking.
    pub fn update(&mut self, result: HitTestResult) {
        match result {
            HitTestResult::Found(transform) => {
                self.pose.visible = true;
                self.pose.transform = transform;
            }
            HitTestResult::NotFound => {
                self.pose.visible = false;
            }
        }
    }

    /// Current anchor pose.
    #[inline]
    #[must_use]
    pub fn pose(&self) -> AnchorPose {
        self.pose
    }
}

impl Default for AnchorTracker {
    fn default() -> Self {
        Self::new()
    }
}
