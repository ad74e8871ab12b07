//! Zero-order-hold pose sampler.
//!
//! Resolves an [`AnimationClip`] to a single pose at one time offset by
//! writing the nearest keyframe of every track straight onto the target
//! subtree. No interpolation between neighbors, no blending with a rest
//! pose, no per-frame advancement.

use glam::Vec3;
use log::trace;

use crate::animation::clip::{AnimationClip, TrackValues};
use crate::scene::{NodeHandle, SceneGraph};
use crate::settings::Settings;

/// Nearest-sample index for a track with `sample_count` tuples over a clip
/// of `duration` seconds: `clamp(floor(sample_count * time / duration),
/// 0, sample_count - 1)`.
///
/// `duration` must be positive and `sample_count` non-zero; the sampler
/// guards both before calling.
#[must_use]
pub fn nearest_sample_index(sample_count: usize, time: f32, duration: f32) -> usize {
    let raw = (sample_count as f32 * (time / duration)).floor();
    let clamped = raw.max(0.0) as usize;
    clamped.min(sample_count - 1)
}

/// Stamps the clip's pose at `time` onto the subtree rooted at `root`.
///
/// Per track: the target node is resolved by name within the subtree
/// (missing targets are skipped, not an error) and the nearest keyframe
/// tuple is written onto the matching transform property. Two scale
/// policies follow:
///
/// - any node the clip touches without a scale track of its own gets a
///   uniform `settings.node_scale_fallback`
/// - the subtree root's scale is then forced to a uniform
///   `settings.root_scale_override`, superseding whatever was just
///   written
///
/// A clip with non-positive duration is unsampleable: every track is
/// skipped and only the root-scale override is applied.
pub fn sample_pose(
    graph: &mut SceneGraph,
    root: NodeHandle,
    clip: &AnimationClip,
    time: f32,
    settings: &Settings,
) {
    if clip.duration > 0.0 {
        let mut touched: Vec<NodeHandle> = Vec::with_capacity(clip.tracks.len());
        let mut explicitly_scaled: Vec<NodeHandle> = Vec::new();

        for track in &clip.tracks {
            let Some(handle) = graph.find_in_subtree(root, &track.node_path) else {
                trace!(
                    "clip '{}': no node '{}' in target subtree, track skipped",
                    clip.name, track.node_path
                );
                continue;
            };

            let sample_count = track.values.sample_count();
            if sample_count == 0 {
                continue;
            }
            let index = nearest_sample_index(sample_count, time, clip.duration);

            let Some(node) = graph.get_mut(handle) else {
                continue;
            };
            match &track.values {
                TrackValues::Position(values) => node.transform.position = values[index],
                TrackValues::Rotation(values) => node.transform.rotation = values[index],
                TrackValues::Scale(values) => {
                    node.transform.scale = values[index];
                    explicitly_scaled.push(handle);
                }
            }
            node.transform.mark_dirty();

            if !touched.contains(&handle) {
                touched.push(handle);
            }
        }

        // Position/rotation-only clips tend to carry baked scale in the
        // source asset; pin untracked scales to the fallback.
        for handle in touched {
            if explicitly_scaled.contains(&handle) {
                continue;
            }
            if let Some(node) = graph.get_mut(handle) {
                node.transform.scale = Vec3::splat(settings.node_scale_fallback);
                node.transform.mark_dirty();
            }
        }
    }

    if let Some(node) = graph.get_mut(root) {
        node.transform.scale = Vec3::splat(settings.root_scale_override);
        node.transform.mark_dirty();
    }
}
