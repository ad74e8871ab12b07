//! Tuned constants for placement and sampling.
//!
//! The sample time and the two scale constants were tuned empirically
//! against one specific source asset; they are preserved here as plain
//! configurable values rather than derived from the asset.

/// Placement and frame-loop configuration.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Fixed clip time (seconds) sampled once when an instance is placed.
    /// The instance never re-samples afterwards.
    pub placement_sample_time: f32,

    /// Uniform scale written to any node a clip touches that carries no
    /// scale track of its own. Counteracts scale baked into
    /// position/rotation-only clips.
    pub node_scale_fallback: f32,

    /// Uniform scale forced onto the instance root after sampling,
    /// superseding every per-node scale just written. Keeps placed
    /// instances visually consistent regardless of the asset's native
    /// units.
    pub root_scale_override: f32,

    /// Idle-spin increment (radians) added to every placed instance's yaw
    /// each frame.
    pub spin_increment: f32,

    /// Registry capacity. Placing an instance beyond this evicts the
    /// oldest one so a long session cannot grow without bound.
    pub max_instances: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placement_sample_time: 0.5,
            node_scale_fallback: 1.0,
            root_scale_override: 0.01,
            spin_increment: 0.01,
            max_instances: 64,
        }
    }
}
