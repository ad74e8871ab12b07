//! The per-frame driver.
//!
//! [`Stage`] is the composition root: it owns the live scene graph, the
//! anchor tracker, the placement manager and the instance registry, and
//! drives them once per display frame. The outer AR plumbing (session,
//! hit-test API, renderer, camera) stays external and reaches the stage
//! through [`HitTestSource`], [`SceneRenderer`] and [`FrameInput`].

use glam::Vec3;

use crate::anchor::{AnchorTracker, HitTestResult};
use crate::assets::ModelSlot;
use crate::placement::{InstanceRegistry, PlacementManager};
use crate::scene::{NodeHandle, SceneGraph};
use crate::settings::Settings;

/// Opaque per-frame token minted by the AR session; only meaningful to
/// the [`HitTestSource`] it is handed back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken(pub u64);

/// Per-frame input from the AR presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Display timestamp in seconds.
    pub timestamp: f64,
    /// Tracking token, present only while actively tracking.
    pub token: Option<FrameToken>,
    /// Viewer (camera) world position this frame, used as the look-at
    /// reference for placement.
    pub viewer_position: Vec3,
}

/// Per-frame hit-test query against sensed real-world geometry.
pub trait HitTestSource {
    fn query(&mut self, token: FrameToken) -> HitTestResult;
}

/// Renders the current scene state. Camera handling lives behind the
/// implementation.
pub trait SceneRenderer {
    fn render(&mut self, graph: &SceneGraph);
}

/// Frame loop driver and composition root.
pub struct Stage {
    graph: SceneGraph,
    anchor: AnchorTracker,
    placement: PlacementManager,
    registry: InstanceRegistry,
    settings: Settings,

    /// Optional reticle node mirroring the anchor pose, so the user sees
    /// where a placement would land.
    marker: Option<NodeHandle>,

    viewer_position: Vec3,
    presenting: bool,
}

impl Stage {
    #[must_use]
    pub fn new(model: ModelSlot, settings: Settings) -> Self {
        Self {
            graph: SceneGraph::new(),
            anchor: AnchorTracker::new(),
            placement: PlacementManager::new(model, settings),
            registry: InstanceRegistry::new(settings.max_instances),
            settings,
            marker: None,
            viewer_position: Vec3::ZERO,
            presenting: false,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    #[must_use]
    pub fn anchor(&self) -> &AnchorTracker {
        &self.anchor
    }

    #[must_use]
    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    /// Designates a node in the graph as the anchor reticle. Its
    /// visibility and matrix are synced from the anchor pose each frame.
    pub fn set_marker(&mut self, marker: NodeHandle) {
        self.marker = Some(marker);
    }

    /// Flags whether the AR session is presenting. While not presenting
    /// the frame loop is a complete no-op; leaving presentation also
    /// revokes the anchor so a stale pose cannot accept a trigger.
    pub fn set_presenting(&mut self, presenting: bool) {
        self.presenting = presenting;
        if !presenting {
            self.anchor.update(HitTestResult::NotFound);
        }
    }

    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    /// Runs one display frame: idle-spin every placed instance, refresh
    /// the anchor from this frame's hit-test, sync the reticle, update
    /// world matrices and render.
    ///
    /// No-op (no render, no state mutation) while not presenting.
    pub fn frame<H, R>(&mut self, input: &FrameInput, hits: &mut H, renderer: &mut R)
    where
        H: HitTestSource,
        R: SceneRenderer,
    {
        if !self.presenting {
            return;
        }

        self.viewer_position = input.viewer_position;

        self.registry
            .advance_spin(self.settings.spin_increment, &mut self.graph);

        // Visibility is recomputed every tracked frame: an absent token
        // counts as not-found, never as "keep the last pose".
        let result = match input.token {
            Some(token) => hits.query(token),
            None => HitTestResult::NotFound,
        };
        self.anchor.update(result);

        if let Some(marker) = self.marker {
            let pose = self.anchor.pose();
            if let Some(node) = self.graph.get_mut(marker) {
                node.visible = pose.visible;
                if pose.visible {
                    node.transform.apply_local_matrix_from_mat4(pose.transform);
                }
            }
        }

        self.graph.update_world_transforms();
        renderer.render(&self.graph);
    }

    /// Select trigger entry point, forwarded from the controller event.
    ///
    /// Uses the viewer position cached from the most recent frame as the
    /// look-at reference.
    pub fn select(&mut self) {
        self.placement.on_trigger(
            &mut self.graph,
            &self.anchor,
            self.viewer_position,
            &mut self.registry,
        );
    }
}
