//! Placement of model instances onto the anchor.
//!
//! On a select trigger the manager deep-clones the source model into the
//! live graph, positions it from the anchor transform, orients it toward
//! the viewer's horizontal bearing, stamps a single sampled pose and
//! registers it. The registry is an explicit bounded collection owned by
//! the composition root, not a module-level global.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};
use log::debug;

use crate::anchor::AnchorTracker;
use crate::animation::sampler::sample_pose;
use crate::assets::ModelSlot;
use crate::scene::{NodeHandle, SceneGraph};
use crate::settings::Settings;

/// One placed clone of the source model.
#[derive(Debug, Clone)]
pub struct PlacedInstance {
    /// Root of the cloned subtree in the live graph.
    pub root: NodeHandle,
    /// Accumulated idle-spin yaw, kept in `[0, TAU)`.
    pub rotation_angle: f32,
    /// Orientation given at placement (facing the viewer); the idle spin
    /// composes on top of it.
    pub facing: Quat,
    /// Anchor transform at the moment of placement.
    pub created_at: Mat4,
}

/// Bounded, ordered collection of placed instances.
///
/// Pushing beyond capacity pops the oldest instance and returns it so
/// the caller can detach its subtree; a long session therefore cannot
/// grow without bound.
#[derive(Debug)]
pub struct InstanceRegistry {
    instances: VecDeque<PlacedInstance>,
    capacity: usize,
}

impl InstanceRegistry {
    /// Creates a registry holding at most `capacity` instances. A zero
    /// capacity is clamped to one; every construction path goes through
    /// this clamp.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            instances: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedInstance> {
        self.instances.iter()
    }

    /// Appends an instance; returns the evicted oldest one if the
    /// registry was full.
    pub fn push(&mut self, instance: PlacedInstance) -> Option<PlacedInstance> {
        let evicted = if self.instances.len() >= self.capacity {
            self.instances.pop_front()
        } else {
            None
        };
        self.instances.push_back(instance);
        evicted
    }

    /// Removes the instance rooted at `root`, if registered.
    pub fn remove(&mut self, root: NodeHandle) -> Option<PlacedInstance> {
        let idx = self.instances.iter().position(|i| i.root == root)?;
        self.instances.remove(idx)
    }

    /// Advances every instance's idle spin by `increment` radians and
    /// applies it as yaw about the vertical axis, composed with the
    /// facing orientation from placement. Applied uniformly regardless
    /// of when each instance was placed.
    pub fn advance_spin(&mut self, increment: f32, graph: &mut SceneGraph) {
        for instance in &mut self.instances {
            instance.rotation_angle = (instance.rotation_angle + increment).rem_euclid(TAU);
            if let Some(node) = graph.get_mut(instance.root) {
                node.transform.rotation =
                    Quat::from_rotation_y(instance.rotation_angle) * instance.facing;
                node.transform.mark_dirty();
            }
        }
    }
}

impl Default for InstanceRegistry {
    /// Registry bounded by [`Settings::default`]'s `max_instances`.
    fn default() -> Self {
        Self::new(Settings::default().max_instances)
    }
}

/// Handles select triggers: gate, clone, place, orient, pose, register.
pub struct PlacementManager {
    model: ModelSlot,
    settings: Settings,
}

impl PlacementManager {
    #[must_use]
    pub fn new(model: ModelSlot, settings: Settings) -> Self {
        Self { model, settings }
    }

    #[must_use]
    pub fn model(&self) -> &ModelSlot {
        &self.model
    }

    /// Select trigger entry point.
    ///
    /// A trigger while the anchor is invisible or the model is not ready
    /// is a defined no-op, not an error. Otherwise the source model is
    /// deep-cloned into `graph`, positioned at the anchor transform's
    /// translation, turned toward the viewer's horizontal bearing (the
    /// look-at target's vertical component is replaced by the clone's
    /// own, keeping the model upright), made visible, stamped once with
    /// the clip pose at the configured sample time, and appended to the
    /// registry.
    pub fn on_trigger(
        &self,
        graph: &mut SceneGraph,
        anchor: &AnchorTracker,
        viewer_position: Vec3,
        registry: &mut InstanceRegistry,
    ) {
        let pose = anchor.pose();
        if !pose.visible {
            debug!("select ignored: no surface anchor this frame");
            return;
        }

        let placed = self.model.with_model(|model| {
            let root = graph.import_subtree(&model.template, model.root)?;

            let translation = pose.transform.w_axis.truncate();
            if let Some(node) = graph.get_mut(root) {
                node.transform.position = translation;

                // Face the viewer's bearing, not the viewer: leveling the
                // target keeps the model upright on the surface.
                let mut target = viewer_position;
                target.y = translation.y;
                node.transform.look_at(target, Vec3::Y);

                node.visible = true;
            }

            if let Some(clip) = &model.clip {
                sample_pose(
                    graph,
                    root,
                    clip,
                    self.settings.placement_sample_time,
                    &self.settings,
                );
            }

            let facing = graph
                .get(root)
                .map_or(Quat::IDENTITY, |n| n.transform.rotation);

            Some(PlacedInstance {
                root,
                rotation_angle: 0.0,
                facing,
                created_at: pose.transform,
            })
        });

        match placed {
            Some(Some(instance)) => {
                if let Some(evicted) = registry.push(instance) {
                    debug!("instance registry full, evicting oldest placement");
                    graph.remove_subtree(evicted.root);
                }
            }
            Some(None) => debug!("select ignored: template root missing"),
            None => debug!("select ignored: source model not ready"),
        }
    }
}
