//! Source model readiness.
//!
//! Loading is the single asynchronous boundary in the crate: an external
//! loader decodes the model off the frame thread and completes a
//! [`ModelSlot`] exactly once. The frame thread polls the slot
//! synchronously; until completion every trigger is a defined no-op.

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::animation::AnimationClip;
use crate::errors::{PlinthError, Result};
use crate::scene::{NodeHandle, SceneGraph};

/// The loaded template: an object graph plus zero-or-one animation clip.
///
/// Read-only once loaded; placement takes deep clones and never mutates
/// the template in place.
#[derive(Debug, Clone)]
pub struct SourceModel {
    pub template: SceneGraph,
    pub root: NodeHandle,
    pub clip: Option<Arc<AnimationClip>>,
}

impl SourceModel {
    #[must_use]
    pub fn new(template: SceneGraph, root: NodeHandle, clip: Option<Arc<AnimationClip>>) -> Self {
        Self {
            template,
            root,
            clip,
        }
    }
}

/// Tagged readiness state, checked synchronously by the placement path.
#[derive(Debug, Default)]
pub enum ModelState {
    #[default]
    Loading,
    Ready(SourceModel),
    Failed(String),
}

/// Shared handle to the model's readiness state.
///
/// Clone one side into the loader; it calls [`ModelSlot::complete`] once
/// when the load finishes (or fails). A second completion is rejected.
#[derive(Clone, Default)]
pub struct ModelSlot {
    inner: Arc<Mutex<ModelState>>,
}

impl ModelSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ModelState::Loading)),
        }
    }

    /// Delivers the load result. Exactly-once: completing an already
    /// completed slot returns [`PlinthError::ModelAlreadyCompleted`].
    ///
    /// A failed load is surfaced here rather than swallowed; triggers
    /// against a failed slot stay permanent no-ops.
    pub fn complete(&self, result: std::result::Result<SourceModel, String>) -> Result<()> {
        let mut state = self.inner.lock();

        if !matches!(*state, ModelState::Loading) {
            return Err(PlinthError::ModelAlreadyCompleted);
        }

        match result {
            Ok(model) => {
                debug!(
                    "source model ready ({} nodes, clip: {})",
                    model.template.node_count(),
                    model.clip.as_ref().map_or("none", |c| c.name.as_str())
                );
                *state = ModelState::Ready(model);
            }
            Err(reason) => {
                warn!("source model load failed: {reason}");
                *state = ModelState::Failed(reason);
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(*self.inner.lock(), ModelState::Ready(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(*self.inner.lock(), ModelState::Failed(_))
    }

    /// Failure reason, if the load failed.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        match &*self.inner.lock() {
            ModelState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Runs `f` against the model if it is ready, holding the slot lock
    /// for the duration of the call.
    pub fn with_model<R>(&self, f: impl FnOnce(&SourceModel) -> R) -> Option<R> {
        let state = self.inner.lock();
        match &*state {
            ModelState::Ready(model) => Some(f(model)),
            _ => None,
        }
    }
}
