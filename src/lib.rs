#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Surface-anchored AR object placement.
//!
//! Plinth turns a per-frame surface hit-test result into a stable,
//! revocable placement anchor, and stamps a single animation pose onto
//! every placed instance with zero-order-hold (nearest-sample) resolution
//! instead of an interpolating mixer.
//!
//! The crate owns four concerns:
//! - [`animation`]: clip data and the nearest-sample pose sampler
//! - [`anchor`]: the single mutable placement anchor fed by hit-testing
//! - [`placement`]: cloning the source model onto the anchor and the
//!   bounded registry of placed instances
//! - [`stage`]: the per-frame driver that spins instances, refreshes the
//!   anchor and renders
//!
//! Scene/camera construction, lighting and asset decoding stay outside;
//! they reach the stage through the [`stage::HitTestSource`] and
//! [`stage::SceneRenderer`] seams and the [`assets::ModelSlot`] load
//! boundary.

pub mod anchor;
pub mod animation;
pub mod assets;
pub mod errors;
pub mod placement;
pub mod scene;
pub mod settings;
pub mod stage;

pub use anchor::{AnchorPose, AnchorTracker, HitTestResult};
pub use animation::{AnimationClip, PoseTrack, TrackProperty, TrackValues};
pub use assets::{ModelSlot, ModelState, SourceModel};
pub use errors::{PlinthError, Result};
pub use placement::{InstanceRegistry, PlacedInstance, PlacementManager};
pub use scene::{Node, NodeHandle, SceneGraph, Transform};
pub use settings::Settings;
pub use stage::{FrameInput, FrameToken, HitTestSource, SceneRenderer, Stage};
