//! Animation clip data and the zero-order-hold pose sampler.
//!
//! There is no mixer, no action list and no interpolation here: a clip is
//! resolved to exactly one pose at one time offset, by picking the single
//! nearest keyframe of every track. See [`sampler::sample_pose`].

pub mod clip;
pub mod sampler;

pub use clip::{AnimationClip, PoseTrack, TrackProperty, TrackValues};
pub use sampler::{nearest_sample_index, sample_pose};
