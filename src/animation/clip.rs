use glam::{Quat, Vec3};

use crate::errors::{PlinthError, Result};

/// The transform property a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackProperty {
    Position,
    Rotation,
    Scale,
}

impl TrackProperty {
    /// Floats per keyframe tuple: 3 for position/scale, 4 for rotation
    /// quaternions.
    #[must_use]
    pub fn tuple_size(self) -> usize {
        match self {
            TrackProperty::Position | TrackProperty::Scale => 3,
            TrackProperty::Rotation => 4,
        }
    }
}

/// Typed keyframe storage. The property is decided once at parse time,
/// never re-derived from the target path string at sample time.
#[derive(Debug, Clone)]
pub enum TrackValues {
    Position(Vec<Vec3>),
    Rotation(Vec<Quat>),
    Scale(Vec<Vec3>),
}

impl TrackValues {
    #[must_use]
    pub fn property(&self) -> TrackProperty {
        match self {
            TrackValues::Position(_) => TrackProperty::Position,
            TrackValues::Rotation(_) => TrackProperty::Rotation,
            TrackValues::Scale(_) => TrackProperty::Scale,
        }
    }

    /// Number of keyframe tuples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        match self {
            TrackValues::Position(v) | TrackValues::Scale(v) => v.len(),
            TrackValues::Rotation(v) => v.len(),
        }
    }
}

/// One keyframe track: a target node name and its sampled values.
///
/// A track binds to exactly one named node in the model's hierarchy; the
/// sampler skips tracks whose target is absent from the instance.
#[derive(Debug, Clone)]
pub struct PoseTrack {
    pub node_path: String,
    pub values: TrackValues,
}

impl PoseTrack {
    #[must_use]
    pub fn new(node_path: impl Into<String>, values: TrackValues) -> Self {
        Self {
            node_path: node_path.into(),
            values,
        }
    }

    /// Parses a track from a flat float buffer as delivered by asset
    /// loaders.
    ///
    /// The buffer length must be a multiple of the property's tuple size
    /// (3 for position/scale, 4 for rotation).
    pub fn from_flat(
        node_path: impl Into<String>,
        property: TrackProperty,
        buffer: &[f32],
    ) -> Result<Self> {
        let node_path = node_path.into();
        let tuple_size = property.tuple_size();

        if buffer.len() % tuple_size != 0 {
            return Err(PlinthError::TrackBuffer {
                node_path,
                len: buffer.len(),
                tuple_size,
            });
        }

        let values = match property {
            TrackProperty::Position => TrackValues::Position(
                buffer
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2]))
                    .collect(),
            ),
            TrackProperty::Scale => TrackValues::Scale(
                buffer
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2]))
                    .collect(),
            ),
            TrackProperty::Rotation => TrackValues::Rotation(
                buffer
                    .chunks_exact(4)
                    .map(|c| Quat::from_xyzw(c[0], c[1], c[2], c[3]))
                    .collect(),
            ),
        };

        Ok(Self { node_path, values })
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> TrackProperty {
        self.values.property()
    }
}

/// An immutable set of sampled keyframe tracks.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length in seconds. Non-positive durations make the clip
    /// unsampleable; see the sampler's degenerate-clip policy.
    pub duration: f32,
    /// Authoring sample rate, assumed constant across tracks.
    pub sample_rate_hz: f32,
    pub tracks: Vec<PoseTrack>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration: f32,
        sample_rate_hz: f32,
        tracks: Vec<PoseTrack>,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            sample_rate_hz,
            tracks,
        }
    }
}
