//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! Almost everything in the per-frame path is deliberately infallible: a
//! trigger against an unready model or an invisible anchor is a defined
//! no-op, and a track that binds to a missing node is skipped. Errors are
//! reserved for construction-time problems (malformed track buffers) and
//! misuse of the one-shot model load boundary.

use thiserror::Error;

/// The main error type for plinth.
#[derive(Error, Debug)]
pub enum PlinthError {
    // ========================================================================
    // Clip Construction Errors
    // ========================================================================
    /// A flat keyframe buffer does not divide evenly into tuples.
    #[error("track buffer for '{node_path}' has {len} floats, not a multiple of tuple size {tuple_size}")]
    TrackBuffer {
        /// Target node path of the offending track
        node_path: String,
        /// Raw buffer length
        len: usize,
        /// Expected tuple size (3 for position/scale, 4 for rotation)
        tuple_size: usize,
    },

    // ========================================================================
    // Asset Readiness Errors
    // ========================================================================
    /// A model slot received a second completion; delivery is exactly-once.
    #[error("model slot already completed")]
    ModelAlreadyCompleted,
}

/// Alias for `Result<T, PlinthError>`.
pub type Result<T> = std::result::Result<T, PlinthError>;
