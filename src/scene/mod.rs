//! Scene graph module.
//!
//! - [`Node`]: scene node (hierarchy, transform, name, visibility)
//! - [`Transform`]: TRS component with cached local/world matrices
//! - [`SceneGraph`]: node arena plus hierarchy operations

pub mod graph;
pub mod node;
pub mod transform;

pub use graph::SceneGraph;
pub use node::Node;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle into a [`SceneGraph`]'s node arena.
    pub struct NodeHandle;
}
