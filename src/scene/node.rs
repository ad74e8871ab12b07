use crate::scene::NodeHandle;
use crate::scene::transform::Transform;
use glam::Affine3A;

/// A scene node: hierarchy links, a transform, a name and a visibility
/// flag.
///
/// Nodes form a tree through parent/child handles. Animation tracks bind
/// to nodes by `name`, so names should be unique within one model's
/// subtree (the first match wins otherwise).
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    /// Name used for animation track binding
    pub name: String,

    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    /// Visibility flag; templates are typically kept invisible until
    /// placed
    pub visible: bool,
}

impl Node {
    /// Creates a new unnamed, visible node with a default transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: String::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    /// Creates a new node with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// Updated by [`SceneGraph::update_world_transforms`].
    ///
    /// [`SceneGraph::update_world_transforms`]: crate::scene::SceneGraph::update_world_transforms
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }

    /// Copy of this node with hierarchy links stripped, used when cloning
    /// a subtree into another graph.
    pub(crate) fn clone_detached(&self) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: self.name.clone(),
            transform: self.transform.clone(),
            visible: self.visible,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
