//! Scene graph container.
//!
//! Pure data layer: a slotmap arena of [`Node`]s plus the root list and
//! the hierarchy operations the placement path needs — attach, name
//! lookup, deep subtree cloning, subtree removal and the world-matrix
//! hierarchy update.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Scene graph: node storage plus hierarchy logic.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, Node>,
    roots: Vec<NodeHandle>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Adds a node at the root level.
    pub fn add_root(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.roots.push(handle);
        handle
    }

    /// Inserts `child` under `parent`, keeping both sides of the link in
    /// sync. Falls back to root level if `parent` is no longer alive.
    pub fn attach(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if self.nodes.contains_key(parent) {
            self.nodes[parent].children.push(handle);
            self.nodes[handle].parent = Some(parent);
        } else {
            self.roots.push(handle);
        }

        handle
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Root node handles, in insertion order.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeHandle] {
        &self.roots
    }

    /// Depth-first name lookup within the subtree rooted at `root`,
    /// including `root` itself. First match wins.
    #[must_use]
    pub fn find_in_subtree(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut stack = vec![root];

        while let Some(handle) = stack.pop() {
            if let Some(node) = self.nodes.get(handle) {
                if node.name == name {
                    return Some(handle);
                }
                stack.extend(node.children.iter().copied());
            }
        }

        None
    }

    /// Deep-clones the subtree rooted at `src_root` in `src` into this
    /// graph, at root level. The copy is fully independent: later
    /// mutations on either side never affect the other.
    ///
    /// Returns `None` if `src_root` is not alive in `src`.
    pub fn import_subtree(&mut self, src: &SceneGraph, src_root: NodeHandle) -> Option<NodeHandle> {
        let root_node = src.get(src_root)?;
        let dst_root = self.add_root(root_node.clone_detached());

        let mut stack = vec![(src_root, dst_root)];
        while let Some((src_handle, dst_handle)) = stack.pop() {
            let Some(src_node) = src.get(src_handle) else {
                continue;
            };
            for &src_child in &src_node.children {
                if let Some(child_node) = src.get(src_child) {
                    let dst_child = self.attach(child_node.clone_detached(), dst_handle);
                    stack.push((src_child, dst_child));
                }
            }
        }

        Some(dst_root)
    }

    /// Removes the subtree rooted at `root` from the graph, unlinking it
    /// from its parent (or the root list) first.
    pub fn remove_subtree(&mut self, root: NodeHandle) {
        match self.nodes.get(root) {
            Some(node) => {
                if let Some(parent) = node.parent {
                    if let Some(p) = self.nodes.get_mut(parent) {
                        p.children.retain(|&c| c != root);
                    }
                } else {
                    self.roots.retain(|&r| r != root);
                }
            }
            None => return,
        }

        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            if let Some(node) = self.nodes.remove(handle) {
                stack.extend(node.children);
            }
        }
    }

    /// Updates world matrices for the whole hierarchy.
    ///
    /// Iterative with an explicit stack to stay safe on deep hierarchies;
    /// a node's world matrix is only recomputed when its own local matrix
    /// changed or an ancestor's did.
    pub fn update_world_transforms(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

        for &root in self.roots.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((handle, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let world_needs_update = local_changed || parent_changed;

            if world_needs_update {
                let new_world = parent_world * *node.transform.local_matrix();
                node.transform.set_world_matrix(new_world);
            }

            let current_world = node.transform.world_matrix;
            for i in (0..node.children.len()).rev() {
                let child = node.children[i];
                stack.push((child, current_world, world_needs_update));
            }
        }
    }
}
