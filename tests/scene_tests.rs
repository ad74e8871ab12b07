//! Scene Graph Tests
//!
//! Tests for:
//! - Node creation, attach, subtree removal
//! - Name lookup within a subtree
//! - Deep subtree import between graphs
//! - World-matrix hierarchy update and dirty checking
//! - Transform look_at and matrix application

use glam::{Mat4, Quat, Vec3};

use plinth::scene::{Node, SceneGraph, Transform};

const EPSILON: f32 = 1e-5;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// ============================================================================
// Hierarchy Construction
// ============================================================================

#[test]
fn add_root_and_attach() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let child = graph.attach(Node::named("child"), root);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.roots(), &[root]);
    assert_eq!(graph.get(child).unwrap().parent(), Some(root));
    assert_eq!(graph.get(root).unwrap().children(), &[child]);
}

#[test]
fn attach_to_dead_parent_falls_back_to_root() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    graph.remove_subtree(root);

    let orphan = graph.attach(Node::named("orphan"), root);
    assert_eq!(graph.roots(), &[orphan]);
    assert_eq!(graph.get(orphan).unwrap().parent(), None);
}

#[test]
fn remove_subtree_drops_descendants() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let a = graph.attach(Node::named("a"), root);
    let b = graph.attach(Node::named("b"), a);
    let keep = graph.add_root(Node::named("keep"));

    graph.remove_subtree(a);

    assert!(!graph.contains(a));
    assert!(!graph.contains(b));
    assert!(graph.contains(root));
    assert!(graph.contains(keep));
    assert!(graph.get(root).unwrap().children().is_empty());
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn remove_subtree_of_root_updates_root_list() {
    let mut graph = SceneGraph::new();
    let a = graph.add_root(Node::named("a"));
    let b = graph.add_root(Node::named("b"));

    graph.remove_subtree(a);
    assert_eq!(graph.roots(), &[b]);
}

// ============================================================================
// Name Lookup
// ============================================================================

#[test]
fn find_in_subtree_matches_root_and_descendants() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let arm = graph.attach(Node::named("arm"), root);
    let hand = graph.attach(Node::named("hand"), arm);

    assert_eq!(graph.find_in_subtree(root, "root"), Some(root));
    assert_eq!(graph.find_in_subtree(root, "hand"), Some(hand));
    assert_eq!(graph.find_in_subtree(root, "foot"), None);
}

#[test]
fn find_in_subtree_does_not_escape_subtree() {
    let mut graph = SceneGraph::new();
    let root_a = graph.add_root(Node::named("a"));
    let _root_b = graph.add_root(Node::named("b"));

    assert_eq!(graph.find_in_subtree(root_a, "b"), None);
}

// ============================================================================
// Subtree Import (Deep Clone)
// ============================================================================

#[test]
fn import_subtree_copies_structure_and_data() {
    let mut template = SceneGraph::new();
    let src_root = template.add_root(Node::named("model"));
    let src_child = template.attach(Node::named("body"), src_root);
    template.get_mut(src_child).unwrap().transform.position = Vec3::new(0.0, 1.0, 0.0);

    let mut live = SceneGraph::new();
    let dst_root = live.import_subtree(&template, src_root).unwrap();

    assert_eq!(live.node_count(), 2);
    let dst_child = live.find_in_subtree(dst_root, "body").unwrap();
    assert!(approx_vec3(
        live.get(dst_child).unwrap().transform.position,
        Vec3::new(0.0, 1.0, 0.0)
    ));
}

#[test]
fn import_subtree_is_independent() {
    let mut template = SceneGraph::new();
    let src_root = template.add_root(Node::named("model"));
    template.attach(Node::named("body"), src_root);

    let mut live = SceneGraph::new();
    let dst_root = live.import_subtree(&template, src_root).unwrap();

    let dst_child = live.find_in_subtree(dst_root, "body").unwrap();
    live.get_mut(dst_child).unwrap().transform.position = Vec3::splat(7.0);

    let src_child = template.find_in_subtree(src_root, "body").unwrap();
    assert!(approx_vec3(
        template.get(src_child).unwrap().transform.position,
        Vec3::ZERO
    ));
}

#[test]
fn import_subtree_missing_source_returns_none() {
    let mut template = SceneGraph::new();
    let src_root = template.add_root(Node::named("model"));
    template.remove_subtree(src_root);

    let mut live = SceneGraph::new();
    assert!(live.import_subtree(&template, src_root).is_none());
}

// ============================================================================
// World-Matrix Hierarchy Update
// ============================================================================

#[test]
fn world_matrices_compose_parent_to_child() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let child = graph.attach(Node::named("child"), root);

    graph.get_mut(root).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
    graph.get_mut(child).unwrap().transform.position = Vec3::new(0.0, 1.0, 0.0);

    graph.update_world_transforms();

    let world = graph.get(child).unwrap().world_matrix().translation;
    assert!(approx_vec3(world.into(), Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn parent_move_propagates_to_clean_child() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let child = graph.attach(Node::named("child"), root);
    graph.update_world_transforms();

    graph.get_mut(root).unwrap().transform.position = Vec3::new(0.0, 0.0, 5.0);
    graph.update_world_transforms();

    let world = graph.get(child).unwrap().world_matrix().translation;
    assert!(approx_vec3(world.into(), Vec3::new(0.0, 0.0, 5.0)));
}

#[test]
fn scale_composes_into_child_world_matrix() {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(Node::named("root"));
    let child = graph.attach(Node::named("child"), root);

    graph.get_mut(root).unwrap().transform.scale = Vec3::splat(0.01);
    graph.get_mut(child).unwrap().transform.position = Vec3::new(100.0, 0.0, 0.0);
    graph.update_world_transforms();

    let world = graph.get(child).unwrap().world_matrix().translation;
    assert!(approx_vec3(world.into(), Vec3::new(1.0, 0.0, 0.0)));
}

// ============================================================================
// Transform Component
// ============================================================================

#[test]
fn update_local_matrix_only_on_change() {
    let mut transform = Transform::new();
    assert!(transform.update_local_matrix(), "first update is forced");
    assert!(!transform.update_local_matrix(), "no change, no recompute");

    transform.position = Vec3::X;
    assert!(transform.update_local_matrix());
}

#[test]
fn apply_local_matrix_from_mat4_decomposes() {
    let mat = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_y(0.5),
        Vec3::new(1.0, 2.0, 3.0),
    );

    let mut transform = Transform::new();
    transform.apply_local_matrix_from_mat4(mat);

    assert!(approx_vec3(transform.position, Vec3::new(1.0, 2.0, 3.0)));
    assert!(approx_vec3(transform.scale, Vec3::splat(2.0)));
    assert!(transform.rotation.angle_between(Quat::from_rotation_y(0.5)) < 1e-4);
}

#[test]
fn look_at_faces_target() {
    let mut transform = Transform::new();
    transform.position = Vec3::ZERO;
    transform.look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::Y);

    // Forward (-Z) should point at the target
    let forward = transform.rotation * Vec3::NEG_Z;
    assert!(approx_vec3(forward, Vec3::NEG_Z));
}

#[test]
fn look_at_degenerate_direction_is_ignored() {
    let mut transform = Transform::new();
    transform.rotation = Quat::from_rotation_y(1.0);
    // Target directly above: forward parallel to up
    transform.look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);

    assert!(transform.rotation.angle_between(Quat::from_rotation_y(1.0)) < 1e-4);
}
