//! Scene-graph nodes.

use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, NodeKey, ObjectKey};

/// What a node contributes to the scene beyond its transform.
///
/// A closed set dispatched by `match` during traversal; renderers switch
/// on it instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Pure grouping node: transform and children only.
    Group,
    /// Renderable object (mesh, material, optional animation).
    Object(ObjectKey),
    Camera(CameraKey),
    Light(LightKey),
}

/// A node in the scene tree.
///
/// # Hierarchy
///
/// - `parent` is `None` for root nodes; children are stored in insertion
///   order, which is sibling order.
/// - A node has at most one parent. [`SceneGraph::attach`] maintains this
///   and mirrors the parent onto the node's [`Transform`].
///
/// # Gating flags
///
/// `active` gates update traversal and `visible` gates render traversal;
/// either flag being false skips the node **and its whole subtree**.
///
/// [`SceneGraph::attach`]: crate::scene::SceneGraph::attach
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub visible: bool,
    pub active: bool,
    pub transform: Transform,
    pub kind: NodeKind,

    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl SceneNode {
    /// Creates a grouping node with a default transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    #[must_use]
    pub fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            visible: true,
            active: true,
            transform: Transform::new(),
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Child keys in sibling order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new("Node")
    }
}
