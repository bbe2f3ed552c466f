//! The scene graph: node tree, component pools and frame traversal.

use glam::Mat4;
use slotmap::SlotMap;

use crate::errors::SceneError;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::{NodeKind, SceneNode};
use crate::scene::object::Object;
use crate::scene::{CameraKey, LightKey, NodeKey, ObjectKey};

/// Owns the node tree and the components nodes point at.
///
/// Nodes live in a slotmap arena and reference each other by key, so
/// parent back-references are plain observing keys — ownership flows
/// strictly parent-to-child through the children lists and the root set.
///
/// The per-frame contract is `update(dt)` followed by a
/// [`visit_visible`](Self::visit_visible) render pass, both single-threaded
/// pre-order traversals.
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, SceneNode>,
    roots: Vec<NodeKey>,

    // ==== Component pools ====
    pub objects: SlotMap<ObjectKey, Object>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    /// Node whose camera a renderer should use.
    pub active_camera: Option<NodeKey>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
            objects: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            active_camera: None,
        }
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Inserts a node as a root.
    pub fn insert(&mut self, node: SceneNode) -> NodeKey {
        let key = self.nodes.insert(node);
        self.roots.push(key);
        key
    }

    /// Inserts a node and attaches it under `parent`. Nothing is inserted
    /// when the parent key is stale.
    pub fn insert_child(&mut self, node: SceneNode, parent: NodeKey) -> Result<NodeKey, SceneError> {
        if !self.nodes.contains_key(parent) {
            log::warn!("insert_child called with a stale parent key");
            return Err(SceneError::NodeNotFound);
        }
        let key = self.insert(node);
        self.attach(key, parent)?;
        Ok(key)
    }

    /// Wraps `object` in a node named after it and inserts it as a root.
    pub fn insert_object(&mut self, object: Object) -> NodeKey {
        let name = object.name.clone();
        let key = self.objects.insert(object);
        self.insert(SceneNode::with_kind(name, NodeKind::Object(key)))
    }

    pub fn insert_camera(&mut self, camera: Camera) -> NodeKey {
        let name = camera.name.to_string();
        let key = self.cameras.insert(camera);
        let node_key = self.insert(SceneNode::with_kind(name, NodeKind::Camera(key)));
        if self.active_camera.is_none() {
            self.active_camera = Some(node_key);
        }
        node_key
    }

    pub fn insert_light(&mut self, light: Light) -> NodeKey {
        let key = self.lights.insert(light);
        self.insert(SceneNode::with_kind("Light", NodeKind::Light(key)))
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Makes `child` a child of `parent`, detaching it from any previous
    /// parent first (a node has at most one parent). The child transform's
    /// parent reference is kept in sync with the node parent.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) -> Result<(), SceneError> {
        if child == parent {
            log::warn!("cannot attach a node to itself");
            return Err(SceneError::SelfAttach);
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::warn!("attach called with a stale node key");
            return Err(SceneError::NodeNotFound);
        }

        self.unlink(child);
        self.nodes[parent].children.push(child);

        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.transform.set_parent(Some(parent));
        Ok(())
    }

    /// Detaches `child` from its parent, making it a root. No-op for a
    /// node that already is one.
    pub fn detach(&mut self, child: NodeKey) -> Result<(), SceneError> {
        if !self.nodes.contains_key(child) {
            return Err(SceneError::NodeNotFound);
        }
        if self.nodes[child].parent.is_none() {
            return Ok(());
        }

        self.unlink(child);
        self.roots.push(child);

        let node = &mut self.nodes[child];
        node.parent = None;
        node.transform.set_parent(None);
        Ok(())
    }

    /// Removes `key` and its whole subtree, releasing the components the
    /// removed nodes pointed at.
    pub fn remove(&mut self, key: NodeKey) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };
        let children = node.children.clone();
        for child in children {
            self.remove(child);
        }

        self.unlink(key);
        if self.active_camera == Some(key) {
            self.active_camera = None;
        }
        if let Some(node) = self.nodes.remove(key) {
            match node.kind {
                NodeKind::Group => {}
                NodeKind::Object(k) => {
                    self.objects.remove(k);
                }
                NodeKind::Camera(k) => {
                    self.cameras.remove(k);
                }
                NodeKind::Light(k) => {
                    self.lights.remove(k);
                }
            }
        }
    }

    /// Removes `child` from its parent's child list or the root set.
    fn unlink(&mut self, child: NodeKey) {
        match self.nodes[child].parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|&k| k != child);
                }
            }
            None => self.roots.retain(|&k| k != child),
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[must_use]
    pub fn get(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    #[must_use]
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Camera component of the active camera node, if any.
    #[must_use]
    pub fn main_camera(&self) -> Option<&Camera> {
        let node = self.nodes.get(self.active_camera?)?;
        match node.kind {
            NodeKind::Camera(key) => self.cameras.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn main_camera_mut(&mut self) -> Option<&mut Camera> {
        let node = self.nodes.get(self.active_camera?)?;
        match node.kind {
            NodeKind::Camera(key) => self.cameras.get_mut(key),
            _ => None,
        }
    }

    // ========================================================================
    // Matrices
    // ========================================================================

    /// World matrix of `key`: the local matrix composed through the parent
    /// chain, recomputed on every call. Locals are cached per transform,
    /// the composition never is — parents may move every frame.
    ///
    /// The parent chain must be acyclic.
    #[must_use]
    pub fn world_matrix(&self, key: NodeKey) -> Mat4 {
        let Some(node) = self.nodes.get(key) else {
            return Mat4::IDENTITY;
        };
        let local = node.transform.local_matrix();
        match node.transform.parent() {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }

    // ========================================================================
    // Frame traversal
    // ========================================================================

    /// Advances animation state for the frame.
    ///
    /// Pre-order over the tree; a node with `active == false` is skipped
    /// together with its whole subtree. For each live object node the
    /// animation controller is stepped and its sampled pose written to the
    /// node transform, then the procedural bob offset is added on top.
    pub fn update(&mut self, dt: f32) {
        let mut stack: Vec<NodeKey> = Vec::with_capacity(64);
        stack.extend(self.roots.iter().rev());

        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };
            if !node.active {
                continue;
            }

            if let NodeKind::Object(object_key) = node.kind {
                if let Some(object) = self.objects.get_mut(object_key) {
                    if let Some(controller) = &mut object.controller {
                        controller.update(dt);
                        controller.apply_to_transform(&mut node.transform);
                    }
                    if let Some(bobbing) = &mut object.bobbing {
                        let offset = bobbing.advance(dt);
                        node.transform.translate(glam::Vec3::new(0.0, offset, 0.0));
                    }
                }
            }

            stack.extend(node.children.iter().rev());
        }
    }

    /// Pre-order render traversal. A node with `visible == false` gates
    /// its whole subtree; the visitor never runs for gated nodes. World
    /// matrices are composed on the way down.
    pub fn visit_visible<F>(&self, mut visitor: F)
    where
        F: FnMut(NodeKey, &SceneNode, Mat4),
    {
        let mut stack: Vec<(NodeKey, Mat4)> = Vec::with_capacity(64);
        for &root in self.roots.iter().rev() {
            stack.push((root, Mat4::IDENTITY));
        }

        while let Some((key, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if !node.visible {
                continue;
            }

            let world = parent_world * node.transform.local_matrix();
            visitor(key, node, world);

            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
