use orient::input::InputMode;

/// The meshes the visualizer can draw. Each mode shows two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// Fixed world axes.
    ReferenceAxes,
    /// Axes carried by the current rotation.
    OrientationFrame,
    /// Arrow scaled along its forward axis.
    Arrow,
}

#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        let mut scene = Self { nodes: Vec::new() };
        scene.add_node(SceneNode::new("reference axes", MeshKind::ReferenceAxes));
        scene.add_node(SceneNode::new("orientation frame", MeshKind::OrientationFrame));
        scene.add_node(SceneNode::new("arrow", MeshKind::Arrow));
        scene
    }
}

impl SceneGraph {
    pub fn add_node(&mut self, node: SceneNode) {
        tracing::debug!(name = %node.name, "adding scene node");
        self.nodes.push(node);
    }

    /// Nodes drawn for `mode`.
    pub fn visible(&self, mode: InputMode) -> impl Iterator<Item = &SceneNode> {
        let shown: &[MeshKind] = match mode {
            InputMode::Quaternion | InputMode::Matrix => {
                &[MeshKind::ReferenceAxes, MeshKind::OrientationFrame]
            }
            InputMode::Compare => &[MeshKind::OrientationFrame, MeshKind::Arrow],
        };
        self.nodes.iter().filter(move |node| shown.contains(&node.kind))
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: MeshKind,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: MeshKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
