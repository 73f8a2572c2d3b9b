use glam::Mat4;
use orient::visualizer::DisplayState;

use super::scene::{MeshKind, SceneNode};

/// Per-mesh uniform data, as uploaded to the GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    pub rotation: [f32; 16],
    pub z_scalar: f32,
}

impl Uniform {
    pub const IDENTITY: Self = Self {
        rotation: [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ],
        z_scalar: 1.0,
    };

    pub fn for_node(kind: MeshKind, state: &DisplayState) -> Self {
        match kind {
            MeshKind::ReferenceAxes => Self::IDENTITY,
            MeshKind::OrientationFrame | MeshKind::Arrow => Self {
                rotation: state.model_rotation().as_mat4().to_cols_array(),
                z_scalar: state.z_scalar() as f32,
            },
        }
    }
}

/// Stand-in for the GPU renderer: records the uniforms it would upload.
#[derive(Debug, Default)]
pub struct Renderer {
    frame_count: u64,
    uploads: Vec<Uniform>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.uploads.clear();
        tracing::trace!(frame = self.frame_count, "begin frame");
    }

    pub fn draw(&mut self, node: &SceneNode, state: &DisplayState) {
        let uniform = Uniform::for_node(node.kind, state);
        tracing::debug!(
            target: "renderer",
            frame = self.frame_count,
            node = %node.name,
            z_scalar = uniform.z_scalar,
            rotation = ?Mat4::from_cols_array(&uniform.rotation),
            "draw"
        );
        self.uploads.push(uniform);
    }

    pub fn end_frame(&mut self) {
        self.frame_count += 1;
        tracing::trace!(frame = self.frame_count, "end frame");
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Uniforms uploaded since the last `begin_frame`.
    pub fn uploads(&self) -> &[Uniform] {
        &self.uploads
    }
}
