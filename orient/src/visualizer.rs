use std::sync::{Arc, PoisonError, RwLock};

use glam::{DMat3, DMat4, DVec3};

use crate::config::VisualizerConfig;
use crate::control::CommandQueue;
use crate::core::geometry::{DisplayFrame, compare, logarithm_with};
use crate::core::math::Tolerance;
use crate::input::{InputMode, OrientationInput};

/// Everything the renderer needs for one recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayState {
    /// Quaternion or single-matrix input: the rotation applied to the
    /// reference frame, with its so(3) readout.
    Orientation { rotation: DMat3, log: DVec3 },
    /// Compare input: the arrow frame and length.
    Arrow(DisplayFrame),
}

impl DisplayState {
    /// Homogeneous model rotation uploaded for the drawn mesh.
    pub fn model_rotation(&self) -> DMat4 {
        match self {
            DisplayState::Orientation { rotation, .. } => DMat4::from_mat3(*rotation),
            DisplayState::Arrow(frame) => frame.to_homogeneous(),
        }
    }

    /// Length the arrow mesh is scaled to along its forward axis. Orientation
    /// mode draws the unscaled frame.
    pub fn z_scalar(&self) -> f64 {
        match self {
            DisplayState::Orientation { .. } => 1.0,
            DisplayState::Arrow(frame) => frame.magnitude,
        }
    }
}

/// The stateless orientation engine: input in, display state out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visualizer {
    tolerance: Tolerance,
}

impl Visualizer {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self::new(config.tolerance)
    }

    /// `None` when the selected operator has nothing to compute; the caller
    /// keeps showing what it had.
    pub fn compute(&self, input: OrientationInput) -> Option<DisplayState> {
        let state = match input.mode {
            InputMode::Quaternion => {
                let rotation = input.quaternion.to_rotation();
                DisplayState::Orientation {
                    rotation,
                    log: logarithm_with(&rotation, self.tolerance),
                }
            }
            InputMode::Matrix => {
                let rotation = input.matrix.to_rotation();
                DisplayState::Orientation {
                    rotation,
                    log: logarithm_with(&rotation, self.tolerance),
                }
            }
            InputMode::Compare => DisplayState::Arrow(compare(
                &input.lhs.to_rotation(),
                &input.rhs.to_rotation(),
                input.operator,
                self.tolerance,
            )?),
        };

        tracing::debug!(
            mode = ?input.mode,
            z_scalar = state.z_scalar(),
            "recomputed display state"
        );
        Some(state)
    }
}

/// The last published display state.
///
/// States are replaced whole, so a reader never pairs a frame with the
/// magnitude of a different recompute.
#[derive(Debug, Default)]
pub struct DisplaySlot {
    current: RwLock<Option<Arc<DisplayState>>>,
}

impl DisplaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: DisplayState) {
        let next = Arc::new(state);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(next);
    }

    pub fn latest(&self) -> Option<Arc<DisplayState>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Owns the input panel's values and turns queued edits into published
/// display states, one recompute per edit.
pub struct Session {
    pub input: OrientationInput,
    visualizer: Visualizer,
    queue: CommandQueue,
    slot: Arc<DisplaySlot>,
}

impl Session {
    pub fn new(visualizer: Visualizer, input: OrientationInput, queue: CommandQueue) -> Self {
        let session = Self {
            input,
            visualizer,
            queue,
            slot: Arc::new(DisplaySlot::new()),
        };
        session.recompute();
        session
    }

    pub fn slot(&self) -> Arc<DisplaySlot> {
        Arc::clone(&self.slot)
    }

    /// Applies every queued edit. Returns the number of edits applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(cmd) = self.queue.try_recv() {
            tracing::trace!(?cmd, "input edit");
            if cmd.apply(&mut self.input) {
                self.recompute();
                applied += 1;
            }
        }
        applied
    }

    fn recompute(&self) {
        if let Some(state) = self.visualizer.compute(self.input) {
            self.slot.publish(state);
        }
    }
}
