// Orientation algebra engine
pub mod core {
    pub mod geometry;
    pub mod math;
}

pub mod config;
pub mod control;
pub mod input;
pub mod visualizer;

pub use crate::core::geometry::{
    DisplayFrame, Operator, Quaternion, frame_from_vector, logarithm, quaternion_to_rotation,
    relative_orientation,
};
