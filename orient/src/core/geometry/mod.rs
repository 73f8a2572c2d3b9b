pub mod frame;
pub mod quaternion;
pub mod relative;
pub mod so3;

pub use frame::{DisplayFrame, frame_from_vector, frame_from_vector_with, to_display_space};
pub use quaternion::{Quaternion, quaternion_to_rotation};
pub use relative::{
    Operator, compare, relative_orientation, relative_orientation_with, relative_rotation,
};
pub use so3::{LogBranch, logarithm, logarithm_with, rotation_angle};
