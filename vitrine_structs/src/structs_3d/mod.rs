pub mod vector3;
pub use vector3::*;

pub mod transform_3d;
pub use transform_3d::*;

pub mod quaternion;
pub use quaternion::*;
