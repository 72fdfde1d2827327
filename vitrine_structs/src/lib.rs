pub mod color;
pub mod structs_3d;

pub use color::{Color, ColorParseError};
pub use structs_3d::*;
