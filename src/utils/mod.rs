/// Min/max bookkeeping helpers
pub mod computations;
mod axis;

pub use computations::*;
pub use axis::{Axis, AxisMapping};
