//! Static 3D views of nested simulation refinement regions.
//!
//! A dataset table of axis-aligned boxes is turned into translucent,
//! annotated box plots on a shared scale and written out as PNG files.

pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod range;
pub mod region;
pub mod render;
pub mod style;
pub mod utils;

pub use config::{FontConfig, Layout, RenderConfig};
pub use dataset::Dataset;
pub use error::Error;
pub use geometry::{Annotation, BoxGeometry};
pub use range::AxisRanges;
pub use region::{Rect, RefinementRegion, Region, RegionLabel};
pub use render::Renderer;
pub use style::StyleTable;
pub use utils::{Axis, AxisMapping};
