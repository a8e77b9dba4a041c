use thiserror::Error;

use crate::{region::RegionLabel, utils::Axis};

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("region {label} has inverted {axis} bounds: lower {lo} > upper {hi}")]
    InvertedBounds {
        label: RegionLabel,
        axis: Axis,
        lo: f64,
        hi: f64,
    },
    #[error("no opacity entry for dataset {0:?}")]
    MissingStyle(String),
    #[error("opacity {alpha} for {label} in dataset {dataset:?} is outside [0, 1]")]
    InvalidOpacity {
        dataset: String,
        label: RegionLabel,
        alpha: f64,
    },
    #[error("cannot compute axis ranges without any region")]
    NoRegions,
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
