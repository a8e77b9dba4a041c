pub mod rect;
pub use rect::Rect;

use std::fmt;

use crate::{utils::Axis, Error};

pub trait Region {
    fn bounding_box(&self) -> Rect;
}

/// Refinement level of a region, coarsest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionLabel {
    Aaa,
    Bbb,
    Ccc,
}
impl RegionLabel {
    /// Largest to smallest, so outer boxes never cover inner ones
    pub const DRAW_ORDER: [RegionLabel; 3] =
        [RegionLabel::Aaa, RegionLabel::Bbb, RegionLabel::Ccc];

    pub fn name(&self) -> &'static str {
        match self {
            RegionLabel::Aaa => "AAA",
            RegionLabel::Bbb => "BBB",
            RegionLabel::Ccc => "CCC",
        }
    }
    pub fn index(&self) -> usize {
        match self {
            RegionLabel::Aaa => 0,
            RegionLabel::Bbb => 1,
            RegionLabel::Ccc => 2,
        }
    }
    /// The finest level gets emphasized outlines and a raised annotation
    pub fn is_innermost(&self) -> bool {
        matches!(self, RegionLabel::Ccc)
    }
}
impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labelled simulation refinement domain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefinementRegion {
    label: RegionLabel,
    rect: Rect,
    particle_spacing: f64,
}
impl RefinementRegion {
    /// Create a region, rejecting any axis whose lower bound exceeds the upper one
    pub fn new(label: RegionLabel, rect: Rect, particle_spacing: f64) -> Result<Self, Error> {
        for axis in Axis::ALL {
            let (lo, hi) = rect.interval(axis);
            if lo > hi {
                return Err(Error::InvertedBounds { label, axis, lo, hi });
            }
        }
        Ok(Self {
            label,
            rect,
            particle_spacing,
        })
    }
    pub fn label(&self) -> RegionLabel {
        self.label
    }
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
    /// Distance between particles (m); informational only
    pub fn particle_spacing(&self) -> f64 {
        self.particle_spacing
    }
}
impl Region for RefinementRegion {
    fn bounding_box(&self) -> Rect {
        self.rect
    }
}
