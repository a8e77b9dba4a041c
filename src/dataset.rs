use std::collections::BTreeMap;

use crate::region::{RefinementRegion, RegionLabel};

/// Named collection of refinement regions, typically nested coarse to fine
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    name: String,
    regions: BTreeMap<RegionLabel, RefinementRegion>,
}
impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regions: BTreeMap::new(),
        }
    }
    /// Add a region under its own label, replacing any previous one
    pub fn with_region(mut self, region: RefinementRegion) -> Self {
        self.regions.insert(region.label(), region);
        self
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn get(&self, label: RegionLabel) -> Option<&RefinementRegion> {
        self.regions.get(&label)
    }
    pub fn regions(&self) -> impl Iterator<Item = &RefinementRegion> {
        self.regions.values()
    }
    /// Present regions in drawing order; absent labels are skipped
    pub fn draw_sequence(&self) -> impl Iterator<Item = &RefinementRegion> {
        RegionLabel::DRAW_ORDER
            .iter()
            .filter_map(move |label| self.regions.get(label))
    }
    /// Check whether every region lies inside the previous one in drawing order
    pub fn is_nested(&self) -> bool {
        let sequence: Vec<_> = self.draw_sequence().collect();
        sequence
            .windows(2)
            .all(|pair| pair[0].rect().contains_rect(pair[1].rect()))
    }
}

/// Refinement layouts compiled into the program
pub mod builtin {
    use super::Dataset;
    use crate::{
        region::{Rect, RefinementRegion, RegionLabel},
        Error,
    };

    pub const LOW_RESO_SMOOTH: &str = "05_LambdaByLIs1.0_lowReso_smooth";
    pub const LOW_RESO_SMOOTH_MORE_DETAIL: &str = "06_LambdaByLIs1.0_lowReso_smooth_moreDetail";

    pub fn datasets() -> Result<Vec<Dataset>, Error> {
        Ok(vec![
            Dataset::new(LOW_RESO_SMOOTH)
                .with_region(RefinementRegion::new(
                    RegionLabel::Aaa,
                    Rect::new(-2.5, 2.0, -1.5, 1.0, -1.3, 1.3),
                    0.05,
                )?)
                .with_region(RefinementRegion::new(
                    RegionLabel::Bbb,
                    Rect::new(-1.0, 1.5, -0.9, 1.0, -0.7, 0.7),
                    0.03,
                )?)
                .with_region(RefinementRegion::new(
                    RegionLabel::Ccc,
                    Rect::new(-0.35, 0.5, -0.5, 1.0, -0.28, 0.28),
                    0.02,
                )?),
            Dataset::new(LOW_RESO_SMOOTH_MORE_DETAIL)
                .with_region(RefinementRegion::new(
                    RegionLabel::Aaa,
                    Rect::new(-2.5, 2.0, -1.5, 1.0, -2.6, 2.6),
                    0.03,
                )?)
                .with_region(RefinementRegion::new(
                    RegionLabel::Bbb,
                    Rect::new(-1.5, 1.5, -0.9, 1.0, -1.4, 1.4),
                    0.015,
                )?)
                .with_region(RefinementRegion::new(
                    RegionLabel::Ccc,
                    Rect::new(-0.525, 0.5, -0.5, 1.0, -0.56, 0.56),
                    0.0075,
                )?),
        ])
    }
}
