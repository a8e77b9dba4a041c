use std::ops::Range;

use crate::{
    dataset::Dataset,
    region::Region,
    utils::{min_max, Axis, AxisMapping},
    Error,
};

/// Padding (m) added on both sides of the unified ranges
pub const AXIS_PADDING: f64 = 1.0;

/// Shared `(min, max)` per physical axis for every subplot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRanges {
    ranges: [(f64, f64); 3],
}
impl AxisRanges {
    /// Scan every region of every dataset and pad the extremes by `padding`
    pub fn unify(datasets: &[Dataset], padding: f64) -> Result<Self, Error> {
        Self::from_regions(datasets.iter().flat_map(|d| d.regions()), padding)
    }

    pub fn from_regions<'a, R, I>(regions: I, padding: f64) -> Result<Self, Error>
    where
        R: Region + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let boxes: Vec<_> = regions.into_iter().map(|r| r.bounding_box()).collect();
        let mut ranges = [(0.0, 0.0); 3];
        for axis in Axis::ALL {
            let (lo, hi) = min_max(boxes.iter().flat_map(|rect| {
                let (lo, hi) = rect.interval(axis);
                [lo, hi]
            }))
            .ok_or(Error::NoRegions)?;
            ranges[axis.index()] = (lo - padding, hi + padding);
        }
        Ok(Self { ranges })
    }

    pub fn get(&self, axis: Axis) -> (f64, f64) {
        self.ranges[axis.index()]
    }
    /// Ranges in display slot order
    pub fn display(&self, mapping: AxisMapping) -> [Range<f64>; 3] {
        mapping.display_axes().map(|axis| {
            let (lo, hi) = self.get(axis);
            lo..hi
        })
    }
}
