use crate::{
    region::{Rect, RegionLabel},
    utils::{midpoint, Axis, AxisMapping},
};

const BASE_FONT_SIZE: f64 = 8.0;
const MIN_FONT_SIZE: f64 = 8.0;
const MAX_FONT_SIZE: f64 = 12.0;

/// Label font size (pt) for a box whose largest extent is `box_size`.
///
/// Always within `[8, 12]`, including for negative or NaN sizes.
pub fn font_size_for(box_size: f64) -> f64 {
    MIN_FONT_SIZE.max((BASE_FONT_SIZE * box_size).min(MAX_FONT_SIZE))
}

/// Outline of a region's faces
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    /// Stroke width in points
    pub width: f64,
    /// Edge gray level, 0 is black
    pub gray: u8,
}
impl EdgeStyle {
    pub fn for_label(label: RegionLabel) -> Self {
        if label.is_innermost() {
            Self {
                width: 2.5,
                gray: 0,
            }
        } else {
            Self {
                width: 1.5,
                gray: 64,
            }
        }
    }
}

/// Text placed over a region
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Anchor in display coordinates
    pub anchor: [f64; 3],
    pub lines: Vec<String>,
    pub font_size: f64,
}
impl Annotation {
    pub fn for_region(label: RegionLabel, rect: &Rect, mapping: AxisMapping) -> Self {
        let [a1, a2, vertical] = mapping.display_axes();
        let box_size = Axis::ALL
            .iter()
            .map(|&axis| rect.extent(axis))
            .fold(f64::NEG_INFINITY, f64::max);
        let offset = if label.is_innermost() {
            0.1 * box_size
        } else {
            0.05 * box_size
        };

        let (lo1, hi1) = rect.interval(a1);
        let (lo2, hi2) = rect.interval(a2);
        let (_, top) = rect.interval(vertical);
        let anchor = [midpoint(lo1, hi1), midpoint(lo2, hi2), top + offset];

        let mut lines = vec![label.name().to_string()];
        for axis in Axis::ALL {
            let (lo, hi) = rect.interval(axis);
            lines.push(format!("{}: [{:?}, {:?}]", axis, lo, hi));
        }

        Self {
            anchor,
            lines,
            font_size: font_size_for(box_size),
        }
    }
}
