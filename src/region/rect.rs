use super::Region;
use crate::utils::Axis;

/// Axis-aligned rectangular box.
///
/// Bounds are stored as given; an inverted pair yields negative extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xlo: f64,
    xhi: f64,
    ylo: f64,
    yhi: f64,
    zlo: f64,
    zhi: f64,
}
impl Rect {
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64, zlo: f64, zhi: f64) -> Self {
        Self {
            xlo,
            xhi,
            ylo,
            yhi,
            zlo,
            zhi,
        }
    }
    pub fn lo(&self) -> [f64; 3] {
        [self.xlo, self.ylo, self.zlo]
    }
    pub fn hi(&self) -> [f64; 3] {
        [self.xhi, self.yhi, self.zhi]
    }
    /// `(lo, hi)` along one axis
    pub fn interval(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.xlo, self.xhi),
            Axis::Y => (self.ylo, self.yhi),
            Axis::Z => (self.zlo, self.zhi),
        }
    }
    pub fn extent(&self, axis: Axis) -> f64 {
        let (lo, hi) = self.interval(axis);
        hi - lo
    }
    /// Check whether `other` lies entirely inside this box (shared faces allowed)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let (lo, hi) = self.interval(axis);
            let (olo, ohi) = other.interval(axis);
            lo <= olo && ohi <= hi
        })
    }
}
impl Region for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }
}
