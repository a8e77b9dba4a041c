use std::fmt;

/// Physical coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}
impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How physical axes are laid onto the three display slots.
///
/// The third display slot is the plot's vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisMapping {
    Identity,
    /// Show physical Y as the vertical axis, physical Z as depth
    #[default]
    SwapYZ,
}
impl AxisMapping {
    /// Physical axis shown on each display slot
    pub fn display_axes(&self) -> [Axis; 3] {
        match self {
            AxisMapping::Identity => [Axis::X, Axis::Y, Axis::Z],
            AxisMapping::SwapYZ => [Axis::X, Axis::Z, Axis::Y],
        }
    }
    pub fn to_display(&self, physical: [f64; 3]) -> [f64; 3] {
        self.display_axes().map(|axis| physical[axis.index()])
    }
    /// Physical axis rendered vertically
    pub fn vertical(&self) -> Axis {
        self.display_axes()[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_moves_physical_y_to_vertical() {
        assert_eq!(AxisMapping::SwapYZ.vertical(), Axis::Y);
        assert_eq!(AxisMapping::Identity.vertical(), Axis::Z);
        assert_eq!(
            AxisMapping::SwapYZ.to_display([1.0, 2.0, 3.0]),
            [1.0, 3.0, 2.0]
        );
        assert_eq!(
            AxisMapping::Identity.to_display([1.0, 2.0, 3.0]),
            [1.0, 2.0, 3.0]
        );
    }
}
