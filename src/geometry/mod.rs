mod annotation;

pub use annotation::{font_size_for, Annotation, EdgeStyle};

use crate::{region::Rect, utils::AxisMapping};

/// Corner loops for bottom, top, front, back, right and left faces
pub const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [4, 7, 3, 0],
];

/// Corners and faces of a box, expressed in display coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    vertices: [[f64; 3]; 8],
}
impl BoxGeometry {
    /// Lay out the eight corners of `rect` in display order.
    ///
    /// Corners 0..4 sit on the lower bound of the third display axis and
    /// trace `(lo,lo) (hi,lo) (hi,hi) (lo,hi)` over the first two; corners
    /// 4..8 repeat the pattern on the upper bound.
    pub fn build(rect: &Rect, mapping: AxisMapping) -> Self {
        let lo = mapping.to_display(rect.lo());
        let hi = mapping.to_display(rect.hi());
        let a = [lo[0], hi[0], hi[0], lo[0]];
        let b = [lo[1], lo[1], hi[1], hi[1]];

        let mut vertices = [[0.0; 3]; 8];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let c = if i < 4 { lo[2] } else { hi[2] };
            *vertex = [a[i % 4], b[i % 4], c];
        }
        Self { vertices }
    }
    pub fn vertices(&self) -> &[[f64; 3]; 8] {
        &self.vertices
    }
    pub fn faces(&self) -> [[[f64; 3]; 4]; 6] {
        FACE_INDICES.map(|face| face.map(|i| self.vertices[i]))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn sorted_unique(mut values: Vec<[f64; 3]>) -> Vec<[f64; 3]> {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values.dedup();
        values
    }

    fn cartesian(xs: [f64; 2], ys: [f64; 2], zs: [f64; 2]) -> Vec<[f64; 3]> {
        let mut out = Vec::new();
        for x in xs {
            for y in ys {
                for z in zs {
                    out.push([x, y, z]);
                }
            }
        }
        sorted_unique(out)
    }

    #[test]
    fn identity_vertices_are_the_corner_product() {
        let rect = Rect::new(-2.5, 2.0, -1.5, 1.0, -1.3, 1.3);
        let geometry = BoxGeometry::build(&rect, AxisMapping::Identity);
        assert_eq!(
            sorted_unique(geometry.vertices().to_vec()),
            cartesian([-2.5, 2.0], [-1.5, 1.0], [-1.3, 1.3])
        );
    }

    #[test]
    fn swapped_vertices_put_physical_y_last() {
        let rect = Rect::new(-2.5, 2.0, -1.5, 1.0, -1.3, 1.3);
        let geometry = BoxGeometry::build(&rect, AxisMapping::SwapYZ);
        assert_eq!(
            sorted_unique(geometry.vertices().to_vec()),
            cartesian([-2.5, 2.0], [-1.3, 1.3], [-1.5, 1.0])
        );
        // bottom face lies on the lowest vertical coordinate
        assert!(geometry.faces()[0].iter().all(|v| v[2] == -1.5));
        assert!(geometry.faces()[1].iter().all(|v| v[2] == 1.0));
    }

    #[test]
    fn faces_are_planar_boundary_quads() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut bounds = [0.0; 6];
            for axis in 0..3 {
                let a: f64 = rng.gen_range(-10.0..10.0);
                let b: f64 = a + rng.gen_range(0.01..5.0);
                bounds[2 * axis] = a;
                bounds[2 * axis + 1] = b;
            }
            let rect = Rect::new(
                bounds[0], bounds[1], bounds[2], bounds[3], bounds[4], bounds[5],
            );
            for mapping in [AxisMapping::Identity, AxisMapping::SwapYZ] {
                let geometry = BoxGeometry::build(&rect, mapping);
                assert_eq!(sorted_unique(geometry.vertices().to_vec()).len(), 8);

                let lo = mapping.to_display(rect.lo());
                let hi = mapping.to_display(rect.hi());
                let faces = geometry.faces();
                assert_eq!(faces.len(), 6);
                let mut sides = Vec::new();
                for face in faces {
                    // every face has one coordinate pinned to a bound
                    let pinned = (0..3).find_map(|k| {
                        if face.iter().all(|v| v[k] == lo[k]) {
                            Some((k, false))
                        } else if face.iter().all(|v| v[k] == hi[k]) {
                            Some((k, true))
                        } else {
                            None
                        }
                    });
                    let side = pinned.expect("face is not on the box boundary");
                    sides.push(side);
                    assert_eq!(sorted_unique(face.to_vec()).len(), 4);
                }
                sides.sort();
                sides.dedup();
                assert_eq!(sides.len(), 6);
            }
        }
    }

    #[test]
    fn inverted_box_still_builds() {
        let rect = Rect::new(1.0, -1.0, 0.0, 1.0, 0.0, 1.0);
        let geometry = BoxGeometry::build(&rect, AxisMapping::Identity);
        assert_eq!(geometry.vertices()[0][0], 1.0);
        assert_eq!(geometry.vertices()[1][0], -1.0);
    }
}
