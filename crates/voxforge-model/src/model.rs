//! Insertion-ordered voxel collection and shape rasterization

use crate::voxel::Voxel;
use std::collections::HashMap;
use voxforge_core::Color;

/// Orientation of a cylinder's height axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An append-and-query voxel collection with shape primitives.
///
/// Coordinates are deduplicated on write: the first writer wins, so
/// later overlapping shapes never corrupt earlier ones. Insertion order
/// is preserved for iteration. The coordinate index maps to the voxel's
/// slot in the vec, keeping `has_voxel` and `recolor_voxel` O(1).
#[derive(Debug, Default)]
pub struct VoxelModel {
    voxels: Vec<Voxel>,
    index: HashMap<(i32, i32, i32), usize>,
}

impl VoxelModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single voxel. A write to an occupied coordinate is a no-op.
    pub fn add_voxel(&mut self, x: i32, y: i32, z: i32, color: Color) {
        if self.index.contains_key(&(x, y, z)) {
            return;
        }
        self.index.insert((x, y, z), self.voxels.len());
        self.voxels.push(Voxel::new(x, y, z, color));
    }

    /// Fill the half-open cuboid `[x, x+w) x [y, y+h) x [z, z+d)`
    pub fn add_box(&mut self, x: i32, y: i32, z: i32, w: i32, h: i32, d: i32, color: Color) {
        for vx in x..x + w {
            for vy in y..y + h {
                for vz in z..z + d {
                    self.add_voxel(vx, vy, vz, color);
                }
            }
        }
    }

    /// Add a box plus its mirror image reflected across the plane
    /// `X = axis_x`. The mirrored box starts at
    /// `axis_x - (x + w - axis_x)`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_symmetric_box(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        w: i32,
        h: i32,
        d: i32,
        color: Color,
        axis_x: i32,
    ) {
        self.add_box(x, y, z, w, h, d, color);
        let mirror_start_x = axis_x - (x + w - axis_x);
        self.add_box(mirror_start_x, y, z, w, h, d, color);
    }

    /// Fill all integer offsets with `dx^2 + dy^2 + dz^2 <= radius^2`
    pub fn add_sphere(&mut self, cx: i32, cy: i32, cz: i32, radius: i32, color: Color) {
        let radius_sq = radius * radius;
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                for dz in -radius..=radius {
                    if dx * dx + dy * dy + dz * dz <= radius_sq {
                        self.add_voxel(cx + dx, cy + dy, cz + dz, color);
                    }
                }
            }
        }
    }

    /// Stack `height` discs of the given radius along the chosen axis
    #[allow(clippy::too_many_arguments)]
    pub fn add_cylinder(
        &mut self,
        cx: i32,
        cy: i32,
        cz: i32,
        radius: i32,
        height: i32,
        color: Color,
        axis: Axis,
    ) {
        let radius_sq = radius * radius;
        for layer in 0..height {
            for r1 in -radius..=radius {
                for r2 in -radius..=radius {
                    if r1 * r1 + r2 * r2 <= radius_sq {
                        match axis {
                            Axis::X => self.add_voxel(cx + layer, cy + r1, cz + r2, color),
                            Axis::Y => self.add_voxel(cx + r1, cy + layer, cz + r2, color),
                            Axis::Z => self.add_voxel(cx + r1, cy + r2, cz + layer, color),
                        }
                    }
                }
            }
        }
    }

    /// Fill a box whose cross-section linearly interpolates from
    /// `(w1, d1)` at the base to `(w2, d2)` at the top, each layer
    /// centered on the base footprint.
    #[allow(clippy::too_many_arguments)]
    pub fn add_tapered_box(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        w1: i32,
        h: i32,
        d1: i32,
        w2: i32,
        d2: i32,
        color: Color,
    ) {
        for layer in 0..h {
            let t = if h > 1 {
                f64::from(layer) / f64::from(h - 1)
            } else {
                0.0
            };
            let w = (f64::from(w1) + f64::from(w2 - w1) * t).floor() as i32;
            let d = (f64::from(d1) + f64::from(d2 - d1) * t).floor() as i32;
            let offset_x = (w1 - w).div_euclid(2);
            let offset_z = (d1 - d).div_euclid(2);
            for dx in 0..w {
                for dz in 0..d {
                    self.add_voxel(x + offset_x + dx, y + layer, z + offset_z + dz, color);
                }
            }
        }
    }

    /// Add each explicit point
    pub fn add_irregular_shape(&mut self, points: &[(i32, i32, i32)], color: Color) {
        for &(x, y, z) in points {
            self.add_voxel(x, y, z, color);
        }
    }

    /// O(1) occupancy check
    pub fn has_voxel(&self, x: i32, y: i32, z: i32) -> bool {
        self.index.contains_key(&(x, y, z))
    }

    /// Change the color of an existing voxel in place.
    ///
    /// Returns `true` only if the coordinate is occupied; otherwise the
    /// call is a no-op and returns `false`. This is the sole mutation
    /// path decoration may use, which is what guarantees decorations
    /// never create geometry.
    pub fn recolor_voxel(&mut self, x: i32, y: i32, z: i32, color: Color) -> bool {
        match self.index.get(&(x, y, z)) {
            Some(&slot) => {
                self.voxels[slot].color = color;
                true
            }
            None => false,
        }
    }

    /// All voxels in insertion order
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Number of voxels in the model
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Consume the model, yielding the voxels in insertion order
    pub fn into_voxels(self) -> Vec<Voxel> {
        self.voxels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::new("#AAAAAA");
    const B: Color = Color::new("#BBBBBB");

    #[test]
    fn add_voxel_dedups_first_writer_wins() {
        let mut model = VoxelModel::new();
        model.add_voxel(1, 2, 3, A);
        model.add_voxel(1, 2, 3, B);
        assert_eq!(model.len(), 1);
        assert_eq!(model.voxels()[0].color, A);
    }

    #[test]
    fn add_box_fills_half_open_extent() {
        let mut model = VoxelModel::new();
        model.add_box(0, 0, 0, 2, 3, 4, A);
        assert_eq!(model.len(), 2 * 3 * 4);
        assert!(model.has_voxel(0, 0, 0));
        assert!(model.has_voxel(1, 2, 3));
        assert!(!model.has_voxel(2, 0, 0));
    }

    #[test]
    fn symmetric_box_mirror_formula() {
        let mut model = VoxelModel::new();
        model.add_symmetric_box(2, 0, 0, 1, 1, 1, A, 0);
        // mirror_start_x = 0 - (2 + 1 - 0) = -3
        assert!(model.has_voxel(2, 0, 0));
        assert!(model.has_voxel(-3, 0, 0));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn symmetric_box_overlapping_mirror_dedups() {
        let mut model = VoxelModel::new();
        // A box straddling the mirror plane maps onto itself.
        model.add_symmetric_box(-1, 0, 0, 2, 1, 1, A, 0);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn sphere_radius_one_is_a_plus() {
        let mut model = VoxelModel::new();
        model.add_sphere(0, 0, 0, 1, A);
        // Center plus the six axis neighbors.
        assert_eq!(model.len(), 7);
        assert!(model.has_voxel(0, 0, 0));
        assert!(model.has_voxel(1, 0, 0));
        assert!(!model.has_voxel(1, 1, 0));
    }

    #[test]
    fn cylinder_axis_selects_orientation() {
        let mut y_cyl = VoxelModel::new();
        y_cyl.add_cylinder(0, 0, 0, 1, 4, A, Axis::Y);
        assert!(y_cyl.has_voxel(0, 3, 0));
        assert!(!y_cyl.has_voxel(3, 0, 0));

        let mut x_cyl = VoxelModel::new();
        x_cyl.add_cylinder(0, 0, 0, 1, 4, A, Axis::X);
        assert!(x_cyl.has_voxel(3, 0, 0));
        assert!(!x_cyl.has_voxel(0, 3, 0));

        let mut z_cyl = VoxelModel::new();
        z_cyl.add_cylinder(0, 0, 0, 1, 4, A, Axis::Z);
        assert!(z_cyl.has_voxel(0, 0, 3));
        assert!(!z_cyl.has_voxel(0, 3, 0));
    }

    #[test]
    fn cylinder_layers_match_disc_size() {
        let mut model = VoxelModel::new();
        model.add_cylinder(0, 0, 0, 1, 2, A, Axis::Y);
        // Disc of radius 1 has 5 cells, times 2 layers.
        assert_eq!(model.len(), 10);
    }

    #[test]
    fn tapered_box_interpolates_layers() {
        let mut model = VoxelModel::new();
        model.add_tapered_box(0, 0, 0, 4, 3, 4, 2, 2, A);
        // Layer widths: t=0 -> 4, t=0.5 -> 3, t=1 -> 2.
        let per_layer = |y: i32| {
            model
                .voxels()
                .iter()
                .filter(|v| v.y == y)
                .count()
        };
        assert_eq!(per_layer(0), 16);
        assert_eq!(per_layer(1), 9);
        assert_eq!(per_layer(2), 4);
    }

    #[test]
    fn tapered_box_single_layer_uses_base() {
        let mut model = VoxelModel::new();
        model.add_tapered_box(0, 0, 0, 3, 1, 3, 9, 9, A);
        assert_eq!(model.len(), 9);
    }

    #[test]
    fn irregular_shape_places_each_point() {
        let mut model = VoxelModel::new();
        model.add_irregular_shape(&[(0, 0, 0), (5, -2, 1), (0, 0, 0)], A);
        assert_eq!(model.len(), 2);
        assert!(model.has_voxel(5, -2, 1));
    }

    #[test]
    fn recolor_only_touches_existing() {
        let mut model = VoxelModel::new();
        model.add_voxel(0, 0, 0, A);
        assert!(model.recolor_voxel(0, 0, 0, B));
        assert_eq!(model.voxels()[0].color, B);
        assert!(!model.recolor_voxel(9, 9, 9, B));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn recolor_preserves_insertion_order() {
        let mut model = VoxelModel::new();
        model.add_voxel(0, 0, 0, A);
        model.add_voxel(1, 0, 0, A);
        model.recolor_voxel(0, 0, 0, B);
        let order: Vec<(i32, i32, i32)> = model.voxels().iter().map(|v| v.position()).collect();
        assert_eq!(order, vec![(0, 0, 0), (1, 0, 0)]);
    }

    #[test]
    fn negative_coordinates_do_not_collide() {
        // A packed/naive string key could conflate these triples; the
        // tuple key must keep them distinct.
        let mut model = VoxelModel::new();
        model.add_voxel(1, -1, 0, A);
        model.add_voxel(1, 1, 0, B);
        model.add_voxel(-1, 1, 0, A);
        model.add_voxel(-1, -1, 0, B);
        assert_eq!(model.len(), 4);
    }
}
