//! Animal parts: bodies, necks, trunks, tentacles, tails, heads, wings, fins

use super::Side;
use crate::palette::Palette;
use voxforge_core::Color;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

/// Animal tail variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailKind {
    Long,
    Bushy,
    Fin,
    Segmented,
}

impl TailKind {
    pub const ALL: [TailKind; 4] = [
        TailKind::Long,
        TailKind::Bushy,
        TailKind::Fin,
        TailKind::Segmented,
    ];
}

/// Animal head variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimalHeadKind {
    Snout,
    Beak,
    Horns,
    Antlers,
    MultiEye,
}

impl AnimalHeadKind {
    pub const ALL: [AnimalHeadKind; 5] = [
        AnimalHeadKind::Snout,
        AnimalHeadKind::Beak,
        AnimalHeadKind::Horns,
        AnimalHeadKind::Antlers,
        AnimalHeadKind::MultiEye,
    ];
}

/// Boxy torso for ground animals, centered on (x, z)
pub fn quadruped_body(
    model: &mut VoxelModel,
    x: i32,
    y: i32,
    z: i32,
    length: i32,
    width: i32,
    height: i32,
    palette: &Palette,
) {
    model.add_box(x - width / 2, y, z - length / 2, width, height, length, palette.primary);
}

/// Upright torso for bipeds and birds, centered on (x, z)
pub fn biped_body(
    model: &mut VoxelModel,
    x: i32,
    y: i32,
    z: i32,
    width: i32,
    height: i32,
    depth: i32,
    palette: &Palette,
) {
    model.add_box(x - width / 2, y, z - depth / 2, width, height, depth, palette.primary);
}

/// Streamlined tapered body for swimmers
pub fn aquatic_body(
    model: &mut VoxelModel,
    x: i32,
    y: i32,
    z: i32,
    length: i32,
    width: i32,
    height: i32,
    palette: &Palette,
) {
    model.add_tapered_box(
        x - width / 2,
        y,
        z - length / 2,
        width,
        height,
        length,
        width * 3 / 5,
        length * 4 / 5,
        palette.primary,
    );
}

/// Lightweight body for fliers
pub fn flying_body(
    model: &mut VoxelModel,
    x: i32,
    y: i32,
    z: i32,
    width: i32,
    height: i32,
    depth: i32,
    palette: &Palette,
) {
    model.add_box(x - width / 2, y, z - depth / 2, width, height, depth, palette.primary);
}

/// Vertical stacked neck rising from (x, y, z)
pub fn long_neck(model: &mut VoxelModel, x: i32, y: i32, z: i32, length: i32, palette: &Palette) {
    let neck_width = 2;
    for i in 0..length {
        model.add_box(
            x - neck_width / 2,
            y + i,
            z - neck_width / 2,
            neck_width,
            1,
            neck_width,
            palette.primary,
        );
    }
}

/// Curved trunk reaching forward along +Z
pub fn trunk(model: &mut VoxelModel, x: i32, y: i32, z: i32, length: i32, palette: &Palette) {
    let trunk_width = 2;
    model.add_box(x - trunk_width / 2, y, z, trunk_width, trunk_width, 3, palette.primary);
    for i in 0..length {
        // Gentle side-to-side sway; sin stays well clear of integer
        // boundaries at this step, so flooring is stable.
        let offset_x = (f64::from(i) * 0.3).sin().floor() as i32;
        model.add_box(
            x - trunk_width / 2 + offset_x,
            y,
            z + 3 + i,
            trunk_width,
            trunk_width,
            1,
            palette.primary,
        );
    }
    model.add_box(x - 1, y, z + 3 + length, 2, 1, 1, palette.detail);
}

/// Radial tentacles around (x, z), thinning toward the tip
pub fn tentacles(
    model: &mut VoxelModel,
    count: i32,
    center_x: i32,
    center_y: i32,
    center_z: i32,
    length: i32,
    palette: &Palette,
) {
    for t in 0..count {
        let angle = f64::from(t) / f64::from(count) * std::f64::consts::TAU;
        let start_x = center_x + (angle.cos() * 2.0).round() as i32;
        let start_z = center_z + (angle.sin() * 2.0).round() as i32;

        for i in 0..length {
            let segment_width = (2 - i / 3).max(1);
            let curve_x = (f64::from(i) * 0.2).sin().round() as i32;
            let curve_z = (f64::from(i) * 0.2).cos().round() as i32;
            model.add_box(
                start_x + curve_x - segment_width / 2,
                center_y,
                start_z + curve_z + i - segment_width / 2,
                segment_width,
                segment_width,
                segment_width,
                palette.secondary,
            );
        }
    }
}

/// Tail of the given kind, trailing along -Z from (x, y, z)
pub fn tail(
    model: &mut VoxelModel,
    kind: TailKind,
    x: i32,
    y: i32,
    z: i32,
    length: i32,
    palette: &Palette,
) {
    match kind {
        TailKind::Long => {
            for i in 0..length {
                model.add_box(x - 1, y, z - i, 2, 1, 1, palette.secondary);
            }
        }
        TailKind::Bushy => {
            for i in 0..length {
                let width = (1 + i / 2).min(3);
                model.add_box(x - width / 2, y, z - i, width, width, 1, palette.secondary);
            }
        }
        TailKind::Fin => {
            model.add_box(x - 2, y, z, 4, 3, length, palette.secondary);
        }
        TailKind::Segmented => {
            for i in 0..length {
                model.add_box(x - 1, y, z - i * 2, 2, 2, 2, palette.secondary);
            }
        }
    }
}

/// Animal head at (x, y, z), facing +Z.
///
/// Non-MultiEye heads get the standard pair of eyes on the front face.
pub fn head(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    kind: AnimalHeadKind,
    x: i32,
    y: i32,
    z: i32,
    palette: &Palette,
) {
    let head_size = rng.range(3, 5);

    match kind {
        AnimalHeadKind::Snout => {
            model.add_box(x - head_size / 2, y, z, head_size, head_size, head_size + 3, palette.primary);
            model.add_voxel(x, y, z + head_size + 3, palette.dark);
        }
        AnimalHeadKind::Beak => {
            model.add_box(x - head_size / 2, y, z, head_size, head_size, head_size, palette.primary);
            model.add_box(x - 1, y, z + head_size, 2, 1, 3, palette.accent);
        }
        AnimalHeadKind::Horns => {
            model.add_box(x - head_size / 2, y, z, head_size, head_size, head_size, palette.primary);
            for i in 0..3 {
                model.add_voxel(x - 2, y + head_size + i, z, palette.detail);
                model.add_voxel(x + 1, y + head_size + i, z, palette.detail);
            }
        }
        AnimalHeadKind::Antlers => {
            model.add_box(x - head_size / 2, y, z, head_size, head_size, head_size, palette.primary);
            // Branch points fan over the crown.
            const BRANCHES: [(i32, i32); 4] = [(2, 0), (1, 1), (-1, 1), (-2, 0)];
            for (dx, dz) in BRANCHES {
                model.add_voxel(x + dx, y + head_size + 1, z + dz, palette.detail);
                model.add_voxel(x + dx * 2, y + head_size + 2, z + dz * 2, palette.detail);
            }
        }
        AnimalHeadKind::MultiEye => {
            model.add_box(x - head_size / 2, y, z, head_size, head_size, head_size, palette.primary);
            for i in 0..4 {
                let eye_x = x - 1 + (i % 2) * 2;
                let eye_y = y + 1 + (i / 2) * 2;
                model.add_voxel(eye_x, eye_y, z + head_size, Color::WHITE);
                model.add_voxel(eye_x, eye_y, z + head_size + 1, Color::BLACK);
            }
        }
    }

    if kind != AnimalHeadKind::MultiEye {
        // The snout runs 3 cells deeper, so its front face sits further
        // out; eyes placed inside an occupied box would dedup away.
        let face_z = match kind {
            AnimalHeadKind::Snout => z + head_size + 3,
            _ => z + head_size,
        };
        model.add_voxel(x - 1, y + 2, face_z, Color::WHITE);
        model.add_voxel(x + 1, y + 2, face_z, Color::WHITE);
        model.add_voxel(x - 1, y + 2, face_z + 1, Color::BLACK);
        model.add_voxel(x + 1, y + 2, face_z + 1, Color::BLACK);
    }
}

/// One wing extending sideways from (x, y, z), with detail studs
pub fn wing(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    side: Side,
    x: i32,
    y: i32,
    z: i32,
    span: i32,
    palette: &Palette,
) {
    let wing_width = rng.range(3, 6);
    let wing_height = rng.range(2, 4);

    match side {
        Side::Left => model.add_box(x - span, y, z, span, wing_height, wing_width, palette.secondary),
        Side::Right => model.add_box(x, y, z, span, wing_height, wing_width, palette.secondary),
    }

    let mut i = 0;
    while i < span {
        let stud_x = match side {
            Side::Left => x - i,
            Side::Right => x + i,
        };
        model.add_voxel(stud_x, y + wing_height, z + wing_width / 2, palette.detail);
        i += 2;
    }
}

/// A row of dorsal fins starting left of (x, y, z)
pub fn fins(model: &mut VoxelModel, x: i32, y: i32, z: i32, count: i32, palette: &Palette) {
    for i in 0..count {
        let fin_x = x - 2 + i * 2;
        model.add_box(fin_x, y, z, 1, 3, 2, palette.secondary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn test_palette() -> Palette {
        Palette::pick(Category::Animal, &mut SeededRng::new(1))
    }

    #[test]
    fn every_tail_kind_builds_geometry() {
        let palette = test_palette();
        for kind in TailKind::ALL {
            let mut model = VoxelModel::new();
            tail(&mut model, kind, 0, 0, 0, 5, &palette);
            assert!(!model.is_empty(), "{:?} built nothing", kind);
        }
    }

    #[test]
    fn every_head_kind_has_eyes() {
        let palette = test_palette();
        for kind in AnimalHeadKind::ALL {
            let mut model = VoxelModel::new();
            head(&mut model, &mut SeededRng::new(4), kind, 0, 0, 0, &palette);
            let whites = model
                .voxels()
                .iter()
                .filter(|v| v.color == Color::WHITE)
                .count();
            assert!(whites >= 2, "{:?} has {} eye voxels", kind, whites);
        }
    }

    #[test]
    fn tentacles_are_radial_and_deterministic() {
        let palette = test_palette();
        let mut a = VoxelModel::new();
        let mut b = VoxelModel::new();
        tentacles(&mut a, 6, 0, 0, 0, 8, &palette);
        tentacles(&mut b, 6, 0, 0, 0, 8, &palette);
        assert_eq!(a.voxels(), b.voxels());
        assert!(a.len() > 40);
    }

    #[test]
    fn wings_mirror_by_side() {
        let palette = test_palette();
        let mut left = VoxelModel::new();
        let mut right = VoxelModel::new();
        wing(&mut left, &mut SeededRng::new(2), Side::Left, 0, 0, 0, 6, &palette);
        wing(&mut right, &mut SeededRng::new(2), Side::Right, 0, 0, 0, 6, &palette);
        assert!(left.voxels().iter().all(|v| v.x <= 0));
        assert!(right.voxels().iter().all(|v| v.x >= 0));
    }
}
