//! Robot parts: hands, joints, weapons, tools, heads, torsos, legs

use super::Side;
use crate::palette::Palette;
use voxforge_core::Color;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

/// Weapon attachments a robot arm can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponKind {
    Blade,
    Gun,
    Plasma,
    Drill,
    Saw,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 5] = [
        WeaponKind::Blade,
        WeaponKind::Gun,
        WeaponKind::Plasma,
        WeaponKind::Drill,
        WeaponKind::Saw,
    ];
}

/// Utility attachments a robot arm can carry instead of a hand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    Pliers,
    Wrench,
    Cutter,
    Claw,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pliers,
        ToolKind::Wrench,
        ToolKind::Cutter,
        ToolKind::Claw,
    ];
}

/// Robot head variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadKind {
    Humanoid,
    Sensor,
    Visor,
    Antenna,
}

impl HeadKind {
    pub const ALL: [HeadKind; 4] = [
        HeadKind::Humanoid,
        HeadKind::Sensor,
        HeadKind::Visor,
        HeadKind::Antenna,
    ];
}

// Unit circle offsets at integer resolution, radius 1 and 2. Kept as
// tables so cell placement can never drift with a platform's libm.
const RING_4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const RING_8: [(i32, i32); 8] = [
    (2, 0),
    (1, 1),
    (0, 2),
    (-1, 1),
    (-2, 0),
    (-1, -1),
    (0, -2),
    (1, -1),
];

/// A gripping hand: palm, opposable thumb, 3-5 fingers
pub fn hand(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    side: Side,
    x: i32,
    y: i32,
    z: i32,
    palette: &Palette,
) {
    let hand_size = rng.range(2, 3);
    let finger_count = rng.range(3, 5);

    // Palm
    model.add_box(x - hand_size / 2, y, z, hand_size, hand_size, 2, palette.secondary);

    // Thumb sits opposite the fingers
    let thumb_x = match side {
        Side::Left => x - hand_size / 2 - 1,
        Side::Right => x + hand_size / 2,
    };
    let thumb_length = rng.range(2, 3);
    for i in 0..thumb_length {
        model.add_voxel(thumb_x, y + i, z + 1, palette.detail);
    }

    // Fingers fan out across the palm edge
    let spacing = f64::from(hand_size) / f64::from(finger_count + 1);
    for i in 0..finger_count {
        let finger_x = x - hand_size / 2 + (f64::from(i + 1) * spacing).floor() as i32;
        let finger_length = rng.range(2, 4);
        for j in 0..finger_length {
            model.add_voxel(finger_x, y + j, z + 2, palette.detail);
        }
    }
}

/// Elbow joint block with accent pivots
pub fn elbow_joint(model: &mut VoxelModel, x: i32, y: i32, z: i32, palette: &Palette) {
    model.add_box(x - 1, y, z - 1, 2, 2, 2, palette.detail);
    model.add_voxel(x, y + 1, z, palette.accent);
    model.add_voxel(x, y - 1, z, palette.accent);
}

/// Knee joint block, same mechanism as the elbow
pub fn knee_joint(model: &mut VoxelModel, x: i32, y: i32, z: i32, palette: &Palette) {
    model.add_box(x - 1, y, z - 1, 2, 2, 2, palette.detail);
    model.add_voxel(x, y + 1, z, palette.accent);
    model.add_voxel(x, y - 1, z, palette.accent);
}

/// Build a weapon of the given kind pointing along +Z
pub fn weapon(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    kind: WeaponKind,
    x: i32,
    y: i32,
    z: i32,
    palette: &Palette,
) {
    match kind {
        WeaponKind::Blade => {
            let blade_length = rng.range(6, 12);
            model.add_box(x - 1, y, z, 2, 2, blade_length, palette.accent);
            model.add_box(x, y, z + blade_length, 1, 1, 2, Color::WHITE);
        }
        WeaponKind::Gun => {
            model.add_box(x - 1, y, z, 2, 2, 4, palette.secondary);
            model.add_box(x - 1, y + 1, z + 4, 2, 1, 2, palette.accent);
            model.add_voxel(x, y, z + 6, Color::RED);
        }
        WeaponKind::Plasma => {
            model.add_box(x - 2, y, z, 4, 3, 5, palette.secondary);
            model.add_box(x - 1, y + 1, z + 5, 2, 1, 3, palette.accent);
        }
        WeaponKind::Drill => {
            model.add_box(x - 1, y, z, 2, 2, 3, palette.secondary);
            for (dx, dz) in RING_4 {
                model.add_voxel(x + dx, y, z + 3 + dz, palette.detail);
            }
        }
        WeaponKind::Saw => {
            model.add_box(x - 1, y, z, 2, 2, 2, palette.secondary);
            for (dx, dz) in RING_8 {
                model.add_voxel(x + dx, y, z + 2 + dz, palette.accent);
            }
        }
    }
}

/// Build a utility tool of the given kind pointing along +Z
pub fn tool(model: &mut VoxelModel, kind: ToolKind, x: i32, y: i32, z: i32, palette: &Palette) {
    match kind {
        ToolKind::Pliers => {
            model.add_box(x - 1, y, z, 2, 2, 2, palette.secondary);
            model.add_box(x - 2, y, z + 2, 1, 1, 2, palette.detail);
            model.add_box(x + 1, y, z + 2, 1, 1, 2, palette.detail);
        }
        ToolKind::Wrench => {
            model.add_box(x - 1, y, z, 2, 2, 3, palette.secondary);
            model.add_box(x - 2, y, z + 3, 4, 1, 1, palette.detail);
        }
        ToolKind::Cutter => {
            model.add_box(x - 1, y, z, 2, 2, 2, palette.secondary);
            model.add_box(x - 1, y, z + 2, 2, 1, 3, palette.accent);
        }
        ToolKind::Claw => {
            model.add_box(x - 1, y, z, 2, 2, 2, palette.secondary);
            for i in 0..3 {
                model.add_box(x - 1 + i, y, z + 2, 1, 1, 3, palette.detail);
            }
        }
    }
}

/// Build a robot head centered on (x, z) with its base at y.
///
/// Returns the head height so the caller can stack antennas or hats.
pub fn head(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    kind: HeadKind,
    x: i32,
    y: i32,
    z: i32,
    palette: &Palette,
) -> i32 {
    let head_width = rng.range(3, 5);
    let head_height = rng.range(3, 5);
    let head_depth = rng.range(3, 5);

    model.add_box(
        x - head_width / 2,
        y,
        z - head_depth / 2,
        head_width,
        head_height,
        head_depth,
        palette.primary,
    );

    match kind {
        HeadKind::Humanoid => {
            model.add_box(x - 1, y + 2, z + head_depth / 2, 2, 1, 1, palette.accent);
        }
        HeadKind::Sensor => {
            for i in 0..4 {
                model.add_voxel(x - head_width / 2 + i, y + head_height, z, palette.accent);
            }
        }
        HeadKind::Visor => {
            model.add_box(
                x - head_width / 2 + 1,
                y + 1,
                z + head_depth / 2,
                head_width - 2,
                2,
                1,
                palette.accent,
            );
        }
        HeadKind::Antenna => {
            for i in 0..3 {
                for j in 0..3 {
                    model.add_voxel(x - 1 + i, y + head_height + j, z, palette.detail);
                }
            }
        }
    }

    head_height
}

/// Torso block with probabilistic panels, vents and a core reactor
#[allow(clippy::too_many_arguments)]
pub fn torso(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    x: i32,
    y: i32,
    z: i32,
    width: i32,
    height: i32,
    depth: i32,
    palette: &Palette,
) {
    model.add_box(x - width / 2, y, z - depth / 2, width, height, depth, palette.primary);

    // Front panel
    if rng.chance(0.7) {
        model.add_box(
            x - width / 2 + 1,
            y + 1,
            z - depth / 2 - 1,
            width - 2,
            height - 2,
            1,
            palette.secondary,
        );
    }

    // Vent slats
    if rng.chance(0.6) {
        for i in 0..3 {
            model.add_box(x - 1, y + 2 + i * 2, z - depth / 2 - 1, 2, 1, 1, palette.detail);
        }
    }

    // Core reactor glow
    if rng.chance(0.5) {
        model.add_voxel(x, y + height / 2, z, palette.accent);
        model.add_voxel(x, y + height / 2 + 1, z, palette.accent);
    }
}

/// Articulated leg standing on the ground plane at `y`: foot, ankle,
/// shin, knee, thigh.
///
/// `length` covers the whole leg. Returns the hip height so the caller
/// can seat the torso on top.
pub fn leg(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    x: i32,
    y: i32,
    z: i32,
    length: i32,
    palette: &Palette,
) -> i32 {
    let leg_width = rng.range(2, 3);
    let thigh_length = length * 2 / 5;
    let shin_length = length * 2 / 5;
    let foot_length = length - thigh_length - shin_length;

    // Foot with toes out front
    model.add_box(x - leg_width / 2, y, z, leg_width, 1, foot_length + 2, palette.dark);
    for i in 0..3 {
        model.add_voxel(x - 1 + i, y, z + foot_length + 2, palette.detail);
    }

    // Ankle
    model.add_box(x - 1, y + 1, z - 1, 2, 1, 2, palette.detail);

    // Shin
    model.add_box(x - leg_width / 2, y + 2, z, leg_width, shin_length, leg_width, palette.secondary);

    knee_joint(model, x, y + 2 + shin_length, z + leg_width / 2, palette);

    // Thigh
    model.add_box(
        x - leg_width / 2,
        y + 3 + shin_length,
        z,
        leg_width,
        thigh_length,
        leg_width,
        palette.secondary,
    );

    y + 3 + shin_length + thigh_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn test_palette() -> Palette {
        Palette::pick(Category::Robot, &mut SeededRng::new(1))
    }

    #[test]
    fn hand_is_deterministic() {
        let palette = test_palette();
        let mut a = VoxelModel::new();
        let mut b = VoxelModel::new();
        hand(&mut a, &mut SeededRng::new(5), Side::Left, 0, 0, 0, &palette);
        hand(&mut b, &mut SeededRng::new(5), Side::Left, 0, 0, 0, &palette);
        assert_eq!(a.voxels(), b.voxels());
        assert!(!a.is_empty());
    }

    #[test]
    fn every_weapon_kind_builds_geometry() {
        let palette = test_palette();
        for kind in WeaponKind::ALL {
            let mut model = VoxelModel::new();
            weapon(&mut model, &mut SeededRng::new(3), kind, 0, 0, 0, &palette);
            assert!(!model.is_empty(), "{:?} built nothing", kind);
        }
    }

    #[test]
    fn every_tool_kind_builds_geometry() {
        let palette = test_palette();
        for kind in ToolKind::ALL {
            let mut model = VoxelModel::new();
            tool(&mut model, kind, 0, 0, 0, &palette);
            assert!(!model.is_empty(), "{:?} built nothing", kind);
        }
    }

    #[test]
    fn head_reports_its_height() {
        let palette = test_palette();
        for kind in HeadKind::ALL {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(11);
            let height = head(&mut model, &mut rng, kind, 0, 0, 0, &palette);
            assert!((3..=5).contains(&height));
            assert!(!model.is_empty());
        }
    }

    #[test]
    fn leg_reports_hip_height() {
        let palette = test_palette();
        let mut model = VoxelModel::new();
        let hip = leg(&mut model, &mut SeededRng::new(9), 0, 0, 0, 10, &palette);
        // 2/5 thigh + 2/5 shin + foot/ankle/knee spacing.
        assert_eq!(hip, 11);
        assert!(model.voxels().iter().any(|v| v.y == 0));
        let max_y = model.voxels().iter().map(|v| v.y).max().unwrap();
        assert!(max_y >= hip - 1);
    }
}
