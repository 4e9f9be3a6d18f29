//! Monster grammar: four body plans plus shared mutation passes

use crate::components::animal;
use crate::palette::Palette;
use voxforge_core::Color;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

/// Rough extent of the built body, used to aim the shared passes
struct Frame {
    center_y: i32,
    size: i32,
}

type PlanFn = fn(&mut VoxelModel, &mut SeededRng, &Palette) -> Frame;

struct BodyPlan {
    name: &'static str,
    build: PlanFn,
}

const PLANS: &[(BodyPlan, f32)] = &[
    (BodyPlan { name: "humanoid", build: humanoid }, 1.5),
    (BodyPlan { name: "quadruped", build: quadruped }, 1.5),
    (BodyPlan { name: "serpentine", build: serpentine }, 1.0),
    (BodyPlan { name: "amorphous", build: amorphous }, 1.5),
];

/// Names of all body plans, in table order
pub fn plan_names() -> impl Iterator<Item = &'static str> {
    PLANS.iter().map(|(p, _)| p.name)
}

pub fn build(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let plan = rng.weighted(PLANS);
    let frame = (plan.build)(model, rng, palette);

    mutations(model, rng, &frame, palette);
    eyes(model, rng, &frame);

    if rng.chance(0.4) {
        spikes(model, rng, &frame, palette);
    }
    if rng.chance(0.35) {
        armor_plates(model, rng, &frame, palette);
    }
    if rng.chance(0.3) {
        glow_core(model, &frame, palette);
    }
    if rng.chance(0.25) {
        animal::tentacles(model, rng.range(3, 6), 0, frame.center_y - frame.size / 2, 0, rng.range(4, 7), palette);
    }
}

// Body plans --------------------------------------------------------------

fn humanoid(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Frame {
    let torso_w = rng.range(4, 6);
    let torso_h = rng.range(5, 8);
    let leg_h = rng.range(3, 5);

    // Stumpy legs
    model.add_box(-(torso_w / 2), 0, -1, 2, leg_h, 2, palette.secondary);
    model.add_box(torso_w / 2 - 2, 0, -1, 2, leg_h, 2, palette.secondary);

    // Hunched torso
    model.add_box(-(torso_w / 2), leg_h, -2, torso_w, torso_h, 4, palette.primary);

    // Overlong arms reaching the ground
    let arm_len = leg_h + torso_h - 2;
    model.add_box(-(torso_w / 2) - 2, leg_h + torso_h - arm_len, -1, 2, arm_len, 2, palette.secondary);
    model.add_box(torso_w / 2, leg_h + torso_h - arm_len, -1, 2, arm_len, 2, palette.secondary);

    // Sunken head
    model.add_box(-1, leg_h + torso_h - 1, -3, 3, 3, 3, palette.primary);

    Frame {
        center_y: leg_h + torso_h / 2,
        size: torso_w.max(torso_h),
    }
}

fn quadruped(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Frame {
    let body_len = rng.range(7, 11);
    let body_w = rng.range(4, 6);
    let body_h = rng.range(4, 6);
    let leg_h = rng.range(2, 4);

    model.add_box(-(body_w / 2), leg_h, -(body_len / 2), body_w, body_h, body_len, palette.primary);

    for (sx, sz) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
        let x = if sx > 0 { body_w / 2 - 2 } else { -(body_w / 2) };
        let z = if sz > 0 { body_len / 2 - 2 } else { -(body_len / 2) };
        model.add_box(x, 0, z, 2, leg_h, 2, palette.secondary);
    }

    // Jutting jaw
    model.add_box(-1, leg_h + 1, body_len / 2, 3, 2, 3, palette.primary);
    model.add_box(-1, leg_h + 1, body_len / 2 + 3, 3, 1, 1, Color::WHITE);

    Frame {
        center_y: leg_h + body_h / 2,
        size: body_len,
    }
}

fn serpentine(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Frame {
    let segments = rng.range(8, 14);
    let girth = rng.range(2, 3);

    // Slithering S-curve along +Z, rearing up at the head end.
    for i in 0..segments {
        let sway = (f64::from(i) * 0.6).sin();
        let x = (sway * 2.0).round() as i32;
        let rise = ((i - segments + 4).max(0)) * 2;
        model.add_box(x - girth / 2, rise, i * 2 - segments, girth, girth, 3, palette.primary);
    }

    // Head on the reared tip
    let head_y = 8;
    model.add_box(-1, head_y, segments - 2, 3, 3, 3, palette.primary);
    // Fangs
    model.add_voxel(-1, head_y, segments + 1, Color::WHITE);
    model.add_voxel(1, head_y, segments + 1, Color::WHITE);

    Frame {
        center_y: 3,
        size: segments,
    }
}

fn amorphous(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Frame {
    let base_radius = rng.range(3, 5);
    let center_y = rng.range(2, 4);

    model.add_sphere(0, center_y + base_radius / 2, 0, base_radius, palette.primary);

    // Budding lobes in every direction
    let lobes = rng.range(3, 6);
    for _ in 0..lobes {
        let x = rng.range(-base_radius, base_radius);
        let y = center_y + rng.range(0, base_radius);
        let z = rng.range(-base_radius, base_radius);
        model.add_sphere(x, y, z, rng.range(1, 2), palette.secondary);
    }

    Frame {
        center_y: center_y + base_radius / 2,
        size: base_radius * 2,
    }
}

// Shared passes -----------------------------------------------------------

/// Asymmetric growths: the signature monster pass
fn mutations(model: &mut VoxelModel, rng: &mut SeededRng, frame: &Frame, palette: &Palette) {
    let count = rng.range(3, 8);
    let reach = frame.size;
    for _ in 0..count {
        let w = rng.range(2, 4);
        let h = rng.range(2, 4);
        let d = rng.range(2, 4);
        let x = rng.range(-reach, reach);
        let y = frame.center_y + rng.range(-(frame.size / 2), frame.size);
        let z = rng.range(-reach, reach);
        let color = if rng.chance(0.5) {
            palette.secondary
        } else {
            palette.accent
        };
        model.add_box(x, y, z, w, h, d, color);
    }
}

/// White sclera plus black pupil, stacked outward along +Z
fn eyes(model: &mut VoxelModel, rng: &mut SeededRng, frame: &Frame) {
    let count = rng.range(1, 5);
    let front_z = frame.size / 2 + 1;
    for _ in 0..count {
        let x = rng.range(-(frame.size / 2), frame.size / 2);
        let y = frame.center_y + rng.range(0, frame.size / 2);
        model.add_box(x, y, front_z, 1, 1, 1, Color::WHITE);
        model.add_box(x, y, front_z + 1, 1, 1, 1, Color::BLACK);
    }
}

/// A ridge of dorsal spikes
fn spikes(model: &mut VoxelModel, rng: &mut SeededRng, frame: &Frame, palette: &Palette) {
    let count = rng.range(3, 6);
    let top_y = frame.center_y + frame.size / 2;
    for i in 0..count {
        let z = -(count) + i * 2;
        let height = rng.range(1, 3);
        for j in 0..height {
            model.add_voxel(0, top_y + j, z, palette.detail);
        }
    }
}

/// Bony plates bolted onto the flanks
fn armor_plates(model: &mut VoxelModel, rng: &mut SeededRng, frame: &Frame, palette: &Palette) {
    let plates = rng.range(2, 4);
    let x = frame.size / 2;
    for i in 0..plates {
        let z = -(frame.size / 2) + i * 3;
        let h = rng.range(2, 3);
        model.add_box(x, frame.center_y, z, 1, h, 2, palette.detail);
        model.add_box(-x - 1, frame.center_y, z, 1, h, 2, palette.detail);
    }
}

/// Recolor a vertical core through the body center so it glows.
///
/// Recolor-only: an amorphous or serpentine body with no voxels at the
/// exact center simply shows no core.
fn glow_core(model: &mut VoxelModel, frame: &Frame, palette: &Palette) {
    for dy in -1..=1 {
        model.recolor_voxel(0, frame.center_y + dy, 0, palette.accent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn plan_table_has_four_plans() {
        assert_eq!(plan_names().count(), 4);
    }

    #[test]
    fn every_plan_builds_in_isolation() {
        let palette = Palette::pick(Category::Monster, &mut SeededRng::new(1));
        for (plan, _) in PLANS {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(606);
            (plan.build)(&mut model, &mut rng, &palette);
            assert!(!model.is_empty(), "{} built nothing", plan.name);
        }
    }

    #[test]
    fn eye_pass_pairs_sclera_and_pupil() {
        let mut model = VoxelModel::new();
        let mut rng = SeededRng::new(2024);
        let frame = Frame { center_y: 4, size: 8 };
        eyes(&mut model, &mut rng, &frame);
        let whites = model
            .voxels()
            .iter()
            .filter(|v| v.color == Color::WHITE)
            .count();
        let blacks = model
            .voxels()
            .iter()
            .filter(|v| v.color == Color::BLACK)
            .count();
        assert!(whites >= 1);
        assert_eq!(whites, blacks);
    }

    #[test]
    fn glow_core_never_adds_geometry() {
        let palette = Palette::pick(Category::Monster, &mut SeededRng::new(1));
        let mut model = VoxelModel::new();
        let frame = Frame { center_y: 3, size: 6 };
        glow_core(&mut model, &frame, &palette);
        assert!(model.is_empty());
    }
}
