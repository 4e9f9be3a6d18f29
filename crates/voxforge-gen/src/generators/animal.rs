//! Animal grammar: recognizable and deliberately weird body plans

use crate::components::animal::{self, AnimalHeadKind, TailKind};
use crate::components::Side;
use crate::palette::Palette;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

type PlanFn = fn(&mut VoxelModel, &mut SeededRng, &Palette);

struct BodyPlan {
    name: &'static str,
    build: PlanFn,
}

const RECOGNIZABLE_PLANS: &[(BodyPlan, f32)] = &[
    (BodyPlan { name: "quadruped", build: quadruped }, 3.0),
    (BodyPlan { name: "long-necked", build: long_necked }, 1.5),
    (BodyPlan { name: "large-quadruped", build: large_quadruped }, 1.5),
    (BodyPlan { name: "aquatic", build: aquatic }, 2.0),
    (BodyPlan { name: "biped", build: biped }, 2.0),
];

const WEIRD_PLANS: &[(BodyPlan, f32)] = &[
    (BodyPlan { name: "multi-limbed", build: multi_limbed }, 2.0),
    (BodyPlan { name: "tentacled", build: tentacled }, 2.0),
    (BodyPlan { name: "hybrid", build: hybrid }, 1.5),
    (BodyPlan { name: "asymmetric", build: asymmetric }, 1.0),
];

/// Names of all body plans, recognizable first
pub fn plan_names() -> impl Iterator<Item = &'static str> {
    RECOGNIZABLE_PLANS
        .iter()
        .chain(WEIRD_PLANS)
        .map(|(p, _)| p.name)
}

pub fn build(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    // 60/40 recognizable-vs-weird, with a rare override flip so either
    // pool stays reachable from any prefix of draws.
    let mut recognizable = rng.chance(0.6);
    if rng.chance(0.1) {
        recognizable = !recognizable;
    }

    let table = if recognizable {
        RECOGNIZABLE_PLANS
    } else {
        WEIRD_PLANS
    };
    let plan = rng.weighted(table);
    (plan.build)(model, rng, palette);
}

// Shared helpers ----------------------------------------------------------

fn four_legs(
    model: &mut VoxelModel,
    x_half: i32,
    z_half: i32,
    leg_height: i32,
    leg_width: i32,
    palette: &Palette,
) {
    for (sx, sz) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
        let x = sx * x_half - if sx < 0 { leg_width - 1 } else { 0 };
        let z = sz * z_half - if sz < 0 { leg_width - 1 } else { 0 };
        model.add_box(x, 0, z, leg_width, leg_height, leg_width, palette.secondary);
    }
}

fn ears(model: &mut VoxelModel, x: i32, y: i32, z: i32, palette: &Palette) {
    model.add_voxel(x - 1, y, z, palette.detail);
    model.add_voxel(x + 1, y, z, palette.detail);
}

/// Recolor a scattering of coat markings on the body's top layer
fn coat_patterns(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    x_half: i32,
    top_y: i32,
    z_half: i32,
    palette: &Palette,
) {
    let spots = rng.range(3, 7);
    for _ in 0..spots {
        let x = rng.range(-x_half, x_half);
        let z = rng.range(-z_half, z_half);
        model.recolor_voxel(x, top_y, z, palette.secondary);
    }
}

// Recognizable plans ------------------------------------------------------

fn quadruped(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(6, 10);
    let body_width = rng.range(3, 5);
    let body_height = rng.range(3, 5);
    let leg_height = rng.range(3, 6);

    animal::quadruped_body(model, 0, leg_height, 0, body_len, body_width, body_height, palette);
    four_legs(model, body_width / 2, body_len / 2 - 1, leg_height, 1, palette);

    let head_y = leg_height + body_height - 2;
    let head_z = body_len / 2;
    model.add_box(-1, head_y, head_z - 1, 2, 2, 2, palette.primary);
    let head_kind = *rng.choice(&[
        AnimalHeadKind::Snout,
        AnimalHeadKind::Horns,
        AnimalHeadKind::Antlers,
    ]);
    animal::head(model, rng, head_kind, 0, head_y + 1, head_z + 1, palette);

    let tail_kind = *rng.choice(&[TailKind::Long, TailKind::Bushy]);
    animal::tail(model, tail_kind, 0, leg_height + body_height - 1, -(body_len / 2) - 1, rng.range(3, 6), palette);

    if rng.chance(0.6) {
        ears(model, 0, head_y + 1 + 4, head_z + 2, palette);
    }
    if rng.chance(0.4) {
        coat_patterns(model, rng, body_width / 2 - 1, leg_height + body_height - 1, body_len / 2 - 1, palette);
    }
}

fn long_necked(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(7, 10);
    let body_width = rng.range(4, 5);
    let body_height = rng.range(4, 5);
    let leg_height = rng.range(5, 8);

    animal::quadruped_body(model, 0, leg_height, 0, body_len, body_width, body_height, palette);
    four_legs(model, body_width / 2, body_len / 2 - 1, leg_height, 2, palette);

    let neck_base_y = leg_height + body_height - 1;
    let neck_len = rng.range(5, 9);
    let neck_z = body_len / 2 - 1;
    animal::long_neck(model, 0, neck_base_y, neck_z, neck_len, palette);

    animal::head(model, rng, AnimalHeadKind::Snout, 0, neck_base_y + neck_len, neck_z, palette);

    animal::tail(model, TailKind::Long, 0, leg_height + body_height - 1, -(body_len / 2) - 1, rng.range(4, 7), palette);
}

fn large_quadruped(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(9, 13);
    let body_width = rng.range(5, 7);
    let body_height = rng.range(5, 7);
    let leg_height = rng.range(4, 6);

    animal::quadruped_body(model, 0, leg_height, 0, body_len, body_width, body_height, palette);
    four_legs(model, body_width / 2, body_len / 2 - 1, leg_height, 2, palette);

    let head_y = leg_height + body_height - 3;
    let head_z = body_len / 2;
    animal::head(model, rng, AnimalHeadKind::Horns, 0, head_y, head_z + 1, palette);

    // A trunk instead of ears makes it an elephant relative.
    if rng.chance(0.5) {
        animal::trunk(model, 0, head_y - 1, head_z + 3, rng.range(3, 5), palette);
    } else {
        ears(model, 0, head_y + 5, head_z + 2, palette);
    }

    animal::tail(model, TailKind::Long, 0, leg_height + body_height - 1, -(body_len / 2) - 1, 3, palette);
}

fn aquatic(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(8, 13);
    let body_width = rng.range(4, 6);
    let body_height = rng.range(3, 5);
    let swim_y = 3;

    animal::aquatic_body(model, 0, swim_y, 0, body_len, body_width, body_height, palette);

    animal::fins(model, 0, swim_y + body_height, -1, rng.range(2, 3), palette);
    animal::tail(model, TailKind::Fin, 0, swim_y, -(body_len / 2) - rng.range(2, 3), 2, palette);

    animal::head(model, rng, AnimalHeadKind::Snout, 0, swim_y, body_len / 2, palette);
}

fn biped(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_width = rng.range(3, 5);
    let body_height = rng.range(4, 7);
    let body_depth = rng.range(3, 4);
    let leg_height = rng.range(3, 5);

    animal::biped_body(model, 0, leg_height, 0, body_width, body_height, body_depth, palette);

    // Two legs
    model.add_box(-(body_width / 2), 0, -1, 1, leg_height, 2, palette.secondary);
    model.add_box(body_width / 2 - 1, 0, -1, 1, leg_height, 2, palette.secondary);

    // Avian variants get wings
    if rng.chance(0.6) {
        let span = rng.range(4, 7);
        let wing_y = leg_height + body_height - 2;
        animal::wing(model, rng, Side::Left, -(body_width / 2), wing_y, -1, span, palette);
        animal::wing(model, rng, Side::Right, body_width / 2, wing_y, -1, span, palette);
    }

    let head_y = leg_height + body_height;
    animal::head(model, rng, AnimalHeadKind::Beak, 0, head_y, body_depth / 2, palette);

    animal::tail(model, TailKind::Bushy, 0, leg_height + 1, -(body_depth / 2) - 1, rng.range(2, 4), palette);
}

// Weird plans -------------------------------------------------------------

fn multi_limbed(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(7, 11);
    let body_width = rng.range(4, 6);
    let body_height = rng.range(3, 5);
    let leg_height = rng.range(3, 5);

    animal::quadruped_body(model, 0, leg_height, 0, body_len, body_width, body_height, palette);

    // Far too many legs, evenly spaced down both flanks.
    let pairs = rng.range(3, 5);
    for i in 0..pairs {
        let z = -(body_len / 2) + 1 + i * (body_len - 2) / pairs;
        model.add_box(-(body_width / 2), 0, z, 1, leg_height, 1, palette.secondary);
        model.add_box(body_width / 2 - 1, 0, z, 1, leg_height, 1, palette.secondary);
    }

    let head_kind = *rng.choice(&[AnimalHeadKind::MultiEye, AnimalHeadKind::Snout]);
    animal::head(model, rng, head_kind, 0, leg_height + body_height - 2, body_len / 2, palette);

    animal::tail(model, TailKind::Segmented, 0, leg_height + 1, -(body_len / 2) - 1, rng.range(2, 4), palette);
}

fn tentacled(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_radius = rng.range(3, 5);
    let float_y = rng.range(4, 6);

    model.add_sphere(0, float_y + body_radius, 0, body_radius, palette.primary);

    animal::tentacles(model, rng.range(4, 8), 0, float_y, 0, rng.range(5, 9), palette);

    animal::head(model, rng, AnimalHeadKind::MultiEye, 0, float_y + body_radius, body_radius - 1, palette);
}

fn hybrid(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(6, 10);
    let body_width = rng.range(3, 5);
    let body_height = rng.range(3, 5);
    let leg_height = rng.range(3, 6);

    animal::quadruped_body(model, 0, leg_height, 0, body_len, body_width, body_height, palette);
    four_legs(model, body_width / 2, body_len / 2 - 1, leg_height, 1, palette);

    // Ground body, flight wings, swimmer's tail: a chimera.
    let wing_y = leg_height + body_height - 1;
    let span = rng.range(5, 8);
    animal::wing(model, rng, Side::Left, -(body_width / 2), wing_y, -1, span, palette);
    animal::wing(model, rng, Side::Right, body_width / 2, wing_y, -1, span, palette);

    animal::tail(model, TailKind::Fin, 0, leg_height, -(body_len / 2) - 2, 2, palette);

    let head_kind = *rng.choice(&AnimalHeadKind::ALL);
    animal::head(model, rng, head_kind, 0, leg_height + body_height - 1, body_len / 2, palette);
}

fn asymmetric(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let body_len = rng.range(6, 9);
    let body_width = rng.range(4, 6);
    let body_height = rng.range(3, 5);
    let base_y = rng.range(2, 4);

    animal::quadruped_body(model, 0, base_y, 0, body_len, body_width, body_height, palette);

    // Mismatched limbs at uneven heights and offsets.
    let limbs = rng.range(3, 6);
    for _ in 0..limbs {
        let x = rng.range(-(body_width / 2) - 1, body_width / 2 + 1);
        let z = rng.range(-(body_len / 2), body_len / 2);
        let len = rng.range(2, base_y + 2);
        model.add_box(x, base_y - len + 1, z, 1, len, 1, palette.secondary);
    }

    let head_kind = *rng.choice(&[AnimalHeadKind::MultiEye, AnimalHeadKind::Horns]);
    // Head sits off-center, of course.
    let head_x = rng.range(-2, 2);
    animal::head(model, rng, head_kind, head_x, base_y + body_height - 1, body_len / 2, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use voxforge_core::Color;

    #[test]
    fn plan_tables_are_complete() {
        let names: Vec<&str> = plan_names().collect();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn every_plan_builds_in_isolation() {
        let palette = Palette::pick(Category::Animal, &mut SeededRng::new(1));
        for (plan, _) in RECOGNIZABLE_PLANS.iter().chain(WEIRD_PLANS) {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(777);
            (plan.build)(&mut model, &mut rng, &palette);
            assert!(!model.is_empty(), "{} built nothing", plan.name);
        }
    }

    #[test]
    fn every_plan_has_eyes() {
        // Each plan routes through animal::head, which always places
        // white eye voxels.
        let palette = Palette::pick(Category::Animal, &mut SeededRng::new(1));
        for (plan, _) in RECOGNIZABLE_PLANS.iter().chain(WEIRD_PLANS) {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(31);
            (plan.build)(&mut model, &mut rng, &palette);
            let whites = model
                .voxels()
                .iter()
                .filter(|v| v.color == Color::WHITE)
                .count();
            assert!(whites >= 2, "{} has no eyes", plan.name);
        }
    }
}
