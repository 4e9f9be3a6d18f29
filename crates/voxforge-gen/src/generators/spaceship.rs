//! Spaceship grammar: 13 hull archetypes plus a shared decoration pass
//!
//! Every archetype builds its own fuselage/wing/engine layout around
//! the origin (nose toward +Z) and reports its hull bounding box; the
//! decorative pass then runs uniformly over that box regardless of
//! archetype.

use crate::decoration::{self, EmblemKind, SurfaceAxis, SymbolKind};
use crate::palette::Palette;
use voxforge_model::{Axis, VoxelModel};
use voxforge_rng::SeededRng;

/// Inclusive bounding box of the main hull, used to aim decoration
struct Hull {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
    z_min: i32,
    z_max: i32,
}

type BuildFn = fn(&mut VoxelModel, &mut SeededRng, &Palette) -> Hull;

struct ShipArchetype {
    name: &'static str,
    build: BuildFn,
}

const ARCHETYPES: &[(ShipArchetype, f32)] = &[
    (ShipArchetype { name: "fighter", build: fighter }, 2.0),
    (ShipArchetype { name: "freighter", build: freighter }, 1.2),
    (ShipArchetype { name: "explorer", build: explorer }, 1.0),
    (ShipArchetype { name: "destroyer", build: destroyer }, 1.0),
    (ShipArchetype { name: "oval", build: oval }, 0.8),
    (ShipArchetype { name: "saucer", build: saucer }, 0.8),
    (ShipArchetype { name: "triangular", build: triangular }, 0.8),
    (ShipArchetype { name: "cylindrical", build: cylindrical }, 0.8),
    (ShipArchetype { name: "x-wing", build: x_wing }, 0.7),
    (ShipArchetype { name: "tie-fighter", build: tie_fighter }, 0.7),
    (ShipArchetype { name: "star-destroyer", build: star_destroyer }, 0.7),
    (ShipArchetype { name: "ornithopter", build: ornithopter }, 0.6),
    (ShipArchetype { name: "corvette", build: corvette }, 1.0),
];

/// Names of all hull archetypes, in table order
pub fn archetype_names() -> impl Iterator<Item = &'static str> {
    ARCHETYPES.iter().map(|(a, _)| a.name)
}

pub fn build(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    let archetype = rng.weighted(ARCHETYPES);
    let hull = (archetype.build)(model, rng, palette);
    decorate(model, rng, &hull, palette);
}

fn fighter(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(10, 16);
    let w = rng.range(3, 5);
    let h = rng.range(2, 3);
    let fx = -(w / 2);
    let fz = -(len / 2);

    model.add_box(fx, 0, fz, w, h, len, palette.primary);

    // Nose taper
    for i in 0..3 {
        model.add_box(fx + 1, 0, fz + len + i, w - 2, (h - i).max(1), 1, palette.primary);
    }

    // Canopy
    model.add_box(fx + 1, h, fz + len - 5, w - 2, 1, 3, palette.accent);

    // Swept wings with tip guns
    let span = rng.range(5, 8);
    let wing_z = fz + rng.range(2, 4);
    model.add_symmetric_box(fx + w, 0, wing_z, span, 1, 4, palette.secondary, 0);
    model.add_symmetric_box(fx + w + span - 1, 0, wing_z - 1, 1, 1, 6, palette.detail, 0);

    // Twin engines
    model.add_symmetric_box(fx, 0, fz - 2, 1, 1, 2, palette.accent, 0);

    Hull {
        x_min: fx,
        x_max: fx + w - 1,
        y_min: 0,
        y_max: h - 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn freighter(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(14, 20);
    let w = rng.range(6, 8);
    let h = rng.range(4, 6);
    let fx = -(w / 2);
    let fz = -(len / 2);

    model.add_box(fx, 0, fz, w, h, len, palette.primary);

    // Cargo pods clamped to the flanks
    let pods = rng.range(2, 3);
    for i in 0..pods {
        let pod_z = fz + 2 + i * (len - 4) / pods;
        model.add_symmetric_box(fx + w, 1, pod_z, 2, h - 2, 4, palette.secondary, 0);
    }

    // Bridge perched up front
    model.add_box(fx + 1, h, fz + len - 4, w - 2, 2, 3, palette.secondary);
    model.add_box(fx + 1, h + 1, fz + len - 1, w - 2, 1, 1, palette.accent);

    // Engine block
    model.add_cylinder(fx + 1, 1, fz - 3, 1, 3, palette.dark, Axis::Z);
    model.add_cylinder(fx + w - 2, 1, fz - 3, 1, 3, palette.dark, Axis::Z);

    Hull {
        x_min: fx,
        x_max: fx + w - 1,
        y_min: 0,
        y_max: h - 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn explorer(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(12, 16);
    let r = 2;
    let fz = -(len / 2);

    model.add_cylinder(0, 0, fz, r, len, palette.primary, Axis::Z);

    // Forward sensor dish
    model.add_cylinder(0, 0, fz + len, r + 2, 1, palette.detail, Axis::Z);
    model.add_voxel(0, 0, fz + len + 1, palette.accent);

    // Mast antenna
    let mast = rng.range(3, 5);
    model.add_box(0, r + 1, 0, 1, mast, 1, palette.detail);

    // Lab booms
    model.add_symmetric_box(r + 1, 0, -2, 3, 1, 2, palette.secondary, 0);

    Hull {
        x_min: -r,
        x_max: r,
        y_min: -r,
        y_max: r,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn destroyer(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(18, 24);
    let w = rng.range(5, 7);
    let h = rng.range(3, 4);
    let fx = -(w / 2);
    let fz = -(len / 2);

    model.add_box(fx, 0, fz, w, h, len, palette.primary);

    // Armor belts
    model.add_symmetric_box(fx + w, 1, fz + 2, 1, h - 1, len - 4, palette.secondary, 0);

    // Turret row topside
    let turrets = rng.range(2, 3);
    for i in 0..turrets {
        let tz = fz + 3 + i * (len - 6) / turrets;
        model.add_box(-1, h, tz, 2, 1, 2, palette.detail);
        model.add_box(0, h + 1, tz, 1, 1, 4, palette.dark);
    }

    // Ram bow
    for i in 0..3 {
        model.add_box(fx + 1 + i, 0, fz + len + i, w - 2 - i * 2, h, 1, palette.primary);
    }

    // Engine bank
    for i in 0..3 {
        model.add_voxel(fx + 1 + i * (w - 3) / 2, 1, fz - 1, palette.accent);
    }

    Hull {
        x_min: fx,
        x_max: fx + w - 1,
        y_min: 0,
        y_max: h - 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn oval(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let r = rng.range(3, 4);

    // Overlapping spheres pull the hull into an egg.
    model.add_sphere(0, 0, -2, r, palette.primary);
    model.add_sphere(0, 0, 0, r, palette.primary);
    model.add_sphere(0, 0, 2, r - 1, palette.primary);

    // Equator trim
    model.add_cylinder(0, 0, -2, r, 1, palette.secondary, Axis::Z);

    // Viewport strip
    model.add_box(-1, 1, r + 1, 2, 1, 1, palette.accent);

    Hull {
        x_min: -r,
        x_max: r,
        y_min: -r,
        y_max: r,
        z_min: -2 - r,
        z_max: 2 + r,
    }
}

fn saucer(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let r = rng.range(5, 7);

    model.add_cylinder(0, 0, 0, r, 2, palette.primary, Axis::Y);

    // Command dome
    model.add_sphere(0, 2, 0, r / 2, palette.secondary);

    // Underside beacons
    for (dx, dz) in [(r - 1, 0), (0, r - 1), (-(r - 1), 0), (0, -(r - 1))] {
        model.add_voxel(dx, -1, dz, palette.accent);
    }

    Hull {
        x_min: -r,
        x_max: r,
        y_min: 0,
        y_max: 1,
        z_min: -r,
        z_max: r,
    }
}

fn triangular(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(10, 14);
    let half_max = rng.range(4, 6);
    let h = 2;
    let nose_z = len / 2;

    // Plan-view wedge, nose forward.
    for i in 0..len {
        let half = i * half_max / len;
        model.add_box(-half, 0, nose_z - i, half * 2 + 1, h, 1, palette.primary);
    }

    // Cockpit near the nose
    model.add_box(0, h, nose_z - 3, 1, 1, 2, palette.accent);

    // Trailing-edge engines
    for x in [-half_max + 1, 0, half_max - 1] {
        model.add_voxel(x, 0, nose_z - len, palette.accent);
    }

    Hull {
        x_min: -half_max,
        x_max: half_max,
        y_min: 0,
        y_max: h - 1,
        z_min: nose_z - len + 1,
        z_max: nose_z,
    }
}

fn cylindrical(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(12, 18);
    let r = rng.range(2, 3);
    let fz = -(len / 2);

    model.add_cylinder(0, 0, fz, r, len, palette.primary, Axis::Z);

    // Ring fins every few segments
    let step = rng.range(4, 6);
    let mut z = fz + 2;
    while z < fz + len - 2 {
        model.add_cylinder(0, 0, z, r + 1, 1, palette.secondary, Axis::Z);
        z += step;
    }

    // Engine glow
    model.add_cylinder(0, 0, fz - 1, r - 1, 1, palette.accent, Axis::Z);

    Hull {
        x_min: -r,
        x_max: r,
        y_min: -r,
        y_max: r,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn x_wing(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(10, 14);
    let fz = -(len / 2);

    model.add_box(-1, 0, fz, 2, 2, len, palette.primary);
    model.add_box(-1, 2, fz + len - 4, 2, 1, 3, palette.accent);

    // Four wings splayed diagonally from the tail section
    let span = rng.range(4, 6);
    for step in 0..span {
        let x = 2 + step * 2;
        model.add_symmetric_box(x, 2 + step, fz + 1, 2, 1, 3, palette.secondary, 0);
        model.add_symmetric_box(x, -1 - step, fz + 1, 2, 1, 3, palette.secondary, 0);
    }

    // Tip cannons on all four wings
    let tip_x = 2 + (span - 1) * 2;
    model.add_symmetric_box(tip_x, 2 + span - 1, fz + 1, 1, 1, 5, palette.detail, 0);
    model.add_symmetric_box(tip_x, -span, fz + 1, 1, 1, 5, palette.detail, 0);

    Hull {
        x_min: -1,
        x_max: 1,
        y_min: 0,
        y_max: 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn tie_fighter(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let r = rng.range(2, 3);

    // Ball cockpit with a forward window
    model.add_sphere(0, 0, 0, r, palette.primary);
    model.add_voxel(0, 0, r + 1, palette.accent);

    // Pylons out to the panels
    model.add_symmetric_box(r, 0, -1, 3, 1, 2, palette.detail, 0);

    // Big flat solar panels
    let panel_x = r + 3;
    let panel_h = rng.range(7, 9);
    let panel_d = rng.range(5, 7);
    model.add_symmetric_box(panel_x, -(panel_h / 2), -(panel_d / 2), 1, panel_h, panel_d, palette.secondary, 0);

    Hull {
        x_min: -r,
        x_max: r,
        y_min: -r,
        y_max: r,
        z_min: -r,
        z_max: r,
    }
}

fn star_destroyer(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(16, 22);
    let half_max = rng.range(5, 7);
    let nose_z = len / 2;

    // Main wedge
    for i in 0..len {
        let half = i * half_max / len;
        model.add_box(-half, 0, nose_z - i, half * 2 + 1, 2, 1, palette.primary);
    }

    // Superstructure wedge on top, set back from the nose
    for i in 0..len / 2 {
        let half = i * half_max / len;
        model.add_box(-half, 2, nose_z - len / 3 - i, half * 2 + 1, 1, 1, palette.secondary);
    }

    // Bridge tower with twin domes
    let bridge_z = nose_z - len + 3;
    model.add_box(-2, 3, bridge_z, 5, 2, 2, palette.secondary);
    model.add_voxel(-1, 5, bridge_z, palette.detail);
    model.add_voxel(1, 5, bridge_z, palette.detail);

    // Engine row
    for x in [-2, 0, 2] {
        model.add_voxel(x, 0, nose_z - len, palette.accent);
    }

    Hull {
        x_min: -half_max,
        x_max: half_max,
        y_min: 0,
        y_max: 1,
        z_min: nose_z - len + 1,
        z_max: nose_z,
    }
}

fn ornithopter(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(6, 9);
    let fz = -(len / 2);

    // Slender tapered body
    model.add_tapered_box(-1, 0, fz, 3, 2, len, 2, len - 2, palette.primary);
    model.add_box(-1, 2, fz + len - 3, 2, 1, 2, palette.accent);

    // Long membrane wings, drooping at the tips
    let span = rng.range(8, 12);
    for step in 0..span {
        let droop = step / 4;
        model.add_symmetric_box(2 + step, 1 - droop, fz + 2, 1, 1, 4, palette.secondary, 0);
    }

    // Tail boom and fin
    model.add_box(0, 1, fz - 4, 1, 1, 4, palette.primary);
    model.add_box(0, 2, fz - 4, 1, 2, 1, palette.secondary);

    // Landing skids
    model.add_symmetric_box(1, -1, fz + 1, 1, 1, len - 2, palette.dark, 0);

    Hull {
        x_min: -1,
        x_max: 1,
        y_min: 0,
        y_max: 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

fn corvette(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) -> Hull {
    let len = rng.range(12, 16);
    let w = rng.range(4, 6);
    let h = rng.range(3, 4);
    let fx = -(w / 2);
    let fz = -(len / 2);

    model.add_box(fx, 0, fz, w, h, len, palette.primary);
    model.add_box(fx + 1, h, fz + len - 5, w - 2, 1, 3, palette.accent);

    // Three sub-variants share the hull but differ in fit-out.
    match rng.range(0, 2) {
        0 => {
            // Gunship: dorsal and ventral turrets
            for tz in [fz + 3, fz + len - 6] {
                model.add_box(-1, h, tz, 2, 1, 2, palette.detail);
                model.add_box(0, h + 1, tz, 1, 1, 3, palette.dark);
            }
            model.add_box(-1, -1, fz + len / 2, 2, 1, 2, palette.detail);
        }
        1 => {
            // Courier: oversized engine pods
            model.add_symmetric_box(fx + w, 0, fz - 1, 2, h - 1, 5, palette.secondary, 0);
            model.add_symmetric_box(fx + w, 1, fz - 2, 1, 1, 1, palette.accent, 0);
        }
        _ => {
            // Patrol: sensor mast and a running-light row
            model.add_box(0, h, fz + 2, 1, 3, 1, palette.detail);
            model.add_voxel(0, h + 3, fz + 2, palette.accent);
            for i in 0..len / 3 {
                model.add_voxel(fx, 1, fz + 1 + i * 3, palette.accent);
            }
        }
    }

    Hull {
        x_min: fx,
        x_max: fx + w - 1,
        y_min: 0,
        y_max: h - 1,
        z_min: fz,
        z_max: fz + len - 1,
    }
}

/// Hull-wide decorative pass, applied uniformly regardless of archetype
fn decorate(model: &mut VoxelModel, rng: &mut SeededRng, hull: &Hull, palette: &Palette) {
    let mid_y = (hull.y_min + hull.y_max) / 2;
    let mid_z = (hull.z_min + hull.z_max) / 2;

    // Coat-of-arms on both flanks
    if rng.chance(0.6) {
        let kind = *rng.choice(&EmblemKind::ALL);
        let radius = rng.range(2, 3);
        decoration::emblem(model, kind, SurfaceAxis::X, hull.x_min, mid_y, mid_z, radius, palette.accent);
        decoration::emblem(model, kind, SurfaceAxis::X, hull.x_max, mid_y, mid_z, radius, palette.accent);
    }

    // Topside coat-of-arms
    if rng.chance(0.3) {
        let kind = *rng.choice(&EmblemKind::ALL);
        decoration::emblem(model, kind, SurfaceAxis::Y, hull.y_max, 0, mid_z, 2, palette.detail);
    }

    // Squadron symbol near the bow
    if rng.chance(0.5) {
        let kind = *rng.choice(&SymbolKind::ALL);
        decoration::symbol(model, kind, SurfaceAxis::X, hull.x_max, mid_y, hull.z_max - 3, 2, palette.dark);
    }

    // Racing stripes down the spine
    if rng.chance(0.5) {
        let count = rng.range(1, 2);
        decoration::stripes(
            model,
            SurfaceAxis::Y,
            hull.y_max,
            -1,
            hull.z_min,
            hull.z_max - hull.z_min + 1,
            count,
            2,
            palette.secondary,
        );
    }

    // Registry markings amidships
    if rng.chance(0.6) {
        decoration::hull_markings(
            model,
            rng,
            SurfaceAxis::X,
            hull.x_min,
            hull.y_min,
            hull.z_min,
            hull.y_max - hull.y_min + 1,
            hull.z_max - hull.z_min + 1,
            palette.detail,
        );
    }

    // Hazard band by the engines
    if rng.chance(0.4) {
        decoration::warning_stripes(
            model,
            SurfaceAxis::Y,
            hull.y_max,
            hull.x_min,
            hull.z_min + 1,
            hull.x_max - hull.x_min + 1,
            palette.accent,
            palette.dark,
        );
    }

    // Vent slats aft on both flanks
    if rng.chance(0.5) {
        decoration::vents(model, SurfaceAxis::X, hull.x_min, mid_y, hull.z_min + 1, 2, palette.dark);
        decoration::vents(model, SurfaceAxis::X, hull.x_max, mid_y, hull.z_min + 1, 2, palette.dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_covers_all_thirteen_archetypes() {
        let names: Vec<&str> = archetype_names().collect();
        assert_eq!(names.len(), 13);
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), 13);
    }

    #[test]
    fn every_archetype_builds_in_isolation() {
        let palette = Palette::pick(crate::Category::Spaceship, &mut SeededRng::new(1));
        for (archetype, _) in ARCHETYPES {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(4242);
            let hull = (archetype.build)(&mut model, &mut rng, &palette);
            assert!(!model.is_empty(), "{} built nothing", archetype.name);
            assert!(hull.x_min <= hull.x_max && hull.z_min <= hull.z_max);
        }
    }

    #[test]
    fn decoration_pass_adds_no_geometry() {
        let palette = Palette::pick(crate::Category::Spaceship, &mut SeededRng::new(1));
        for (archetype, _) in ARCHETYPES {
            let mut model = VoxelModel::new();
            let mut rng = SeededRng::new(99);
            let hull = (archetype.build)(&mut model, &mut rng, &palette);
            let mut before: Vec<_> = model.voxels().iter().map(|v| v.position()).collect();
            before.sort_unstable();
            decorate(&mut model, &mut rng, &hull, &palette);
            let mut after: Vec<_> = model.voxels().iter().map(|v| v.position()).collect();
            after.sort_unstable();
            assert_eq!(before, after, "{} decoration changed geometry", archetype.name);
        }
    }
}
