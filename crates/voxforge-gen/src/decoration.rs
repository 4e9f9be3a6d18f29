//! Recolor-only surface decoration
//!
//! A surface is one face of a shape: an axis that is held constant plus
//! a rectangle in the two free axes. Every pattern cell goes through
//! `recolor_voxel`, so cells with no underlying voxel are silently
//! skipped and decoration can never create floating geometry. Coverage
//! therefore varies with the hull's local thickness; callers and tests
//! must not assume full patterns.

use voxforge_core::Color;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

/// Which axis the decorated surface holds constant.
///
/// The free axes map to pattern coordinates `(u, v)`:
/// - `X`: `u = y`, `v = z`
/// - `Y`: `u = x`, `v = z`
/// - `Z`: `u = x`, `v = y`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceAxis {
    X,
    Y,
    Z,
}

/// Emblem shapes (coat-of-arms scale)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmblemKind {
    Shield,
    Circle,
    Diamond,
    Star,
}

impl EmblemKind {
    pub const ALL: [EmblemKind; 4] = [
        EmblemKind::Shield,
        EmblemKind::Circle,
        EmblemKind::Diamond,
        EmblemKind::Star,
    ];
}

/// Small symbol shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Cross,
    Arrow,
    Triangle,
    Square,
    Circle,
    Lightning,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 6] = [
        SymbolKind::Cross,
        SymbolKind::Arrow,
        SymbolKind::Triangle,
        SymbolKind::Square,
        SymbolKind::Circle,
        SymbolKind::Lightning,
    ];
}

fn cell(model: &mut VoxelModel, axis: SurfaceAxis, fixed: i32, u: i32, v: i32, color: Color) {
    match axis {
        SurfaceAxis::X => model.recolor_voxel(fixed, u, v, color),
        SurfaceAxis::Y => model.recolor_voxel(u, fixed, v, color),
        SurfaceAxis::Z => model.recolor_voxel(u, v, fixed, color),
    };
}

/// Paint an emblem centered at `(cu, cv)` with the given radius
pub fn emblem(
    model: &mut VoxelModel,
    kind: EmblemKind,
    axis: SurfaceAxis,
    fixed: i32,
    cu: i32,
    cv: i32,
    radius: i32,
    color: Color,
) {
    match kind {
        EmblemKind::Shield => {
            // Full-width crown, tapering to a point at the bottom.
            for v in -radius..=radius {
                let half = if v >= 0 { radius } else { radius + v };
                for u in -half..=half {
                    cell(model, axis, fixed, cu + u, cv + v, color);
                }
            }
        }
        EmblemKind::Circle => {
            for v in -radius..=radius {
                for u in -radius..=radius {
                    if u * u + v * v <= radius * radius {
                        cell(model, axis, fixed, cu + u, cv + v, color);
                    }
                }
            }
        }
        EmblemKind::Diamond => {
            for v in -radius..=radius {
                for u in -radius..=radius {
                    if u.abs() + v.abs() <= radius {
                        cell(model, axis, fixed, cu + u, cv + v, color);
                    }
                }
            }
        }
        EmblemKind::Star => {
            // Four long points plus short diagonals.
            for d in -radius..=radius {
                cell(model, axis, fixed, cu + d, cv, color);
                cell(model, axis, fixed, cu, cv + d, color);
            }
            let diag = (radius + 1) / 2;
            for d in -diag..=diag {
                cell(model, axis, fixed, cu + d, cv + d, color);
                cell(model, axis, fixed, cu + d, cv - d, color);
            }
        }
    }
}

/// Paint a symbol centered at `(cu, cv)` with the given size
pub fn symbol(
    model: &mut VoxelModel,
    kind: SymbolKind,
    axis: SurfaceAxis,
    fixed: i32,
    cu: i32,
    cv: i32,
    size: i32,
    color: Color,
) {
    match kind {
        SymbolKind::Cross => {
            for d in -size..=size {
                cell(model, axis, fixed, cu + d, cv, color);
                cell(model, axis, fixed, cu, cv + d, color);
            }
        }
        SymbolKind::Arrow => {
            // Shaft up the middle, head at the top.
            for v in -size..=size {
                cell(model, axis, fixed, cu, cv + v, color);
            }
            for i in 1..=(size + 1) / 2 {
                cell(model, axis, fixed, cu - i, cv + size - i, color);
                cell(model, axis, fixed, cu + i, cv + size - i, color);
            }
        }
        SymbolKind::Triangle => {
            // Apex at the top, widening downward.
            for i in 0..size {
                let v = cv + size - 1 - i;
                for u in -i..=i {
                    cell(model, axis, fixed, cu + u, v, color);
                }
            }
        }
        SymbolKind::Square => {
            for d in -size..=size {
                cell(model, axis, fixed, cu + d, cv - size, color);
                cell(model, axis, fixed, cu + d, cv + size, color);
                cell(model, axis, fixed, cu - size, cv + d, color);
                cell(model, axis, fixed, cu + size, cv + d, color);
            }
        }
        SymbolKind::Circle => {
            let outer = size * size;
            let inner = (size - 1) * (size - 1);
            for v in -size..=size {
                for u in -size..=size {
                    let d = u * u + v * v;
                    if d <= outer && d > inner {
                        cell(model, axis, fixed, cu + u, cv + v, color);
                    }
                }
            }
        }
        SymbolKind::Lightning => {
            // Two offset strokes joined at the middle.
            for v in 1..=size {
                cell(model, axis, fixed, cu + 1, cv + v, color);
            }
            cell(model, axis, fixed, cu, cv, color);
            cell(model, axis, fixed, cu + 1, cv, color);
            for v in 1..=size {
                cell(model, axis, fixed, cu, cv - v, color);
            }
        }
    }
}

/// Parallel racing stripes: `count` lines of `length` cells along `v`,
/// `spacing` apart along `u`
#[allow(clippy::too_many_arguments)]
pub fn stripes(
    model: &mut VoxelModel,
    axis: SurfaceAxis,
    fixed: i32,
    u0: i32,
    v0: i32,
    length: i32,
    count: i32,
    spacing: i32,
    color: Color,
) {
    for s in 0..count {
        let u = u0 + s * spacing;
        for v in 0..length {
            cell(model, axis, fixed, u, v0 + v, color);
        }
    }
}

/// Alternating hazard blocks along `u`, two cells per block
#[allow(clippy::too_many_arguments)]
pub fn warning_stripes(
    model: &mut VoxelModel,
    axis: SurfaceAxis,
    fixed: i32,
    u0: i32,
    v0: i32,
    length: i32,
    color_a: Color,
    color_b: Color,
) {
    for u in 0..length {
        let color = if (u / 2) % 2 == 0 { color_a } else { color_b };
        cell(model, axis, fixed, u0 + u, v0, color);
    }
}

/// Scattered short identification dashes within a rectangle
#[allow(clippy::too_many_arguments)]
pub fn hull_markings(
    model: &mut VoxelModel,
    rng: &mut SeededRng,
    axis: SurfaceAxis,
    fixed: i32,
    u0: i32,
    v0: i32,
    u_extent: i32,
    v_extent: i32,
    color: Color,
) {
    let count = rng.range(2, 5);
    for _ in 0..count {
        let u = u0 + rng.range(0, (u_extent - 1).max(0));
        let v = v0 + rng.range(0, (v_extent - 1).max(0));
        let dash = rng.range(2, 4);
        for d in 0..dash {
            cell(model, axis, fixed, u + d, v, color);
        }
    }
}

/// A column of short vent slats, spaced two cells apart
pub fn vents(
    model: &mut VoxelModel,
    axis: SurfaceAxis,
    fixed: i32,
    u0: i32,
    v0: i32,
    count: i32,
    color: Color,
) {
    for i in 0..count {
        for u in 0..3 {
            cell(model, axis, fixed, u0 + u, v0 + i * 2, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::new("#2F80ED");
    const INK: Color = Color::new("#EB5757");

    fn positions(model: &VoxelModel) -> Vec<(i32, i32, i32)> {
        let mut all: Vec<_> = model.voxels().iter().map(|v| v.position()).collect();
        all.sort_unstable();
        all
    }

    fn plate() -> VoxelModel {
        let mut model = VoxelModel::new();
        model.add_box(-6, -6, 0, 13, 13, 2, BASE);
        model
    }

    #[test]
    fn emblems_never_add_geometry() {
        for kind in EmblemKind::ALL {
            let mut model = plate();
            let before = positions(&model);
            emblem(&mut model, kind, SurfaceAxis::Z, 0, 0, 0, 4, INK);
            assert_eq!(positions(&model), before, "{:?} changed geometry", kind);
        }
    }

    #[test]
    fn symbols_never_add_geometry() {
        for kind in SymbolKind::ALL {
            let mut model = plate();
            let before = positions(&model);
            symbol(&mut model, kind, SurfaceAxis::Z, 0, 0, 0, 3, INK);
            assert_eq!(positions(&model), before, "{:?} changed geometry", kind);
        }
    }

    #[test]
    fn emblems_recolor_on_the_target_face_only() {
        for kind in EmblemKind::ALL {
            let mut model = plate();
            emblem(&mut model, kind, SurfaceAxis::Z, 0, 0, 0, 4, INK);
            let touched = model
                .voxels()
                .iter()
                .filter(|v| v.color == INK)
                .collect::<Vec<_>>();
            assert!(!touched.is_empty(), "{:?} recolored nothing", kind);
            assert!(touched.iter().all(|v| v.z == 0));
        }
    }

    #[test]
    fn patterns_skip_missing_cells() {
        // A 1x1 plate only has the center cell; a radius-4 emblem must
        // recolor just that cell and nothing else.
        let mut model = VoxelModel::new();
        model.add_voxel(0, 0, 0, BASE);
        emblem(&mut model, EmblemKind::Circle, SurfaceAxis::Z, 0, 0, 0, 4, INK);
        assert_eq!(model.len(), 1);
        assert_eq!(model.voxels()[0].color, INK);
    }

    #[test]
    fn surface_axis_maps_free_axes() {
        let mut model = VoxelModel::new();
        model.add_voxel(5, 1, 2, BASE);
        // For SurfaceAxis::X, (u, v) = (y, z).
        symbol(&mut model, SymbolKind::Cross, SurfaceAxis::X, 5, 1, 2, 0, INK);
        assert_eq!(model.voxels()[0].color, INK);
    }

    #[test]
    fn warning_stripes_alternate() {
        let mut model = VoxelModel::new();
        model.add_box(0, 0, 0, 8, 1, 1, BASE);
        warning_stripes(&mut model, SurfaceAxis::Z, 0, 0, 0, 8, INK, BASE);
        let colors: Vec<Color> = model.voxels().iter().map(|v| v.color).collect();
        assert_eq!(colors[0], INK);
        assert_eq!(colors[1], INK);
        assert_eq!(colors[2], BASE);
        assert_eq!(colors[3], BASE);
        assert_eq!(colors[4], INK);
    }

    #[test]
    fn hull_markings_are_deterministic_and_additive_free() {
        let mut a = plate();
        let mut b = plate();
        hull_markings(&mut a, &mut SeededRng::new(8), SurfaceAxis::Z, 0, -6, -6, 13, 13, INK);
        hull_markings(&mut b, &mut SeededRng::new(8), SurfaceAxis::Z, 0, -6, -6, 13, 13, INK);
        assert_eq!(a.voxels(), b.voxels());
        assert_eq!(a.len(), plate().len());
    }
}
