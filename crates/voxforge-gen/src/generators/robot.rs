//! Robot grammar: legs, torso, head, arms, attachments, chest details

use crate::components::robot::{self, HeadKind, ToolKind, WeaponKind};
use crate::components::Side;
use crate::decoration::{self, EmblemKind, SurfaceAxis, SymbolKind};
use crate::palette::Palette;
use voxforge_model::VoxelModel;
use voxforge_rng::SeededRng;

/// Torso attachments; at most one per robot, and none at all when the
/// backpack branch wins first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Accessory {
    BackTool,
    ShoulderTool,
    ChestTool,
    HipTool,
    None,
}

const ACCESSORIES: &[(Accessory, f32)] = &[
    (Accessory::BackTool, 1.0),
    (Accessory::ShoulderTool, 1.0),
    (Accessory::ChestTool, 1.0),
    (Accessory::HipTool, 1.0),
    (Accessory::None, 2.0),
];

pub fn build(model: &mut VoxelModel, rng: &mut SeededRng, palette: &Palette) {
    // Proportion flags steer every later dimension draw.
    let tall = rng.chance(0.3);
    let wide = rng.chance(0.3);
    let thin = rng.chance(0.2);

    let leg_length = if tall { rng.range(8, 12) } else { rng.range(5, 8) };
    let leg_spacing = if wide { rng.range(3, 4) } else { rng.range(2, 3) };

    // Legs; the torso sits on the higher hip.
    let left_hip = robot::leg(model, rng, -leg_spacing, 0, 0, leg_length, palette);
    let right_hip = robot::leg(model, rng, leg_spacing, 0, 0, leg_length, palette);
    let torso_y = left_hip.max(right_hip);

    // Torso
    let torso_width = if thin {
        leg_spacing * 2 + rng.range(2, 3)
    } else {
        leg_spacing * 2 + rng.range(3, 5)
    };
    let torso_height = if tall { rng.range(7, 10) } else { rng.range(5, 8) };
    let torso_depth = if thin { rng.range(3, 4) } else { rng.range(4, 5) };
    robot::torso(model, rng, 0, torso_y, 0, torso_width, torso_height, torso_depth, palette);

    // Neck and head
    let head_y = torso_y + torso_height;
    model.add_box(-1, head_y, -1, 2, 1, 2, palette.detail);
    let head_kind = *rng.choice(&HeadKind::ALL);
    robot::head(model, rng, head_kind, 0, head_y + 1, 0, palette);

    // Arms with elbow joints and end effectors
    let shoulder_y = torso_y + torso_height - 2;
    let upper_len = rng.range(3, 4);
    let fore_len = rng.range(3, 4);
    for side in [Side::Left, Side::Right] {
        let x = match side {
            Side::Left => -(torso_width / 2 + 2),
            Side::Right => torso_width / 2 + 2,
        };

        // Shoulder pad
        model.add_box(x - 2, shoulder_y + 1, -2, 4, 2, 5, palette.detail);

        // Upper arm
        model.add_box(x - 1, shoulder_y - upper_len, -1, 2, upper_len, 3, palette.secondary);

        let elbow_y = shoulder_y - upper_len - 1;
        robot::elbow_joint(model, x, elbow_y, 0, palette);

        // Forearm
        model.add_box(x - 1, elbow_y - fore_len, -1, 2, fore_len, 3, palette.secondary);
        let wrist_y = elbow_y - fore_len;

        // Replace-vs-augment: either the hand gives way to an
        // attachment, or it stays and may get a forearm mount.
        if rng.chance(0.35) {
            if rng.chance(0.5) {
                let kind = *rng.choice(&WeaponKind::ALL);
                robot::weapon(model, rng, kind, x, wrist_y - 2, 1, palette);
            } else {
                let kind = *rng.choice(&ToolKind::ALL);
                robot::tool(model, kind, x, wrist_y - 2, 1, palette);
            }
        } else {
            robot::hand(model, rng, side, x, wrist_y - 3, 0, palette);
            if rng.chance(0.2) {
                let kind = *rng.choice(&WeaponKind::ALL);
                robot::weapon(model, rng, kind, x, elbow_y + 1, 2, palette);
            }
        }
    }

    // Backpack precludes the other attachments.
    if rng.chance(0.3) {
        let back_z = torso_depth / 2;
        model.add_box(
            -torso_width / 2 + 1,
            torso_y + 1,
            back_z + 1,
            torso_width - 2,
            torso_height - 2,
            2,
            palette.secondary,
        );
        // Straps over the shoulders
        model.add_box(-torso_width / 2 + 1, torso_y + torso_height - 1, 0, 1, 1, back_z + 1, palette.dark);
        model.add_box(torso_width / 2 - 2, torso_y + torso_height - 1, 0, 1, 1, back_z + 1, palette.dark);
    } else {
        match *rng.weighted(ACCESSORIES) {
            Accessory::BackTool => {
                let kind = *rng.choice(&ToolKind::ALL);
                robot::tool(model, kind, 0, torso_y + torso_height / 2, torso_depth / 2 + 1, palette);
            }
            Accessory::ShoulderTool => {
                let kind = *rng.choice(&WeaponKind::ALL);
                robot::weapon(model, rng, kind, torso_width / 2 + 1, shoulder_y + 3, -1, palette);
            }
            Accessory::ChestTool => {
                let kind = *rng.choice(&ToolKind::ALL);
                robot::tool(model, kind, 0, torso_y + torso_height / 2, -(torso_depth / 2) - 3, palette);
            }
            Accessory::HipTool => {
                let kind = *rng.choice(&ToolKind::ALL);
                robot::tool(model, kind, torso_width / 2 + 1, torso_y, 0, palette);
            }
            Accessory::None => {}
        }
    }

    // Chest details on the front hull face.
    let chest_z = -(torso_depth / 2);
    let chest_v = torso_y + torso_height / 2;
    if rng.chance(0.5) {
        let kind = *rng.choice(&EmblemKind::ALL);
        decoration::emblem(model, kind, SurfaceAxis::Z, chest_z, 0, chest_v, 2, palette.accent);
    } else if rng.chance(0.5) {
        let kind = *rng.choice(&SymbolKind::ALL);
        decoration::symbol(model, kind, SurfaceAxis::Z, chest_z, 0, chest_v, 2, palette.detail);
    }
}
