//! The generated-object output record

use crate::category::Category;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use voxforge_model::Voxel;
use voxforge_rng::SeededRng;

/// The engine's sole output: a finished voxel model plus metadata.
///
/// `seed` is the resolved numeric seed that produced the geometry, kept
/// for reproducibility checks and regenerate-from-seed features in
/// collaborating code. `id`, `name` and `created_at` are bookkeeping
/// and are NOT covered by the reproducibility contract.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedObject {
    /// Unique object ID (UUID)
    pub id: String,
    /// Display name, e.g. "Rustbucket Mk 374"
    pub name: String,
    /// Category tag
    pub category: Category,
    /// The model: unique colored grid cells in insertion order
    pub voxels: Vec<Voxel>,
    /// Creation time as epoch milliseconds
    pub created_at: u64,
    /// The seed that produced `voxels`
    pub seed: u32,
}

impl GeneratedObject {
    /// Wrap a finished model in the output record
    pub fn new(name: String, category: Category, voxels: Vec<Voxel>, seed: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            category,
            voxels,
            created_at: now_millis(),
            seed,
        }
    }
}

// Epoch milliseconds without an external chrono dependency.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

const ROBOT_NAMES: &[&str] = &[
    "Rustbucket", "Servo", "Cogsworth", "Unit", "Vector", "Piston", "Gearbox", "Axiom",
];
const SHIP_NAMES: &[&str] = &[
    "Starfall", "Nomad", "Vanguard", "Comet", "Drifter", "Eclipse", "Horizon", "Pulsar",
];
const ANIMAL_NAMES: &[&str] = &[
    "Whisker", "Bramble", "Tundra", "Pip", "Sable", "Moss", "Clover", "Fern",
];
const MONSTER_NAMES: &[&str] = &[
    "Gnashgob", "Lurker", "Snarl", "Blight", "Maw", "Grimble", "Ooze", "Thorn",
];

/// Draw a display name from the category's word list.
///
/// Called after geometry is complete so naming draws never perturb the
/// seed-to-shape mapping.
pub fn display_name(category: Category, rng: &mut SeededRng) -> String {
    let table = match category {
        Category::Robot => ROBOT_NAMES,
        Category::Spaceship => SHIP_NAMES,
        Category::Animal => ANIMAL_NAMES,
        Category::Monster => MONSTER_NAMES,
    };
    let word = rng.choice(table);
    let number = rng.range(1, 999);
    match category {
        Category::Robot => format!("{} Mk {}", word, number),
        Category::Spaceship => format!("{} {}", word, number),
        Category::Animal | Category::Monster => format!("{} #{}", word, number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxforge_core::Color;

    #[test]
    fn record_serializes_expected_shape() {
        let object = GeneratedObject::new(
            "Servo Mk 7".to_string(),
            Category::Robot,
            vec![Voxel::new(1, 2, 3, Color::new("#F2C94C"))],
            12345,
        );
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["category"], "robot");
        assert_eq!(json["seed"], 12345);
        assert_eq!(json["voxels"][0]["x"], 1);
        assert_eq!(json["voxels"][0]["color"], "#F2C94C");
        assert!(json["id"].as_str().is_some());
        assert!(json["created_at"].as_u64().is_some());
    }

    #[test]
    fn display_name_is_deterministic() {
        let a = display_name(Category::Monster, &mut SeededRng::new(7));
        let b = display_name(Category::Monster, &mut SeededRng::new(7));
        assert_eq!(a, b);
    }
}
