//! Closed per-category palette tables

use crate::category::Category;
use serde::Serialize;
use voxforge_core::Color;
use voxforge_rng::SeededRng;

/// A five-slot color set. Immutable once selected; each generator run
/// consumes exactly one palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub detail: Color,
    pub dark: Color,
}

const fn palette(
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    detail: &'static str,
    dark: &'static str,
) -> Palette {
    Palette {
        primary: Color::new(primary),
        secondary: Color::new(secondary),
        accent: Color::new(accent),
        detail: Color::new(detail),
        dark: Color::new(dark),
    }
}

const ROBOT_PALETTES: &[Palette] = &[
    // Industrial
    palette("#F2C94C", "#333333", "#EB5757", "#BDBDBD", "#1A1A1A"),
    // Sci-fi blue
    palette("#2F80ED", "#E0E0E0", "#56CCF2", "#828282", "#1F2937"),
    // Military
    palette("#4B5320", "#8B4513", "#F2994A", "#555555", "#222222"),
    // Neon punk
    palette("#FF00FF", "#2D2D2D", "#00FFFF", "#FFFF00", "#000000"),
];

const SPACESHIP_PALETTES: &[Palette] = &[
    // Federation white
    palette("#ECECEC", "#9FB3C8", "#EB5757", "#4F5B66", "#20262E"),
    // Deep space
    palette("#2C3E50", "#95A5A6", "#E67E22", "#7F8C8D", "#101820"),
    // Smuggler rust
    palette("#A0522D", "#D9C5A0", "#27AE60", "#6E6E6E", "#2B1D12"),
    // Void black
    palette("#1B1B2F", "#4A4E69", "#E94560", "#9A8C98", "#0F0F1A"),
];

const ANIMAL_PALETTES: &[Palette] = &[
    // Savanna
    palette("#C68642", "#8D5524", "#F1C27D", "#FFFFFF", "#3B2410"),
    // Forest
    palette("#6B8E23", "#556B2F", "#DEB887", "#FFF8DC", "#1F2A14"),
    // Arctic
    palette("#E8F1F2", "#B3C2C8", "#6699CC", "#44576D", "#22303C"),
    // Tropical
    palette("#FF8C42", "#2E86AB", "#F6F740", "#FFFFFF", "#232528"),
];

const MONSTER_PALETTES: &[Palette] = &[
    // Swamp thing
    palette("#4A7023", "#2F4F2F", "#9ACD32", "#704214", "#101D10"),
    // Infernal
    palette("#8B0000", "#3D0C02", "#FF4500", "#D4A017", "#1A0000"),
    // Abyssal
    palette("#301934", "#4B0082", "#00FF7F", "#756D84", "#120A14"),
    // Toxic sludge
    palette("#7FFF00", "#3C5149", "#FF00AA", "#C0C0C0", "#141E17"),
];

impl Palette {
    /// Draw a palette uniformly from the closed set registered for the
    /// category.
    pub fn pick(category: Category, rng: &mut SeededRng) -> Palette {
        let table = match category {
            Category::Robot => ROBOT_PALETTES,
            Category::Spaceship => SPACESHIP_PALETTES,
            Category::Animal => ANIMAL_PALETTES,
            Category::Monster => MONSTER_PALETTES,
        };
        *rng.choice(table)
    }
}
