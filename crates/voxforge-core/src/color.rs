//! Voxel color values

use serde::{Serialize, Serializer};
use std::fmt;

/// A voxel color as a `#RRGGBB` hex string.
///
/// Every color the engine emits comes from a static palette table or a
/// named constant, so the backing storage is a `&'static str` and the
/// type stays `Copy`. Serializes as the plain hex string.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Color(&'static str);

impl Color {
    pub const WHITE: Self = Self("#FFFFFF");
    pub const BLACK: Self = Self("#000000");
    pub const RED: Self = Self("#FF0000");

    /// Create a color from a static hex string
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// Get the hex string, e.g. `"#F2C94C"`
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_constants() {
        assert_eq!(Color::WHITE.as_str(), "#FFFFFF");
        assert_eq!(Color::BLACK.as_str(), "#000000");
    }

    #[test]
    fn color_equality_is_by_string() {
        assert_eq!(Color::new("#FF0000"), Color::RED);
        assert_ne!(Color::new("#FF0000"), Color::BLACK);
    }
}
