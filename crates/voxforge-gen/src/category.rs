//! Object categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use voxforge_core::VoxforgeError;

/// The four object families the engine can generate
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Robot,
    Spaceship,
    Animal,
    Monster,
}

impl Category {
    /// All categories, in a fixed order
    pub const ALL: [Category; 4] = [
        Category::Robot,
        Category::Spaceship,
        Category::Animal,
        Category::Monster,
    ];

    /// The lowercase tag used on output records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Robot => "robot",
            Category::Spaceship => "spaceship",
            Category::Animal => "animal",
            Category::Monster => "monster",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = VoxforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "robot" => Ok(Category::Robot),
            "spaceship" => Ok(Category::Spaceship),
            "animal" => Ok(Category::Animal),
            "monster" => Ok(Category::Monster),
            other => Err(VoxforgeError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert!("teapot".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Category::Spaceship).unwrap();
        assert_eq!(json, "\"spaceship\"");
    }
}
