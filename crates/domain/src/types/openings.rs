//! Enumerations describing openings in a house wall.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Compass direction a window looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::South => write!(f, "South"),
            Self::West => write!(f, "West"),
            Self::East => write!(f, "East"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "west" | "w" => Ok(Self::West),
            "east" | "e" => Ok(Self::East),
            _ => Err(DomainError::parse(format!("Unknown direction: {}", s))),
        }
    }
}

/// Construction of a window sash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    Sliding,
    #[default]
    Single,
    Double,
    Skylights,
}

impl WindowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sliding => "sliding",
            Self::Single => "single",
            Self::Double => "double",
            Self::Skylights => "skylights",
        }
    }
}

impl std::fmt::Display for WindowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sliding => write!(f, "Sliding"),
            Self::Single => write!(f, "Single"),
            Self::Double => write!(f, "Double"),
            Self::Skylights => write!(f, "Skylights"),
        }
    }
}

impl std::str::FromStr for WindowType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sliding" => Ok(Self::Sliding),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "skylights" | "skylight" => Ok(Self::Skylights),
            _ => Err(DomainError::parse(format!("Unknown window type: {}", s))),
        }
    }
}

/// How a door leaf moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    /// Hinged leaf
    #[default]
    Casual,
    Sliding,
}

impl OpeningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Sliding => "sliding",
        }
    }
}

impl std::fmt::Display for OpeningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Casual => write!(f, "Casual"),
            Self::Sliding => write!(f, "Sliding"),
        }
    }
}

impl std::str::FromStr for OpeningType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" | "hinged" => Ok(Self::Casual),
            "sliding" => Ok(Self::Sliding),
            _ => Err(DomainError::parse(format!("Unknown opening type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_names_and_initials() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("e".parse::<Direction>().unwrap(), Direction::East);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn window_type_defaults_to_single() {
        assert_eq!(WindowType::default(), WindowType::Single);
        assert_eq!(" SKYLIGHT ".parse::<WindowType>().unwrap(), WindowType::Skylights);
    }

    #[test]
    fn opening_type_displays_and_parses() {
        assert_eq!(OpeningType::Sliding.to_string(), "Sliding");
        assert_eq!("hinged".parse::<OpeningType>().unwrap(), OpeningType::Casual);
        let err = "revolving".parse::<OpeningType>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&WindowType::Skylights).unwrap();
        assert_eq!(json, "\"skylights\"");
        let parsed: Direction = serde_json::from_str("\"west\"").unwrap();
        assert_eq!(parsed, Direction::West);
    }
}
