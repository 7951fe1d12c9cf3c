//! Part classification tags.
//!
//! A [`Category`] picks both the visual shape of a part and its default
//! placement strategy. The set is closed; anything that cannot be classified
//! is a [`Category::Sensor`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Microcontroller board families with distinct shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    Uno,
    Pi,
    Esp32,
    Esp32Cam,
}

/// The classification of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "category", content = "board")]
pub enum Category {
    Frame,
    Enclosure,
    Wheel,
    Camera,
    Arm,
    Propeller,
    Microcontroller(Board),
    Display,
    Motor,
    Battery,
    Sensor,
}

impl Category {
    /// Whether parts of this category sit in the tight grid inside an enclosure.
    pub fn is_interior(self) -> bool {
        matches!(
            self,
            Category::Microcontroller(_) | Category::Camera | Category::Sensor | Category::Battery
        )
    }

    /// Whether parts of this category anchor the build at the origin.
    pub fn is_anchor(self) -> bool {
        matches!(self, Category::Frame | Category::Enclosure)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Frame => "frame",
            Category::Enclosure => "enclosure",
            Category::Wheel => "wheel",
            Category::Camera => "camera",
            Category::Arm => "arm",
            Category::Propeller => "propeller",
            Category::Microcontroller(Board::Uno) => "microcontroller/uno",
            Category::Microcontroller(Board::Pi) => "microcontroller/pi",
            Category::Microcontroller(Board::Esp32) => "microcontroller/esp32",
            Category::Microcontroller(Board::Esp32Cam) => "microcontroller/esp32cam",
            Category::Display => "display",
            Category::Motor => "motor",
            Category::Battery => "battery",
            Category::Sensor => "sensor",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_categories() {
        assert!(Category::Microcontroller(Board::Esp32).is_interior());
        assert!(Category::Camera.is_interior());
        assert!(Category::Sensor.is_interior());
        assert!(Category::Battery.is_interior());
        assert!(!Category::Display.is_interior());
        assert!(!Category::Arm.is_interior());
    }

    #[test]
    fn test_anchor_categories() {
        assert!(Category::Frame.is_anchor());
        assert!(Category::Enclosure.is_anchor());
        assert!(!Category::Wheel.is_anchor());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Microcontroller(Board::Esp32Cam)).unwrap();
        assert_eq!(json, r#"{"category":"microcontroller","board":"esp32_cam"}"#);

        let json = serde_json::to_string(&Category::Sensor).unwrap();
        assert_eq!(json, r#"{"category":"sensor"}"#);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Microcontroller(Board::Pi).to_string(), "microcontroller/pi");
        assert_eq!(Category::Wheel.to_string(), "wheel");
    }
}
