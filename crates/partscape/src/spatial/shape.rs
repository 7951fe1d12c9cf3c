//! Visual shape selection.

use serde::Serialize;

use partscape_core::category::{Board, Category};

/// The mesh a renderer should draw for a part.
///
/// Chosen from the category alone, independent of how the part's position
/// was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Chassis,
    Enclosure,
    Wheel,
    Esp32Cam,
    DroneArm,
    Propeller,
    ArduinoUno,
    RaspberryPi,
    Esp32,
    DisplayModule,
    Motor,
    Battery,
    SensorModule,
}

impl From<Category> for ShapeKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Frame => ShapeKind::Chassis,
            Category::Enclosure => ShapeKind::Enclosure,
            Category::Wheel => ShapeKind::Wheel,
            Category::Camera | Category::Microcontroller(Board::Esp32Cam) => ShapeKind::Esp32Cam,
            Category::Arm => ShapeKind::DroneArm,
            Category::Propeller => ShapeKind::Propeller,
            Category::Microcontroller(Board::Uno) => ShapeKind::ArduinoUno,
            Category::Microcontroller(Board::Pi) => ShapeKind::RaspberryPi,
            Category::Microcontroller(Board::Esp32) => ShapeKind::Esp32,
            Category::Display => ShapeKind::DisplayModule,
            Category::Motor => ShapeKind::Motor,
            Category::Battery => ShapeKind::Battery,
            Category::Sensor => ShapeKind::SensorModule,
        }
    }
}

/// Name fragments of parts whose mesh already identifies them.
const UNLABELED: [&str; 4] = ["arduino", "pi", "frame", "enclosure"];

/// Whether a floating name label is drawn above the part.
pub fn has_label(name: &str) -> bool {
    let name = name.to_lowercase();
    !UNLABELED.iter().any(|fragment| name.contains(fragment))
}
