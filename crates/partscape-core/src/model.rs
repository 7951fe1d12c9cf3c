//! Build input schema.
//!
//! A build is an ordered list of [`Part`] records and an ordered list of
//! [`WireConnection`] records. The records are frequently machine-generated,
//! so everything beyond a part's name is optional and defaults are applied
//! once, during deserialization.
//!
//! A part's identity is its index in [`BuildInput::parts`]; names are not
//! guaranteed to be unique.
//!
//! An explicit `null` counts the same as a missing key. Display-only fields
//! that hold a value of the wrong type are dropped instead of rejecting the
//! build.

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::geometry::Vec3;

/// A complete build payload: the bill of parts and the wiring between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wiring: Vec<WireConnection>,
}

impl BuildInput {
    pub fn new(parts: Vec<Part>, wiring: Vec<WireConnection>) -> Self {
        Self { parts, wiring }
    }
}

/// A hardware part in the bill of materials.
///
/// Only `name`, `kind` and `placement` influence layout. The remaining
/// fields are display data passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    /// Open-vocabulary part type tag (`"microcontroller"`, `"sensor"`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub specs: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub datasheet_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub buy_url: Option<String>,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    /// Explicit placement; when present it fully determines the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_search_term: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// A value of the expected type, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Ignored(IgnoredAny),
}

/// Treats `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<u32>::deserialize(deserializer)? {
        Lenient::Valid(quantity) => quantity,
        Lenient::Ignored(IgnoredAny) => default_quantity(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Valid(text) => Some(text),
        Lenient::Ignored(IgnoredAny) => None,
    })
}

/// Rotation entries, with `null` entries read as zero.
fn rotation_entries<'de, D>(deserializer: D) -> Result<Option<Vec<f32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<f32>>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| entries.into_iter().map(Option::unwrap_or_default).collect()))
}

impl Part {
    /// Creates a part with just a name; every optional field is unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            specs: None,
            note: None,
            datasheet_url: None,
            buy_url: None,
            quantity: default_quantity(),
            placement: None,
            image_search_term: None,
        }
    }

    /// Sets the part type tag (builder style).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets an explicit placement (builder style).
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Lowercased part type, or the empty string when absent.
    pub fn kind_lowercase(&self) -> String {
        self.kind.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Caller-supplied 3D placement of a part.
///
/// Coordinates are scene units; `rotation` holds Euler angles in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub z: f32,
    #[serde(
        default,
        deserialize_with = "rotation_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation: Option<Vec<f32>>,
}

impl Placement {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            rotation: None,
        }
    }

    /// Sets the rotation in degrees (builder style).
    pub fn with_rotation(mut self, degrees: [f32; 3]) -> Self {
        self.rotation = Some(degrees.to_vec());
        self
    }

    /// Returns the placement position.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the rotation in degrees.
    ///
    /// Only the first three entries are used; missing entries count as zero.
    pub fn rotation_degrees(&self) -> Vec3 {
        let rotation = self.rotation.as_deref().unwrap_or_default();
        let axis = |i: usize| rotation.get(i).copied().unwrap_or(0.0);
        Vec3::new(axis(0), axis(1), axis(2))
    }
}

/// A point-to-point wire between two parts.
///
/// Part references are free text and are resolved by substring matching;
/// pin labels are display-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_part: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_part: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_color: Option<String>,
}

impl WireConnection {
    pub fn new(from_part: impl Into<String>, to_part: impl Into<String>) -> Self {
        Self {
            from_part: from_part.into(),
            to_part: to_part.into(),
            ..Self::default()
        }
    }

    /// Sets both pin labels (builder style).
    pub fn with_pins(mut self, from_pin: impl Into<String>, to_pin: impl Into<String>) -> Self {
        self.from_pin = Some(from_pin.into());
        self.to_pin = Some(to_pin.into());
        self
    }

    /// Sets the wire color (builder style).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.wire_color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_defaults() {
        let part: Part = serde_json::from_str(r#"{"name": "DHT22"}"#).unwrap();
        assert_eq!(part.name, "DHT22");
        assert_eq!(part.kind, None);
        assert_eq!(part.quantity, 1);
        assert!(part.placement.is_none());
    }

    #[test]
    fn test_part_type_field() {
        let part: Part =
            serde_json::from_str(r#"{"name": "ESP32", "type": "Microcontroller"}"#).unwrap();
        assert_eq!(part.kind.as_deref(), Some("Microcontroller"));
        assert_eq!(part.kind_lowercase(), "microcontroller");
    }

    #[test]
    fn test_part_requires_name() {
        let result: Result<Part, _> = serde_json::from_str(r#"{"type": "sensor"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_placement_partial_rotation() {
        let placement: Placement =
            serde_json::from_str(r#"{"x": 1.5, "rotation": [90]}"#).unwrap();
        assert_eq!(placement.position(), Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(placement.rotation_degrees(), Vec3::new(90.0, 0.0, 0.0));
    }

    #[test]
    fn test_placement_extra_rotation_entries_ignored() {
        let placement = Placement {
            rotation: Some(vec![1.0, 2.0, 3.0, 4.0]),
            ..Placement::default()
        };
        assert_eq!(placement.rotation_degrees(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_wire_defaults() {
        let wire: WireConnection = serde_json::from_str(r#"{"from_part": "ESP32"}"#).unwrap();
        assert_eq!(wire.from_part, "ESP32");
        assert_eq!(wire.to_part, "");
        assert_eq!(wire.wire_color, None);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let build: BuildInput = serde_json::from_str(
            r#"{
                "parts": [
                    {"name": "Lid", "quantity": null, "specs": null,
                     "placement": {"x": null, "y": 2, "z": null, "rotation": [null, 90]}}
                ],
                "wiring": [{"from_part": null, "to_part": "Lid", "wire_color": null}]
            }"#,
        )
        .unwrap();

        let part = &build.parts[0];
        assert_eq!(part.quantity, 1);
        assert_eq!(part.specs, None);
        let placement = part.placement.as_ref().unwrap();
        assert_eq!(placement.position(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(placement.rotation_degrees(), Vec3::new(0.0, 90.0, 0.0));

        assert_eq!(build.wiring[0].from_part, "");
        assert_eq!(build.wiring[0].to_part, "Lid");
    }

    #[test]
    fn test_null_sections() {
        let build: BuildInput =
            serde_json::from_str(r#"{"parts": null, "wiring": null}"#).unwrap();
        assert!(build.parts.is_empty());
        assert!(build.wiring.is_empty());
    }

    #[test]
    fn test_wrongly_typed_display_fields_are_dropped() {
        let part: Part = serde_json::from_str(
            r#"{"name": "DHT22", "quantity": "2", "specs": {"voltage": 3.3},
                "note": 7, "datasheet_url": false, "buy_url": [], "image_search_term": 1}"#,
        )
        .unwrap();

        assert_eq!(part.name, "DHT22");
        assert_eq!(part.quantity, 1);
        assert_eq!(part.specs, None);
        assert_eq!(part.note, None);
        assert_eq!(part.datasheet_url, None);
        assert_eq!(part.buy_url, None);
        assert_eq!(part.image_search_term, None);
    }

    #[test]
    fn test_valid_display_fields_are_kept() {
        let part: Part =
            serde_json::from_str(r#"{"name": "DHT22", "quantity": 4, "note": "spare"}"#).unwrap();
        assert_eq!(part.quantity, 4);
        assert_eq!(part.note.as_deref(), Some("spare"));
    }

    #[test]
    fn test_build_input_missing_sections() {
        let build: BuildInput = serde_json::from_str("{}").unwrap();
        assert!(build.parts.is_empty());
        assert!(build.wiring.is_empty());
    }
}
