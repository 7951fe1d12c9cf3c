//! Color handling for Partscape scenes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Scene descriptors carry colors as the CSS strings
//! they were written with; [`Color`] is used wherever a configured color has
//! to be validated before it reaches a renderer.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
///
/// Keeps the source string so the color can be handed to a renderer exactly
/// as it was configured.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
    source: String,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use partscape_core::color::Color;
    ///
    /// let cyan = Color::new("#00ffff").unwrap();
    /// assert_eq!(cyan.as_css(), "#00ffff");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self {
                color,
                source: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as the CSS string it was created from
    pub fn as_css(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
