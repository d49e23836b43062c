//! Colors and linear gradients rendered by the generator page and the page
//! backgrounds.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Local storage key of the gradient saved from the Home page.
pub const SAVED_GRADIENT_KEY: &str = "linearColors";

/// A `#rrggbb` color, always stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [_, r, g, b] = rng.gen::<u32>().to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat(format!("'{}' is not a hex color", s));
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    /// Angle in degrees.
    Angle(u16),
    ToRight,
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientDirection::Angle(deg) => write!(f, "{}deg", deg),
            GradientDirection::ToRight => f.write_str("to right"),
        }
    }
}

/// Two-stop linear gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub direction: GradientDirection,
    pub start: HexColor,
    pub end: HexColor,
}

impl Gradient {
    pub fn new(direction: GradientDirection, start: HexColor, end: HexColor) -> Self {
        Self { direction, start, end }
    }

    /// Diagonal gradient used by the generator page.
    pub fn diagonal(start: HexColor, end: HexColor) -> Self {
        Self::new(GradientDirection::Angle(135), start, end)
    }

    /// The generator's starting pair, `#051937` to `#008793`.
    pub fn default_pair() -> (HexColor, HexColor) {
        (HexColor::from_rgb(0x05, 0x19, 0x37), HexColor::from_rgb(0x00, 0x87, 0x93))
    }

    pub fn css(&self) -> String {
        format!("linear-gradient({}, {}, {})", self.direction, self.start, self.end)
    }

    /// Copyable CSS declaration shown on the generator page.
    pub fn css_declaration(&self) -> String {
        format!("background: {};", self.css())
    }
}

/// Gradient persisted by the generator's "Save" action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGradient {
    pub color1: HexColor,
    pub color2: HexColor,
}

impl From<&Gradient> for SavedGradient {
    fn from(gradient: &Gradient) -> Self {
        Self {
            color1: gradient.start.clone(),
            color2: gradient.end.clone(),
        }
    }
}
