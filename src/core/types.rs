use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// A position in either screen (container-relative) or chart space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Width/height pair in chart units. Used for the chart container and for
/// annotation footprints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> OverlayResult<Self> {
        if !self.is_valid() {
            return Err(OverlayError::InvalidContainer {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn contains(self, origin: Point, point: Point) -> bool {
        point.x >= origin.x
            && point.x <= origin.x + self.width
            && point.y >= origin.y
            && point.y <= origin.y + self.height
    }
}

/// Opaque RGB color carried through to the host renderer.
///
/// Serialized as a `#rrggbb` string so persisted annotations stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn from_hex(input: &str) -> OverlayResult<Self> {
        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(OverlayError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };
        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| {
                    OverlayError::InvalidData(format!("color `{input}` has non-hex digits"))
                })
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        // amber
        Self::rgb(0xf5, 0x9e, 0x0b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = OverlayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}
