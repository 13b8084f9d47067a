//! RGB color type, hex encoding, and lightness/brightness adjustment.

use thiserror::Error;

/// Errors produced when decoding a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex string (after stripping `#` and expanding shorthand) is not 6 digits long
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    /// Hex string contains a character outside `0-9a-fA-F`
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// Represents an opaque RGB color with 8-bit channels.
///
/// Shapes store colors in this form; hex strings only appear at the edges
/// (config file, CLI, UI controls).
///
/// # Examples
///
/// ```
/// use rastersketch::draw::Color;
/// let orange = Color::from_hex("#ff8000").unwrap();
/// assert_eq!(orange, Color::new(255, 128, 0));
/// assert_eq!(orange.to_hex(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decodes `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            len => return Err(ColorError::InvalidLength(len)),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Encodes as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns this color with brightness and lightness deltas applied.
    ///
    /// Brightness scales every channel by `(100 + brightness) / 100`. Lightness
    /// is applied afterwards: positive values blend toward white, negative
    /// values scale toward black. Both deltas are percentages; zero leaves the
    /// channel untouched. The result is always computed from `self`, so
    /// calling this repeatedly from the same base never drifts.
    pub fn adjusted(&self, lightness: i32, brightness: i32) -> Color {
        let brightness_factor = (100.0 + brightness as f64) / 100.0;
        let lightness_factor = lightness as f64 / 100.0;

        let adjust = |channel: u8| -> u8 {
            let mut v = channel as f64 * brightness_factor;
            if lightness_factor > 0.0 {
                v += (255.0 - v) * lightness_factor;
            } else if lightness_factor < 0.0 {
                v *= 1.0 + lightness_factor;
            }
            v.round().clamp(0.0, 255.0) as u8
        };

        Color::new(adjust(self.r), adjust(self.g), adjust(self.b))
    }

    /// Converts to an opaque RGBA pixel.
    pub fn to_rgba(&self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// Applies lightness/brightness deltas to a hex color string.
///
/// Returns the adjusted color as lowercase `#rrggbb`. Malformed input is
/// returned unchanged rather than reported.
pub fn apply_lightness_brightness(base_hex: &str, lightness: i32, brightness: i32) -> String {
    match Color::from_hex(base_hex) {
        Ok(color) => color.adjusted(lightness, brightness).to_hex(),
        Err(err) => {
            log::debug!("Leaving color '{base_hex}' unchanged: {err}");
            base_hex.to_string()
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined green color
pub const GREEN: Color = Color::new(0, 255, 0);

/// Predefined blue color
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Color = Color::new(255, 128, 0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::new(255, 0, 255);

/// Predefined white color
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined black color
pub const BLACK: Color = Color::new(0, 0, 0);

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
