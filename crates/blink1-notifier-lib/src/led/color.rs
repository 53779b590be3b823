//! RGB colors and their two wire renderings.
//!
//! The web API takes `RRGGBB` (lowercase hex, URL-encoded `#` prefix added by
//! the caller); `blink1-tool` takes `R,G,B` in decimal.

use std::fmt;

/// An immutable 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const YELLOW: Color = Color::new(255, 200, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const OFF: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Six lowercase hex digits, each channel zero-padded: `"ffc800"`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Comma-separated decimal triple: `"255,200,0"`.
    pub fn decimal(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Parse a color string.
    ///
    /// Accepts:
    /// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
    /// - Named: `"blue"`, `"green"`, `"yellow"`, `"red"`, `"white"`, `"off"` (or `"black"`)
    pub fn parse(s: &str) -> crate::error::Result<Self> {
        let s = s.trim();

        match s.to_lowercase().as_str() {
            "blue" => return Ok(Color::BLUE),
            "green" => return Ok(Color::GREEN),
            "yellow" => return Ok(Color::YELLOW),
            "red" => return Ok(Color::RED),
            "white" => return Ok(Color::WHITE),
            "off" | "black" => return Ok(Color::OFF),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(crate::NotifierError::Color(format!(
                "Invalid color: {s} (use #RRGGBB or a color name)"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| crate::NotifierError::Color(format!("Invalid hex color: {s}")))
        };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}
