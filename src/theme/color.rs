use std::fmt;
use std::str::FromStr;

/// A 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse a string into a color.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `0xrrggbb`, a bare `rrggbb`, or one of
    /// the basic color names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wheel_picker::theme::Color;
    /// assert_eq!(Color::parse("#333"), Some(Color::rgb(0x33, 0x33, 0x33)));
    /// assert_eq!(Color::parse("white"), Some(Color::WHITE));
    /// assert_eq!(Color::parse("#12345"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(color) = parse_name(value) {
            return Some(color);
        }

        if let Some(hex) = value.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(hex) = value.strip_prefix("0x") {
            parse_hex(hex)
        } else if value.len() == 6 {
            parse_hex(value)
        } else {
            None
        }
    }
}

impl FromStr for Color {
    type Err = super::NoSuchColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(super::NoSuchColor)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_name(value: &str) -> Option<Color> {
    Some(match value {
        "black" | "Black" => Color::BLACK,
        "white" | "White" => Color::WHITE,
        "red" | "Red" => Color::rgb(255, 0, 0),
        "green" | "Green" => Color::rgb(0, 255, 0),
        "blue" | "Blue" => Color::rgb(0, 0, 255),
        "gray" | "grey" | "Gray" | "Grey" => Color::rgb(128, 128, 128),
        _ => return None,
    })
}

/// Parses `rrggbb` or `rgb` (each digit doubled).
fn parse_hex(value: &str) -> Option<Color> {
    let (len, multiplier) = match value.len() {
        6 => (2, 1),
        3 => (1, 17),
        _ => return None,
    };

    if let Some(other) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
        log::warn!("Invalid character `{other}` in hexadecimal value `{value}`.");
        return None;
    }

    let channel = |i: usize| -> Option<u8> {
        u8::from_str_radix(&value[i * len..(i + 1) * len], 16)
            .ok()
            .map(|v| v * multiplier)
    };

    Some(Color::rgb(channel(0)?, channel(1)?, channel(2)?))
}
