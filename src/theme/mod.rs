//! Visual configuration for the picker.
//!
//! The picker does not draw anything itself: a [`WheelTheme`] is handed to
//! the host through the rendered rows and the layout shell, and the host
//! applies it with its own toolkit.
//!
//! Two palettes are provided:
//!
//! * [`WheelTheme::classic`]: white wrapper, grey items, dark selection.
//! * [`WheelTheme::light`]: off-white wrapper, lighter item text.
//!
//! With the `toml` feature, a theme can be tweaked from a `[theme]` table:
//!
//! ```toml
//! [theme]
//! highlight_border_width = 2
//! font_size = 20
//! selected_effects = ["bold"]
//!
//! [theme.colors]
//! highlight = "#333"
//! wrapper = "#FFFFFF"
//! item = "#B4B4B4"
//! selected = "#222121"
//! ```
mod color;
mod effect;

pub use self::color::Color;
pub use self::effect::{Effect, Effects};

use enum_map::{enum_map, Enum, EnumMap};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Error parsing a color.
#[derive(Debug)]
pub struct NoSuchColor;

impl std::fmt::Display for NoSuchColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not parse the given color")
    }
}

impl std::error::Error for NoSuchColor {}

/// Color roles used by the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
pub enum PaletteColor {
    /// Top and bottom borders of the highlight band.
    Highlight,
    /// Background of the viewport.
    Wrapper,
    /// Text of unselected rows.
    Item,
    /// Text of the selected row.
    Selected,
}

impl PaletteColor {
    /// Returns an iterator on all palette roles.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl FromStr for PaletteColor {
    type Err = NoSuchColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use PaletteColor::*;

        Ok(match s {
            "Highlight" | "highlight" => Highlight,
            "Wrapper" | "wrapper" | "background" => Wrapper,
            "Item" | "item" => Item,
            "Selected" | "selected" => Selected,
            _ => return Err(NoSuchColor),
        })
    }
}

/// Colors, sizes and effects used to present the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelTheme {
    palette: EnumMap<PaletteColor, Color>,

    /// Width of the top and bottom borders of the highlight band.
    pub highlight_border_width: f32,

    /// Font size of the selected row. Other rows shrink from there.
    pub font_size: f32,

    /// Effects applied to the selected row label.
    pub selected_effects: Effects,
}

/// Currently returns the classic theme.
impl Default for WheelTheme {
    fn default() -> Self {
        WheelTheme::classic()
    }
}

impl Index<PaletteColor> for WheelTheme {
    type Output = Color;

    fn index(&self, role: PaletteColor) -> &Color {
        &self.palette[role]
    }
}

impl IndexMut<PaletteColor> for WheelTheme {
    fn index_mut(&mut self, role: PaletteColor) -> &mut Color {
        &mut self.palette[role]
    }
}

impl WheelTheme {
    /// White wrapper with grey items and a thick dark highlight.
    pub fn classic() -> Self {
        WheelTheme {
            palette: enum_map! {
                PaletteColor::Highlight => Color::rgb(0x33, 0x33, 0x33),
                PaletteColor::Wrapper => Color::WHITE,
                PaletteColor::Item => Color::rgb(0xb4, 0xb4, 0xb4),
                PaletteColor::Selected => Color::rgb(0x22, 0x21, 0x21),
            },
            highlight_border_width: 2.0,
            font_size: 20.0,
            selected_effects: Effect::Bold.into(),
        }
    }

    /// Off-white wrapper with a hairline highlight.
    pub fn light() -> Self {
        WheelTheme {
            palette: enum_map! {
                PaletteColor::Highlight => Color::rgb(0x33, 0x33, 0x33),
                PaletteColor::Wrapper => Color::rgb(0xfa, 0xfa, 0xfa),
                PaletteColor::Item => Color::rgb(0x99, 0x99, 0x99),
                PaletteColor::Selected => Color::rgb(0x33, 0x33, 0x33),
            },
            highlight_border_width: 1.0,
            font_size: 20.0,
            selected_effects: Effects::empty(),
        }
    }

    /// Sets the color for the given role.
    pub fn set_color(&mut self, role: PaletteColor, color: Color) {
        self.palette[role] = color;
    }

    /// Iterates over all `(role, color)` pairs.
    pub fn colors(&self) -> impl Iterator<Item = (PaletteColor, Color)> + '_ {
        self.palette.iter().map(|(role, &color)| (role, color))
    }

    /// Load values from an already parsed toml [`Table`], overwriting previous values.
    ///
    /// Unknown keys and malformed values are logged and skipped.
    ///
    /// [`Table`]: https://docs.rs/toml/latest/toml/type.Table.html
    #[cfg(feature = "toml")]
    pub fn load_toml(&mut self, table: &toml::value::Table) {
        if let Some(width) = table.get("highlight_border_width").and_then(toml_number) {
            self.highlight_border_width = width;
        }

        if let Some(size) = table.get("font_size").and_then(toml_number) {
            self.font_size = size;
        }

        if let Some(toml::Value::Array(effects)) = table.get("selected_effects") {
            self.selected_effects = effects
                .iter()
                .filter_map(|effect| match effect.as_str().map(str::parse::<Effect>) {
                    Some(Ok(effect)) => Some(effect),
                    _ => {
                        log::warn!("Could not parse effect: `{effect}`.");
                        None
                    }
                })
                .collect();
        }

        if let Some(toml::Value::Table(colors)) = table.get("colors") {
            for (key, value) in colors {
                let role = match key.parse::<PaletteColor>() {
                    Ok(role) => role,
                    Err(_) => {
                        log::warn!("Found unknown palette color: `{key}`.");
                        continue;
                    }
                };

                match value.as_str().and_then(Color::parse) {
                    Some(color) => self.palette[role] = color,
                    None => log::warn!("Could not parse color: `{value}`."),
                }
            }
        }
    }
}

/// Reads an integer or a float as `f32`.
#[cfg(feature = "toml")]
pub(crate) fn toml_number(value: &toml::Value) -> Option<f32> {
    match *value {
        toml::Value::Integer(i) => Some(i as f32),
        toml::Value::Float(f) => Some(f as f32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_index() {
        let mut theme = WheelTheme::classic();
        assert_eq!(theme[PaletteColor::Wrapper], Color::WHITE);

        theme[PaletteColor::Wrapper] = Color::BLACK;
        assert_eq!(theme[PaletteColor::Wrapper], Color::BLACK);
        assert_eq!(theme.colors().count(), PaletteColor::all().count());
    }

    #[test]
    fn light_theme_has_no_selected_effects() {
        let theme = WheelTheme::light();
        assert!(theme.selected_effects.is_empty());
        assert_eq!(theme[PaletteColor::Item], Color::rgb(0x99, 0x99, 0x99));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn load_toml_overrides_present_keys() {
        let table: toml::value::Table = toml::de::from_str(
            r##"
            highlight_border_width = 3
            selected_effects = ["bold", "underline", "sparkle"]

            [colors]
            highlight = "#f00"
            selected = "not a color"
            unknown = "#000"
            "##,
        )
        .unwrap();

        let mut theme = WheelTheme::classic();
        theme.load_toml(&table);

        assert_eq!(theme.highlight_border_width, 3.0);
        assert_eq!(theme.font_size, 20.0);
        assert_eq!(theme[PaletteColor::Highlight], Color::rgb(255, 0, 0));
        assert_eq!(
            theme[PaletteColor::Selected],
            WheelTheme::classic()[PaletteColor::Selected]
        );
        assert_eq!(theme.selected_effects, Effect::Bold | Effect::Underline);
    }
}
