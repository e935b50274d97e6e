use crate::theme::{Color, Effects, PaletteColor, WheelTheme};
use std::str::FromStr;

/// Opacity by distance from the selected row. Farther rows use the last entry.
const OPACITIES: [f32; 5] = [1.0, 1.0, 0.6, 0.3, 0.1];

/// Font size reduction by distance. Farther rows use the last entry.
const SHRINK: [f32; 3] = [0.0, 1.0, 2.0];

/// How rows are de-emphasized away from the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    /// Opacity and font size fall off with the distance to the selection.
    #[default]
    Falloff,
    /// Only the selected row stands out, through its color and effects.
    Binary,
}

impl FromStr for Emphasis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "falloff" | "Falloff" => Emphasis::Falloff,
            "binary" | "Binary" => Emphasis::Binary,
            _ => return Err(()),
        })
    }
}

/// How a single row should be presented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowStyle {
    /// `true` for the selected row only.
    pub selected: bool,
    /// Between 0 and 1.
    pub opacity: f32,
    /// Font size of the label.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Text effects.
    pub effects: Effects,
}

impl RowStyle {
    /// Style for a row `distance` rows away from the selection.
    pub fn for_distance(distance: usize, emphasis: Emphasis, theme: &WheelTheme) -> Self {
        let selected = distance == 0;
        let (opacity, font_size) = match emphasis {
            Emphasis::Falloff => (
                pick(&OPACITIES, distance),
                (theme.font_size - pick(&SHRINK, distance)).max(1.0),
            ),
            Emphasis::Binary => (1.0, theme.font_size),
        };

        RowStyle {
            selected,
            opacity,
            font_size,
            color: if selected {
                theme[PaletteColor::Selected]
            } else {
                theme[PaletteColor::Item]
            },
            effects: if selected {
                theme.selected_effects
            } else {
                Effects::empty()
            },
        }
    }
}

fn pick(table: &[f32], distance: usize) -> f32 {
    table[distance.min(table.len() - 1)]
}

/// A row ready to be drawn by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Stable identity of the row: its index in the data source.
    pub key: usize,
    /// Top of the row, in content coordinates.
    pub top: f32,
    /// Row height.
    pub height: f32,
    /// Text to display.
    pub label: String,
    /// Presentation of the row.
    pub style: RowStyle,
}
