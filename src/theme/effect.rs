use enumset::{EnumSet, EnumSetType};
use std::str::FromStr;

/// A set of text effects applied to a row label.
pub type Effects = EnumSet<Effect>;

/// Text effect on a row label.
#[allow(clippy::derived_hash_with_manual_eq)] // We do derive it through EnumSetType
#[derive(EnumSetType, Debug, Hash)]
pub enum Effect {
    /// Heavier weight.
    Bold,

    /// Slanted glyphs.
    Italic,

    /// Line under the label.
    Underline,

    /// Faded text, on top of the row opacity.
    Dim,
}

impl FromStr for Effect {
    type Err = super::NoSuchColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Bold" | "bold" => Effect::Bold,
            "Italic" | "italic" => Effect::Italic,
            "Underline" | "underline" => Effect::Underline,
            "Dim" | "dim" => Effect::Dim,
            _ => return Err(super::NoSuchColor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, Effects};

    #[test]
    fn parse_effects() {
        assert_eq!("bold".parse::<Effect>().ok(), Some(Effect::Bold));
        assert!("blink".parse::<Effect>().is_err());

        let set: Effects = Effect::Bold | Effect::Underline;
        assert!(set.contains(Effect::Bold));
        assert!(!set.contains(Effect::Dim));
    }
}
