//! Picker configuration.
//!
//! A [`WheelConfig`] gathers everything that stays constant for the lifetime
//! of a picker: row height, viewport metrics, debounce window, platform
//! quirks and visual settings. Viewport metrics are given by the host; the
//! picker never looks up display dimensions itself.
//!
//! ## Loading from toml
//!
//! With the `toml` feature (enabled by default), a configuration can be read
//! from a toml document. Only the keys present override the defaults:
//!
//! ```toml
//! item_height = 60
//! viewport_width = 150
//! viewport_height = 180
//! selected_index = 1
//! debounce_ms = 10
//! platform = "ios"
//! emphasis = "falloff"
//!
//! [theme.colors]
//! highlight = "#333"
//! ```
//!
//! The result is validated before being returned.

use crate::surface::Platform;
use crate::theme::WheelTheme;
use crate::view::Emphasis;
use crate::with::With;
use crate::xy::Size;
use std::fmt;
#[cfg(feature = "toml")]
use std::fs::File;
use std::io;
#[cfg(feature = "toml")]
use std::io::Read;
#[cfg(feature = "toml")]
use std::path::Path;
use std::time::Duration;

/// Default row height.
pub const DEFAULT_ITEM_HEIGHT: f32 = 60.0;

/// Default viewport width.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 150.0;

/// Number of rows visible when no viewport height is given.
pub const DEFAULT_VISIBLE_ROWS: f32 = 5.0;

/// Default debounce window after a drag ends.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Constant settings of a picker.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    item_height: f32,
    viewport_width: f32,
    viewport_height: Option<f32>,
    highlight_width: Option<f32>,
    selected_index: usize,
    debounce: Duration,
    platform: Platform,
    emphasis: Emphasis,
    theme: WheelTheme,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        WheelConfig {
            item_height: DEFAULT_ITEM_HEIGHT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: None,
            highlight_width: None,
            selected_index: 0,
            debounce: DEFAULT_DEBOUNCE,
            platform: Platform::default(),
            emphasis: Emphasis::default(),
            theme: WheelTheme::default(),
        }
    }

    /// Sets the height of each row.
    pub fn set_item_height(&mut self, item_height: f32) {
        self.item_height = item_height;
    }

    /// Sets the height of each row.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn item_height(self, item_height: f32) -> Self {
        self.with(|c| c.set_item_height(item_height))
    }

    /// Sets the viewport dimensions.
    pub fn set_viewport<S: Into<Size>>(&mut self, viewport: S) {
        let viewport = viewport.into();
        self.viewport_width = viewport.x;
        self.viewport_height = Some(viewport.y);
    }

    /// Sets the viewport dimensions.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn viewport<S: Into<Size>>(self, viewport: S) -> Self {
        self.with(|c| c.set_viewport(viewport))
    }

    /// Sets the width of the highlight band.
    ///
    /// Defaults to the viewport width.
    pub fn set_highlight_width(&mut self, width: f32) {
        self.highlight_width = Some(width);
    }

    /// Sets the initially selected index.
    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    /// Sets the initially selected index.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn selected_index(self, index: usize) -> Self {
        self.with(|c| c.set_selected_index(index))
    }

    /// Sets how long to wait after a drag ends before settling.
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    /// Sets the platform quirks to account for.
    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    /// Sets the platform quirks to account for.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn platform(self, platform: Platform) -> Self {
        self.with(|c| c.set_platform(platform))
    }

    /// Sets the row emphasis policy.
    pub fn set_emphasis(&mut self, emphasis: Emphasis) {
        self.emphasis = emphasis;
    }

    /// Sets the visual theme.
    pub fn set_theme(&mut self, theme: WheelTheme) {
        self.theme = theme;
    }

    /// Returns a mutable access to the theme.
    pub fn theme_mut(&mut self) -> &mut WheelTheme {
        &mut self.theme
    }

    /// Height of each row.
    pub fn get_item_height(&self) -> f32 {
        self.item_height
    }

    /// Viewport dimensions, with the height defaulting to five rows.
    pub fn get_viewport(&self) -> Size {
        let height = self
            .viewport_height
            .unwrap_or(self.item_height * DEFAULT_VISIBLE_ROWS);
        Size::new(self.viewport_width, height)
    }

    /// Width of the highlight band.
    pub fn get_highlight_width(&self) -> f32 {
        self.highlight_width.unwrap_or(self.viewport_width)
    }

    /// Initially selected index, before clamping to the data source.
    pub fn get_selected_index(&self) -> usize {
        self.selected_index
    }

    /// Debounce window after a drag ends.
    pub fn get_debounce(&self) -> Duration {
        self.debounce
    }

    /// Platform quirks.
    pub fn get_platform(&self) -> Platform {
        self.platform
    }

    /// Row emphasis policy.
    pub fn get_emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Visual theme.
    pub fn get_theme(&self) -> &WheelTheme {
        &self.theme
    }

    /// Checks that the configuration describes a usable picker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let item_height = self.item_height;
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(item_height));
        }

        let viewport = self.get_viewport();
        if !viewport.is_positive() {
            return Err(ConfigError::InvalidViewport(viewport));
        }
        if viewport.y < item_height {
            return Err(ConfigError::ViewportTooShort {
                viewport_height: viewport.y,
                item_height,
            });
        }

        let highlight_width = self.get_highlight_width();
        if !highlight_width.is_finite() || highlight_width < 0.0 {
            return Err(ConfigError::InvalidHighlightWidth(highlight_width));
        }

        let border = self.theme.highlight_border_width;
        if !border.is_finite() || border < 0.0 {
            return Err(ConfigError::InvalidBorderWidth(border));
        }

        let font_size = self.theme.font_size;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(font_size));
        }

        Ok(())
    }

    /// Load values from an already parsed toml [`Table`], overwriting previous values.
    ///
    /// Unknown keys are ignored. Values of the wrong type are logged and skipped.
    ///
    /// [`Table`]: https://docs.rs/toml/latest/toml/type.Table.html
    #[cfg(feature = "toml")]
    pub fn load_toml(&mut self, table: &toml::value::Table) {
        use crate::theme::toml_number;

        if let Some(height) = table.get("item_height").and_then(toml_number) {
            self.item_height = height;
        }

        if let Some(width) = table.get("viewport_width").and_then(toml_number) {
            self.viewport_width = width;
        }

        if let Some(height) = table.get("viewport_height").and_then(toml_number) {
            self.viewport_height = Some(height);
        }

        if let Some(width) = table.get("highlight_width").and_then(toml_number) {
            self.highlight_width = Some(width);
        }

        match table.get("selected_index") {
            Some(&toml::Value::Integer(index)) if index >= 0 => {
                self.selected_index = index as usize;
            }
            Some(other) => log::warn!("Invalid selected_index: `{other}`."),
            None => (),
        }

        match table.get("debounce_ms") {
            Some(&toml::Value::Integer(ms)) if ms >= 0 => {
                self.debounce = Duration::from_millis(ms as u64);
            }
            Some(other) => log::warn!("Invalid debounce_ms: `{other}`."),
            None => (),
        }

        if let Some(toml::Value::String(platform)) = table.get("platform") {
            match platform.parse() {
                Ok(platform) => self.platform = platform,
                Err(()) => log::warn!("Unknown platform: `{platform}`."),
            }
        }

        if let Some(toml::Value::String(emphasis)) = table.get("emphasis") {
            match emphasis.parse() {
                Ok(emphasis) => self.emphasis = emphasis,
                Err(()) => log::warn!("Unknown emphasis: `{emphasis}`."),
            }
        }

        if let Some(toml::Value::Table(theme)) = table.get("theme") {
            self.theme.load_toml(theme);
        }
    }
}

/// A configuration that cannot produce a working picker.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Row height is not a positive finite number.
    InvalidItemHeight(f32),
    /// Viewport has a non-positive or non-finite dimension.
    InvalidViewport(Size),
    /// Viewport cannot show a single row.
    ViewportTooShort {
        /// Configured viewport height.
        viewport_height: f32,
        /// Configured row height.
        item_height: f32,
    },
    /// Highlight band width is negative or non-finite.
    InvalidHighlightWidth(f32),
    /// Highlight border width is negative or non-finite.
    InvalidBorderWidth(f32),
    /// Base font size is not a positive finite number.
    InvalidFontSize(f32),
    /// There is nothing to pick from.
    EmptyDataSource,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::InvalidItemHeight(h) => {
                write!(f, "item height must be a positive number, got {h}")
            }
            ConfigError::InvalidViewport(size) => write!(
                f,
                "viewport must have a positive size, got {}x{}",
                size.x, size.y
            ),
            ConfigError::ViewportTooShort {
                viewport_height,
                item_height,
            } => write!(
                f,
                "viewport height {viewport_height} is shorter than item height {item_height}"
            ),
            ConfigError::InvalidHighlightWidth(w) => {
                write!(f, "highlight width must not be negative, got {w}")
            }
            ConfigError::InvalidBorderWidth(w) => {
                write!(f, "highlight border width must not be negative, got {w}")
            }
            ConfigError::InvalidFontSize(s) => {
                write!(f, "font size must be a positive number, got {s}")
            }
            ConfigError::EmptyDataSource => write!(f, "data source is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Possible error returned when loading a configuration.
#[derive(Debug)]
pub enum Error {
    /// An error occurred when reading the file.
    Io(io::Error),

    #[cfg(feature = "toml")]
    /// An error occurred when parsing the toml content.
    Parse(toml::de::Error),

    /// The loaded configuration failed validation.
    Invalid(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "could not read configuration: {err}"),
            #[cfg(feature = "toml")]
            Error::Parse(err) => write!(f, "could not parse configuration: {err}"),
            Error::Invalid(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            #[cfg(feature = "toml")]
            Error::Parse(err) => Some(err),
            Error::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Invalid(err)
    }
}

/// Loads a configuration from file.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
pub fn load_config_file<P: AsRef<Path>>(filename: P) -> Result<WheelConfig, Error> {
    let content = {
        let mut content = String::new();
        let mut file = File::open(filename)?;
        file.read_to_string(&mut content)?;
        content
    };

    load_toml(&content)
}

/// Loads a configuration from a toml string.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
pub fn load_toml(content: &str) -> Result<WheelConfig, Error> {
    let table = toml::de::from_str(content)?;

    let mut config = WheelConfig::default();
    config.load_toml(&table);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WheelConfig::new();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.get_viewport(), Size::new(150.0, 300.0));
        assert_eq!(config.get_highlight_width(), 150.0);
        assert_eq!(config.get_debounce(), Duration::from_millis(50));
    }

    #[test]
    fn rejects_bad_item_height() {
        for h in [0.0, -30.0, f32::NAN, f32::INFINITY] {
            let config = WheelConfig::new().item_height(h).viewport((150.0, 180.0));
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidItemHeight(_))
            ));
        }
    }

    #[test]
    fn rejects_short_viewport() {
        let config = WheelConfig::new().item_height(60.0).viewport((150.0, 40.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ViewportTooShort {
                viewport_height: 40.0,
                item_height: 60.0,
            })
        );
    }

    #[test]
    fn rejects_bad_theme_values() {
        let mut config = WheelConfig::new();
        config.theme_mut().highlight_border_width = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBorderWidth(-1.0)));

        let mut config = WheelConfig::new();
        config.theme_mut().font_size = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFontSize(0.0)));
    }

    #[test]
    fn error_messages() {
        let err = ConfigError::ViewportTooShort {
            viewport_height: 40.0,
            item_height: 60.0,
        };
        assert_eq!(
            err.to_string(),
            "viewport height 40 is shorter than item height 60"
        );
        assert_eq!(
            Error::from(ConfigError::EmptyDataSource).to_string(),
            "invalid configuration: data source is empty"
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn load_from_toml() {
        let config = load_toml(
            r##"
            item_height = 30
            viewport_height = 150
            selected_index = 2
            debounce_ms = 10
            platform = "ios"
            emphasis = "binary"

            [theme]
            font_size = 18.5

            [theme.colors]
            wrapper = "#fafafa"
            "##,
        )
        .unwrap();

        assert_eq!(config.get_item_height(), 30.0);
        assert_eq!(config.get_viewport(), Size::new(150.0, 150.0));
        assert_eq!(config.get_selected_index(), 2);
        assert_eq!(config.get_debounce(), Duration::from_millis(10));
        assert_eq!(config.get_platform(), Platform::Ios);
        assert_eq!(config.get_emphasis(), Emphasis::Binary);
        assert_eq!(config.get_theme().font_size, 18.5);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn unknown_names_keep_defaults() {
        let config = load_toml(
            r##"
            platform = "symbian"
            emphasis = "bold"
            "##,
        )
        .unwrap();

        assert_eq!(config.get_platform(), Platform::Generic);
        assert_eq!(config.get_emphasis(), Emphasis::Falloff);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn load_toml_validates() {
        let err = load_toml("item_height = -4").unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid(ConfigError::InvalidItemHeight(_))
        ));

        let err = load_toml("item_height = ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn missing_file() {
        let err = load_config_file("/nonexistent/wheel.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
