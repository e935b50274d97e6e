use crate::config::WheelConfig;
use crate::theme::{Color, PaletteColor};
use crate::xy::Size;
use std::ops::Range;

/// The fixed highlight band drawn over the center slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Distance from the top of the viewport.
    pub top: f32,
    /// Always equal to the row height.
    pub height: f32,
    /// Width of the band.
    pub width: f32,
    /// Width of the top and bottom borders.
    pub border_width: f32,
    /// Color of the borders.
    pub color: Color,
}

/// Geometry of the picker: a clipping viewport, two spacers and the rows
/// between them.
///
/// The spacers let the first and last rows reach the highlight band. Row `i`
/// is centered in the band when the content offset is `i * item_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutShell {
    /// Size of the clipping viewport.
    pub viewport: Size,
    /// Height of each row.
    pub item_height: f32,
    /// Height of the leading and of the trailing spacer.
    pub spacer: f32,
    /// Number of data rows.
    pub len: usize,
    /// Highlight band overlay.
    pub highlight: Band,
    /// Viewport background.
    pub background: Color,
}

impl LayoutShell {
    /// Computes the layout for `len` rows.
    pub fn new(config: &WheelConfig, len: usize) -> Self {
        let viewport = config.get_viewport();
        let item_height = config.get_item_height();
        let spacer = (viewport.y - item_height) / 2.0;
        let theme = config.get_theme();

        LayoutShell {
            viewport,
            item_height,
            spacer,
            len,
            highlight: Band {
                top: spacer,
                height: item_height,
                width: config.get_highlight_width(),
                border_width: theme.highlight_border_width,
                color: theme[PaletteColor::Highlight],
            },
            background: theme[PaletteColor::Wrapper],
        }
    }

    /// Total height of the scrollable content, spacers included.
    pub fn content_height(&self) -> f32 {
        2.0 * self.spacer + self.len as f32 * self.item_height
    }

    /// Largest reachable content offset.
    pub fn max_offset(&self) -> f32 {
        self.len.saturating_sub(1) as f32 * self.item_height
    }

    /// Content offset that centers row `index` in the highlight band.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.item_height
    }

    /// Top of row `index`, in content coordinates.
    pub fn row_top(&self, index: usize) -> f32 {
        self.spacer + self.offset_for_index(index)
    }

    /// Rows at least partially visible at the given content offset.
    pub fn visible_rows(&self, offset: f32) -> Range<usize> {
        let h = self.item_height;
        let first = ((offset - self.spacer) / h).floor().max(0.0) as usize;
        let last = ((offset + self.viewport.y - self.spacer) / h).ceil().max(0.0) as usize;
        first.min(self.len)..last.min(self.len)
    }
}
