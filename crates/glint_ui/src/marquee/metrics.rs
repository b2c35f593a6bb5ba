//! Overflow measurement.
//!
//! The host's layout surface reports how wide the content is versus how
//! much of it is visible. Everything else is derived from that pair.

use unicode_width::UnicodeWidthStr;

/// A layout reading for one text node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    /// Full width of the content, including the clipped part.
    pub scroll_width: f32,
    /// Width of the visible box.
    pub client_width: f32,
}

impl TextExtent {
    /// Creates an extent from scrollable and visible widths.
    #[must_use]
    pub const fn new(scroll_width: f32, client_width: f32) -> Self {
        Self {
            scroll_width,
            client_width,
        }
    }
}

/// The host's layout surface.
pub trait TextMeasure {
    /// Measures `text` as currently laid out.
    ///
    /// Returns `None` when there is no layout node (not yet laid out, or
    /// torn down mid-measurement).
    fn measure(&self, text: &str) -> Option<TextExtent>;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Option<TextExtent>,
{
    fn measure(&self, text: &str) -> Option<TextExtent> {
        self(text)
    }
}

/// Measures text on a fixed cell grid, like a terminal or a monospace font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Width of one cell in pixels.
    pub cell_width: f32,
    /// Width of the visible box, `None` until laid out.
    pub box_width: Option<f32>,
}

impl MonospaceMeasure {
    /// Default cell width (8px monospace).
    pub const DEFAULT_CELL_WIDTH: f32 = 8.0;

    /// Creates a measure for a box of `box_width` pixels.
    #[must_use]
    pub const fn new(cell_width: f32, box_width: f32) -> Self {
        Self {
            cell_width,
            box_width: Some(box_width),
        }
    }

    /// Returns the unclipped width of `text`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn content_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.cell_width
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            cell_width: Self::DEFAULT_CELL_WIDTH,
            box_width: None,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Option<TextExtent> {
        let client_width = self.box_width?;
        // A scroll width never reports less than the box it scrolls in.
        let scroll_width = self.content_width(text).max(client_width);
        Some(TextExtent::new(scroll_width, client_width))
    }
}

/// How clipped text ends at the box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowStyle {
    /// Cut off at the edge. Used when nothing overflows.
    Clip,
    /// Trailing ellipsis.
    #[default]
    Ellipsis,
}

impl OverflowStyle {
    /// Picks the style for a measured distance.
    #[must_use]
    pub fn for_distance(distance: f32) -> Self {
        if distance > 0.0 {
            Self::Ellipsis
        } else {
            Self::Clip
        }
    }
}

/// Derived overflow metrics for one marquee.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Overflow distance in pixels, `None` while unknown.
    pub distance: Option<f32>,
    /// True if no scrolling is needed.
    pub content_fits: bool,
    /// Edge treatment.
    pub overflow: OverflowStyle,
}

impl Metrics {
    /// Metrics before any measurement.
    pub const UNKNOWN: Self = Self {
        distance: None,
        content_fits: false,
        overflow: OverflowStyle::Ellipsis,
    };

    /// Derives metrics from a layout reading.
    #[must_use]
    pub fn from_extent(extent: TextExtent) -> Self {
        let distance = overflow_distance(extent);
        Self {
            distance: Some(distance),
            content_fits: distance <= 0.0,
            overflow: OverflowStyle::for_distance(distance),
        }
    }

    /// Returns true once a measurement has been taken.
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.distance.is_some()
    }
}

/// Pixels the content must travel to reveal its end, never negative.
#[must_use]
pub fn overflow_distance(extent: TextExtent) -> f32 {
    (extent.scroll_width - extent.client_width).max(0.0)
}
