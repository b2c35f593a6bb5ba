//! Layout primitives for widget placement.

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2.0).max(0.0),
            (self.height - amount * 2.0).max(0.0),
        )
    }
}

/// Left-to-right row of columns sharing one height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// Gap between columns.
    pub gap: f32,
    /// Padding around the row.
    pub padding: f32,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            gap: 4.0,
            padding: 0.0,
        }
    }
}

impl RowLayout {
    /// Sets the gap between columns.
    #[must_use]
    pub const fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets padding around the row.
    #[must_use]
    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Places columns of the given widths inside `bounds`.
    ///
    /// Columns stretch to the row height. The last column is cut at the
    /// row's right edge.
    #[must_use]
    pub fn arrange(&self, bounds: Rect, widths: &[f32]) -> Vec<Rect> {
        let content = bounds.shrink(self.padding);
        let mut x = content.x;

        widths
            .iter()
            .map(|&w| {
                let width = w.min((content.right() - x).max(0.0));
                let rect = Rect::new(x, content.y, width, content.height);
                x += w + self.gap;
                rect
            })
            .collect()
    }
}
