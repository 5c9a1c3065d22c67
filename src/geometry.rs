//! World-space rectangle type
//!
//! All simulation geometry lives in world coordinates (pixels, y grows downward)
//! and uses `f32` so sub-pixel gravity steps accumulate instead of truncating.
//! Rendering converts to integer screen rectangles at the last moment.

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Moves the rectangle so its right edge sits at `right`.
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    /// Moves the rectangle so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns a copy shifted left by `offset` (camera space).
    pub fn offset_x(&self, offset: f32) -> Rect {
        Rect::new(self.x - offset, self.y, self.width, self.height)
    }

    /// True when the two rectangles overlap with positive area.
    ///
    /// Edges that merely touch do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        let x_overlap = self.left() < other.right() && self.right() > other.left();
        let y_overlap = self.top() < other.bottom() && self.bottom() > other.top();

        x_overlap && y_overlap
    }

    /// True when the horizontal extents overlap strictly.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}
