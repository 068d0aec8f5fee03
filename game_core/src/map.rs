use glam::Vec2;

/// Axis-aligned bounding box in window coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from a center point and half extents
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            left: center.x - half.x,
            top: center.y - half.y,
            right: center.x + half.x,
            bottom: center.y + half.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right <= other.left
            || other.right <= self.left
            || self.bottom <= other.top
            || other.bottom <= self.top)
    }
}

/// Playfield extent, tracking the window client area
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Clamp a center Y so that `half_height` stays inside the map
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        if self.height <= half_height * 2.0 {
            return self.height / 2.0;
        }
        y.clamp(half_height, self.height - half_height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
