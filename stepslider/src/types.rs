#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamps both axes to at least `min`.
    pub fn at_least(self, min: f64) -> Self {
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

/// An axis-aligned rectangle in the control's coordinate space (origin at the top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of `size` centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Half-open containment: the max edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top and bottom.
    ///
    /// Negative insets grow it.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - dx * 2.0,
            self.height - dy * 2.0,
        )
    }
}

/// Horizontal layout direction. Under `RightToLeft` the minimum value sits at the right end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// Reflects a normalized ratio for this direction.
    pub fn orient(self, ratio: f64) -> f64 {
        match self {
            Self::LeftToRight => ratio,
            Self::RightToLeft => 1.0 - ratio,
        }
    }
}

/// A straight RGBA color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::white(0.0);
    pub const WHITE: Self = Self::white(1.0);
    pub const GRAY: Self = Self::white(0.5);
    pub const LIGHT_GRAY: Self = Self::white(2.0 / 3.0);
    pub const SYSTEM_BLUE: Self = Self::rgba(0.0, 122.0 / 255.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque gray of the given brightness.
    pub const fn white(white: f32) -> Self {
        Self::rgba(white, white, white, 1.0)
    }
}

/// A single touch, in the control's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    pub location: Point,
    /// Number of taps in quick succession (2 for a double tap).
    pub tap_count: u32,
}

impl Touch {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            location: Point::new(x, y),
            tap_count: 1,
        }
    }

    pub fn with_tap_count(mut self, tap_count: u32) -> Self {
        self.tap_count = tap_count;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    #[default]
    Idle,
    Dragging,
}
