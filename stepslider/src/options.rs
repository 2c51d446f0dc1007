use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry;
use crate::{Color, ConfigError, LayoutDirection, Size};

pub const DEFAULT_MINIMUM_VALUE: i64 = -5;
pub const DEFAULT_MAXIMUM_VALUE: i64 = 240;
pub const DEFAULT_INCREMENT_VALUE: i64 = 1;
pub const DEFAULT_VALUE: i64 = 0;
pub const DEFAULT_MARKER_LABELS: [&str; 5] = ["5 min", "60", "120", "180", "240"];
pub const DEFAULT_TRACK_THICKNESS: f64 = 8.0;
pub const DEFAULT_MARKER_SIZE: Size = Size::new(4.0, 4.0);
pub const DEFAULT_THUMB_SIZE: Size = Size::new(30.0, 30.0);
pub const DEFAULT_MAXIMUM_TRACK_TINT_COLOR: Color = Color::white(0.71);
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 13.0;
pub const DEFAULT_LABEL_OFFSET: f64 = 30.0;

/// Configuration for [`crate::StepSlider`].
///
/// Plain data: cheap to clone, comparable, and (with `feature = "serde"`) serializable, so hosts
/// can load slider setups from files. Use [`StepSliderOptions::default`] for the stock setup
/// (-5 to 240 in steps of 1, five labels).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepSliderOptions {
    pub minimum_value: i64,
    pub maximum_value: i64,
    /// Value delta between adjacent ticks. Zero is treated as 1.
    pub increment_value: i64,

    /// Labels drawn under the five markers, left to right. Extra labels are ignored.
    pub marker_labels: Vec<String>,

    pub layout_direction: LayoutDirection,

    pub track_thickness: f64,
    /// Fallback color for the leading track part when `minimum_track_tint_color` is unset.
    pub tint_color: Color,
    pub minimum_track_tint_color: Option<Color>,
    pub maximum_track_tint_color: Color,

    pub marker_size: Size,
    /// Overrides both leading and trailing marker colors.
    pub marker_color: Option<Color>,

    pub show_ticks: bool,
    pub tick_color: Color,

    pub thumb_size: Size,
    pub thumb_tint_color: Option<Color>,
    /// A zero radius disables the shadow (and the offset is ignored).
    pub thumb_shadow_radius: f64,
    pub thumb_shadow_offset: Size,

    pub label_font_size: f64,
    pub label_color: Color,
    /// Vertical distance between a marker center and its label center.
    pub label_offset: f64,
}

impl Default for StepSliderOptions {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM_VALUE,
            maximum_value: DEFAULT_MAXIMUM_VALUE,
            increment_value: DEFAULT_INCREMENT_VALUE,
            marker_labels: DEFAULT_MARKER_LABELS.iter().map(|s| String::from(*s)).collect(),
            layout_direction: LayoutDirection::LeftToRight,
            track_thickness: DEFAULT_TRACK_THICKNESS,
            tint_color: Color::SYSTEM_BLUE,
            minimum_track_tint_color: None,
            maximum_track_tint_color: DEFAULT_MAXIMUM_TRACK_TINT_COLOR,
            marker_size: DEFAULT_MARKER_SIZE,
            marker_color: None,
            show_ticks: true,
            tick_color: Color::WHITE,
            thumb_size: DEFAULT_THUMB_SIZE,
            thumb_tint_color: None,
            thumb_shadow_radius: 0.0,
            thumb_shadow_offset: Size::ZERO,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            label_color: Color::GRAY,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

impl StepSliderOptions {
    pub fn new(minimum_value: i64, maximum_value: i64, increment_value: i64) -> Self {
        Self {
            minimum_value,
            maximum_value,
            increment_value,
            ..Self::default()
        }
    }

    pub fn tick_count(&self) -> i64 {
        geometry::tick_count(self.maximum_value, self.increment_value)
    }

    pub fn segments(&self) -> u32 {
        geometry::segments(self.tick_count())
    }

    /// Checks the tick count bounds (`2..=MAX_TICK_COUNT`) without panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick_count = self.tick_count();
        if tick_count <= 1 {
            return Err(ConfigError::TooFewTicks {
                tick_count,
                maximum_value: self.maximum_value,
                increment_value: self.increment_value,
            });
        }
        if tick_count > geometry::MAX_TICK_COUNT {
            return Err(ConfigError::TooManyTicks {
                tick_count,
                limit: geometry::MAX_TICK_COUNT,
            });
        }
        Ok(())
    }

    /// Applies the self-healing rules: zero increment becomes 1, sizes are clamped.
    pub fn sanitized(mut self) -> Self {
        self.increment_value = geometry::non_zero_increment(self.increment_value);
        self.track_thickness = self.track_thickness.max(0.0);
        self.marker_size = self.marker_size.at_least(0.0);
        self.thumb_size = self.thumb_size.at_least(1.0);
        self
    }

    pub fn with_range(mut self, minimum_value: i64, maximum_value: i64) -> Self {
        self.minimum_value = minimum_value;
        self.maximum_value = maximum_value;
        self
    }

    pub fn with_increment(mut self, increment_value: i64) -> Self {
        self.increment_value = increment_value;
        self
    }

    pub fn with_marker_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn with_track_thickness(mut self, track_thickness: f64) -> Self {
        self.track_thickness = track_thickness;
        self
    }

    pub fn with_tint_color(mut self, tint_color: Color) -> Self {
        self.tint_color = tint_color;
        self
    }

    pub fn with_track_tint_colors(mut self, minimum: Option<Color>, maximum: Color) -> Self {
        self.minimum_track_tint_color = minimum;
        self.maximum_track_tint_color = maximum;
        self
    }

    pub fn with_marker(mut self, size: Size, color: Option<Color>) -> Self {
        self.marker_size = size;
        self.marker_color = color;
        self
    }

    pub fn with_ticks(mut self, show_ticks: bool, tick_color: Color) -> Self {
        self.show_ticks = show_ticks;
        self.tick_color = tick_color;
        self
    }

    pub fn with_thumb(mut self, size: Size, tint_color: Option<Color>) -> Self {
        self.thumb_size = size;
        self.thumb_tint_color = tint_color;
        self
    }

    pub fn with_thumb_shadow(mut self, radius: f64, offset: Size) -> Self {
        self.thumb_shadow_radius = radius;
        self.thumb_shadow_offset = offset;
        self
    }

    pub fn with_label_style(mut self, font_size: f64, color: Color, offset: f64) -> Self {
        self.label_font_size = font_size;
        self.label_color = color;
        self.label_offset = offset;
        self
    }
}
