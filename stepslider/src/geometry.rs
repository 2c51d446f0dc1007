//! Value ↔ coordinate mapping for the track.
//!
//! Everything here is a pure function of the configuration and the control bounds, so the
//! control can recompute its layout from scratch after every mutation.

use alloc::vec::Vec;

use crate::{LayoutDirection, Point, Rect, Size};

/// How far the first and last tick (and marker) are pulled toward the track center, so their
/// dots are not clipped by the rounded track ends.
pub const END_TICK_INSET: f64 = 5.0;

/// Number of gaps between markers. Markers are always laid out at 0, 1/4, 1/2, 3/4 and 1 of the
/// track, independently of the tick count.
pub const MARKER_SEGMENTS: usize = 4;

pub const MARKER_COUNT: usize = MARKER_SEGMENTS + 1;

/// Upper bound on the tick count. Every tick gets a point in the cached layout.
pub const MAX_TICK_COUNT: i64 = 1 << 16;

/// Number of ticks on the track.
///
/// Derived from the maximum only: the minimum does not participate. Saturates instead of
/// overflowing (`i64::MIN / -1`).
pub fn tick_count(maximum_value: i64, increment_value: i64) -> i64 {
    maximum_value.saturating_div(non_zero_increment(increment_value))
}

/// Number of gaps between ticks, in `1..MAX_TICK_COUNT`.
pub fn segments(tick_count: i64) -> u32 {
    tick_count.saturating_sub(1).clamp(1, MAX_TICK_COUNT - 1) as u32
}

pub fn non_zero_increment(increment_value: i64) -> i64 {
    if increment_value == 0 { 1 } else { increment_value }
}

/// The track spans the whole control width and is vertically centered.
pub fn track_rect(bounds: Size, thickness: f64) -> Rect {
    let width = bounds.width;
    Rect::new(
        (bounds.width - width) / 2.0,
        (bounds.height - thickness) / 2.0,
        width,
        thickness,
    )
}

/// Abscissa of `index` when the track is split into `segments` equal parts, with both ends nudged
/// inward by [`END_TICK_INSET`].
pub fn tick_abscissa(track: Rect, index: u32, segments: u32) -> f64 {
    let segments = segments.max(1);
    let ratio = f64::from(index) / f64::from(segments);
    let x = track.x + track.width * ratio;
    if index == 0 {
        x + END_TICK_INSET
    } else if index == segments {
        x - END_TICK_INSET
    } else {
        x
    }
}

/// Tick centers, left to right, on the horizontal line `center_y`.
pub fn tick_points(track: Rect, segments: u32, center_y: f64) -> Vec<Point> {
    (0..=segments.max(1))
        .map(|i| Point::new(tick_abscissa(track, i, segments), center_y))
        .collect()
}

/// Marker centers, left to right, on the horizontal line `center_y`.
pub fn marker_points(track: Rect, center_y: f64) -> [Point; MARKER_COUNT] {
    let mut out = [Point::default(); MARKER_COUNT];
    for (i, p) in out.iter_mut().enumerate() {
        *p = Point::new(
            tick_abscissa(track, i as u32, MARKER_SEGMENTS as u32),
            center_y,
        );
    }
    out
}

/// Normalized thumb position of `value`, in `0.0..=1.0`.
pub fn value_to_ratio(
    value: i64,
    minimum_value: i64,
    increment_value: i64,
    segments: u32,
    direction: LayoutDirection,
) -> f64 {
    let span = f64::from(segments.max(1)) * non_zero_increment(increment_value) as f64;
    let ratio = ((value as f64 - minimum_value as f64) / span).clamp(0.0, 1.0);
    direction.orient(ratio)
}

pub fn ratio_to_abscissa(track: Rect, ratio: f64) -> f64 {
    track.x + track.width * ratio
}

/// Nearest tick to `abscissa`. Positions outside the track are clamped to its ends.
pub fn abscissa_to_tick(
    track: Rect,
    abscissa: f64,
    segments: u32,
    direction: LayoutDirection,
) -> u32 {
    let left_most = track.min_x();
    let right_most = track.max_x();
    let span = right_most - left_most;
    if span <= 0.0 {
        return 0;
    }
    let clamped = abscissa.clamp(left_most, right_most);
    let ratio = direction.orient((clamped - left_most) / span);
    round_half_up(f64::from(segments) * ratio).min(segments)
}

pub fn tick_to_value(tick: u32, minimum_value: i64, increment_value: i64) -> i64 {
    minimum_value.saturating_add(i64::from(tick).saturating_mul(non_zero_increment(increment_value)))
}

/// The thumb grows by its shadow radius and offset on each side when a shadow is set.
pub fn thumb_size_including_shadow(thumb: Size, shadow_radius: f64, shadow_offset: Size) -> Size {
    if shadow_radius == 0.0 {
        return thumb;
    }
    Size::new(
        thumb.width + shadow_radius * 2.0 + shadow_offset.width * 2.0,
        thumb.height + shadow_radius * 2.0 + shadow_offset.height * 2.0,
    )
}

// `x` is never negative here; `f64::round` is unavailable without std.
fn round_half_up(x: f64) -> u32 {
    let x = x.max(0.0);
    let whole = x as u32;
    if x - f64::from(whole) >= 0.5 {
        whole.saturating_add(1)
    } else {
        whole
    }
}

/// Cached result of a layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackLayout {
    pub bounds: Size,
    pub track: Rect,
    pub segments: u32,
    pub ticks: Vec<Point>,
    pub markers: [Point; MARKER_COUNT],
}

impl TrackLayout {
    pub fn compute(bounds: Size, track_thickness: f64, segments: u32) -> Self {
        let track = track_rect(bounds, track_thickness);
        let center_y = bounds.height / 2.0;
        Self {
            bounds,
            track,
            segments,
            ticks: tick_points(track, segments, center_y),
            markers: marker_points(track, center_y),
        }
    }

    /// Nearest tick to `abscissa` on this layout.
    pub fn tick_at(&self, abscissa: f64, direction: LayoutDirection) -> u32 {
        abscissa_to_tick(self.track, abscissa, self.segments, direction)
    }

    /// Clamps `abscissa` to the track ends.
    pub fn clamp_abscissa(&self, abscissa: f64) -> f64 {
        abscissa.clamp(self.track.min_x(), self.track.max_x().max(self.track.min_x()))
    }
}
