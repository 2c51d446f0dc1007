use alloc::string::String;

use crate::geometry::{self, TrackLayout};
use crate::{Color, Point, Rect, Size, StepSliderOptions};

/// Opacity of the thumb shadow when `thumb_shadow_radius` is non-zero.
pub const THUMB_SHADOW_OPACITY: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f64,
}

impl RoundedRect {
    /// A rect whose corner radius is half its height (a pill, or a circle when square).
    pub fn capsule(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: rect.height / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub radius: f64,
    pub offset: Size,
    pub color: Color,
    pub opacity: f32,
}

/// A single backend-neutral drawing instruction. Commands are emitted back to front.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// A filled shape, optionally clipped to another rounded rect.
    Fill {
        shape: RoundedRect,
        color: Color,
        clip: Option<RoundedRect>,
    },
    Thumb {
        shape: RoundedRect,
        color: Color,
        shadow: Option<Shadow>,
    },
    /// Text centered on `center`. Measuring and font selection are up to the renderer.
    Label {
        text: String,
        center: Point,
        font_size: f64,
        color: Color,
    },
}

pub(crate) struct DrawInput<'a> {
    pub options: &'a StepSliderOptions,
    pub layout: &'a TrackLayout,
    pub thumb_abscissa: f64,
    pub value: i64,
}

pub(crate) fn for_each_command(input: &DrawInput<'_>, mut f: impl FnMut(DrawCommand)) {
    draw_track(input, &mut f);
    if input.options.show_ticks {
        let color = Some(input.options.tick_color);
        draw_dots(input, input.layout.ticks.iter().copied(), color, color, &mut f);
    }
    draw_markers(input, &mut f);
    draw_thumb(input, &mut f);
    draw_labels(input, &mut f);
}

fn draw_track(input: &DrawInput<'_>, f: &mut impl FnMut(DrawCommand)) {
    let options = input.options;
    let track = input.layout.track;
    let clip = RoundedRect::capsule(track);

    let left_width = (input.thumb_abscissa - track.min_x()).clamp(0.0, track.width.max(0.0));
    let left = Rect::new(track.x, track.y, left_width, track.height);
    let right = Rect::new(
        left.max_x(),
        track.y,
        track.width - left_width,
        track.height,
    );

    let leading = options.minimum_track_tint_color.unwrap_or(options.tint_color);
    let trailing = options.maximum_track_tint_color;
    let (left_color, right_color) = if options.layout_direction.is_right_to_left() {
        (trailing, leading)
    } else {
        (leading, trailing)
    };

    for (rect, color) in [(left, left_color), (right, right_color)] {
        f(DrawCommand::Fill {
            shape: RoundedRect {
                rect,
                corner_radius: 0.0,
            },
            color,
            clip: Some(clip),
        });
    }
}

// Trailing markers span the whole track underneath the leading ones. Under left-to-right an
// uncolored leading marker shows the trailing color; under right-to-left it is not drawn.
fn draw_markers(input: &DrawInput<'_>, f: &mut impl FnMut(DrawCommand)) {
    let options = input.options;
    let trailing = options
        .marker_color
        .unwrap_or(options.maximum_track_tint_color);
    let mut leading = options.marker_color.or(options.minimum_track_tint_color);
    if !options.layout_direction.is_right_to_left() {
        leading = leading.or(Some(trailing));
    }
    draw_dots(
        input,
        input.layout.markers.iter().copied(),
        leading,
        Some(trailing),
        f,
    );
}

// Dots on the thumb's leading side take `leading`, the rest `trailing`; a `None` color skips the
// dot.
fn draw_dots(
    input: &DrawInput<'_>,
    points: impl Iterator<Item = Point>,
    leading: Option<Color>,
    trailing: Option<Color>,
    f: &mut impl FnMut(DrawCommand),
) {
    let size = input.options.marker_size;
    let rtl = input.options.layout_direction.is_right_to_left();
    for p in points {
        let is_leading = if rtl {
            p.x >= input.thumb_abscissa
        } else {
            p.x <= input.thumb_abscissa
        };
        let color = if is_leading { leading } else { trailing };
        let Some(color) = color else {
            continue;
        };
        f(DrawCommand::Fill {
            shape: RoundedRect::capsule(Rect::centered(p, size)),
            color,
            clip: None,
        });
    }
}

fn draw_thumb(input: &DrawInput<'_>, f: &mut impl FnMut(DrawCommand)) {
    let options = input.options;
    // Below the range the thumb is hidden.
    if input.value < options.minimum_value {
        return;
    }

    let radius = options.thumb_shadow_radius;
    let offset = options.thumb_shadow_offset;
    let size = geometry::thumb_size_including_shadow(options.thumb_size, radius, offset);
    let bounds = input.layout.bounds;
    let outer = Rect::new(
        input.thumb_abscissa - size.width / 2.0,
        (bounds.height - size.height) / 2.0,
        size.width,
        size.height,
    );

    let (rect, shadow) = if radius != 0.0 {
        (
            outer.inset_by(radius + offset.width, radius + offset.height),
            Some(Shadow {
                radius,
                offset,
                color: Color::BLACK,
                opacity: THUMB_SHADOW_OPACITY,
            }),
        )
    } else {
        (outer, None)
    };

    f(DrawCommand::Thumb {
        shape: RoundedRect {
            rect,
            corner_radius: rect.width / 2.0,
        },
        color: options.thumb_tint_color.unwrap_or(Color::LIGHT_GRAY),
        shadow,
    });
}

fn draw_labels(input: &DrawInput<'_>, f: &mut impl FnMut(DrawCommand)) {
    let options = input.options;
    for (text, marker) in options.marker_labels.iter().zip(input.layout.markers.iter()) {
        f(DrawCommand::Label {
            text: text.clone(),
            center: Point::new(marker.x, marker.y + options.label_offset),
            font_size: options.label_font_size,
            color: options.label_color,
        });
    }
}
