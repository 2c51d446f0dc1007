//! A headless discrete-step slider control.
//!
//! For host-side wiring (a text field bound to the slider value), see the `stepslider-host`
//! crate.
//!
//! The control snaps a draggable thumb to evenly spaced ticks along a track, with five fixed
//! markers and labels underneath. This crate owns the value model, the tick geometry, touch
//! tracking and the assembly of draw commands.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - the control bounds
//! - touch locations (began/moved/ended/cancelled)
//! - a renderer for [`DrawCommand`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod draw;
mod error;
mod events;
pub mod geometry;
mod options;
mod slider;
mod state;
mod types;


pub use draw::{DrawCommand, RoundedRect, Shadow, THUMB_SHADOW_OPACITY};
pub use error::ConfigError;
pub use events::{ControlEvent, ControlEventArgs, Listener, ListenerId};
pub use geometry::TrackLayout;
pub use options::{
    DEFAULT_INCREMENT_VALUE, DEFAULT_LABEL_FONT_SIZE, DEFAULT_LABEL_OFFSET, DEFAULT_MARKER_LABELS,
    DEFAULT_MARKER_SIZE, DEFAULT_MAXIMUM_TRACK_TINT_COLOR, DEFAULT_MAXIMUM_VALUE,
    DEFAULT_MINIMUM_VALUE, DEFAULT_THUMB_SIZE, DEFAULT_TRACK_THICKNESS, DEFAULT_VALUE,
    StepSliderOptions,
};
pub use slider::{
    OnNeedsDisplayCallback, SelectionFeedback, SetSliderValue, StepSlider, THUMB_ANIMATION_MS,
};
pub use state::SliderState;
pub use types::{Color, LayoutDirection, Point, Rect, Size, Touch, TouchPhase};
