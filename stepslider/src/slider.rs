use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::draw::{self, DrawCommand, DrawInput};
use crate::events::Listeners;
use crate::geometry::{self, TrackLayout};
use crate::{
    Color, ConfigError, ControlEvent, ControlEventArgs, LayoutDirection, ListenerId, Point, Rect,
    SliderState, Size, StepSliderOptions, Touch, TouchPhase,
};

/// Thumb animation hint for touch-down and pinned values.
pub const THUMB_ANIMATION_MS: u64 = 100;

/// A callback fired when the control needs to be redrawn.
pub type OnNeedsDisplayCallback = Box<dyn Fn(&StepSlider)>;

/// A callback fired once per touch-down, meant for selection haptics.
pub type SelectionFeedback = Box<dyn FnMut()>;

/// Host → control half of the value synchronization.
pub trait SetSliderValue {
    fn set_slider_value(&mut self, value: i64);
}

/// A headless discrete-step slider.
///
/// The control holds no UI objects:
/// - the host reports its bounds (`set_bounds`) and forwards touches (`touches_*`);
/// - the control keeps the value, the tick geometry and the thumb position up to date;
/// - rendering is exposed as a list of backend-neutral [`DrawCommand`]s.
///
/// Every mutation recomputes the layout synchronously and requests a redraw (see
/// [`StepSlider::set_on_needs_display`] and [`StepSlider::take_needs_display`]).
///
/// # Panics
///
/// Layout asserts the two-tick minimum (`maximum_value / increment_value > 1`). Use
/// [`StepSlider::try_new`] / [`StepSlider::try_set_options`] to validate untrusted configuration.
pub struct StepSlider {
    options: StepSliderOptions,
    bounds: Size,
    layout: TrackLayout,

    value: i64,
    thumb_abscissa: f64,
    phase: TouchPhase,
    touched_inside: bool,
    thumb_animation_ms: u64,

    needs_display: bool,
    notify_depth: usize,
    notify_pending: bool,

    listeners: Listeners,
    on_needs_display: Option<OnNeedsDisplayCallback>,
    selection_feedback: Option<SelectionFeedback>,
}

impl Default for StepSlider {
    fn default() -> Self {
        Self::new(StepSliderOptions::default())
    }
}

impl StepSlider {
    /// Creates a control with zero bounds and the default value (0).
    pub fn new(options: StepSliderOptions) -> Self {
        let options = options.sanitized();
        sdebug!(
            minimum = options.minimum_value,
            maximum = options.maximum_value,
            increment = options.increment_value,
            "StepSlider::new"
        );
        let mut s = Self {
            options,
            bounds: Size::ZERO,
            layout: TrackLayout::default(),
            value: crate::options::DEFAULT_VALUE,
            thumb_abscissa: 0.0,
            phase: TouchPhase::Idle,
            touched_inside: false,
            thumb_animation_ms: 0,
            needs_display: false,
            notify_depth: 0,
            notify_pending: false,
            listeners: Listeners::default(),
            on_needs_display: None,
            selection_feedback: None,
        };
        s.layout_track();
        s
    }

    pub fn try_new(options: StepSliderOptions) -> Result<Self, ConfigError> {
        options.clone().sanitized().validate()?;
        Ok(Self::new(options))
    }

    pub fn with_bounds(mut self, bounds: Size) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Sets the initial value without notifying listeners.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self.layout_track();
        self
    }

    pub fn options(&self) -> &StepSliderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StepSliderOptions) {
        self.options = options.sanitized();
        strace!(
            minimum = self.options.minimum_value,
            maximum = self.options.maximum_value,
            increment = self.options.increment_value,
            "StepSlider::set_options"
        );
        self.layout_track();
    }

    /// Like `set_options`, but rejects a configuration with fewer than two or more than
    /// [`geometry::MAX_TICK_COUNT`] ticks and leaves the control untouched.
    pub fn try_set_options(&mut self, options: StepSliderOptions) -> Result<(), ConfigError> {
        let options = options.sanitized();
        if let Err(err) = options.validate() {
            swarn!(%err, "StepSlider::try_set_options rejected");
            return Err(err);
        }
        self.set_options(options);
        Ok(())
    }

    /// Clones the current options, applies `f`, then lays out once.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StepSliderOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.layout_track();
    }

    pub fn minimum_value(&self) -> i64 {
        self.options.minimum_value
    }

    pub fn set_minimum_value(&mut self, minimum_value: i64) {
        self.options.minimum_value = minimum_value;
        self.layout_track();
    }

    pub fn maximum_value(&self) -> i64 {
        self.options.maximum_value
    }

    pub fn set_maximum_value(&mut self, maximum_value: i64) {
        self.options.maximum_value = maximum_value;
        self.layout_track();
    }

    pub fn increment_value(&self) -> i64 {
        self.options.increment_value
    }

    /// Zero is coerced to 1.
    pub fn set_increment_value(&mut self, increment_value: i64) {
        self.options.increment_value = geometry::non_zero_increment(increment_value);
        self.layout_track();
    }

    pub fn marker_labels(&self) -> &[String] {
        &self.options.marker_labels
    }

    pub fn set_marker_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.marker_labels = labels.into_iter().map(Into::into).collect();
        self.layout_track();
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.options.layout_direction
    }

    pub fn set_track_thickness(&mut self, track_thickness: f64) {
        self.options.track_thickness = track_thickness.max(0.0);
        self.layout_track();
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.options.tint_color = color;
        self.layout_track();
    }

    pub fn set_minimum_track_tint_color(&mut self, color: Option<Color>) {
        self.options.minimum_track_tint_color = color;
        self.layout_track();
    }

    pub fn set_maximum_track_tint_color(&mut self, color: Color) {
        self.options.maximum_track_tint_color = color;
        self.layout_track();
    }

    pub fn set_marker_size(&mut self, size: Size) {
        self.options.marker_size = size.at_least(0.0);
        self.layout_track();
    }

    pub fn set_marker_color(&mut self, color: Option<Color>) {
        self.options.marker_color = color;
        self.layout_track();
    }

    pub fn set_ticks(&mut self, show_ticks: bool, tick_color: Color) {
        self.options.show_ticks = show_ticks;
        self.options.tick_color = tick_color;
        self.layout_track();
    }

    pub fn set_thumb_size(&mut self, size: Size) {
        self.options.thumb_size = size.at_least(1.0);
        self.layout_track();
    }

    pub fn set_thumb_tint_color(&mut self, color: Option<Color>) {
        self.options.thumb_tint_color = color;
        self.layout_track();
    }

    pub fn set_thumb_shadow_radius(&mut self, radius: f64) {
        self.options.thumb_shadow_radius = radius;
        self.layout_track();
    }

    pub fn set_thumb_shadow_offset(&mut self, offset: Size) {
        self.options.thumb_shadow_offset = offset;
        self.layout_track();
    }

    pub fn set_label_style(&mut self, font_size: f64, color: Color, offset: f64) {
        self.options.label_font_size = font_size;
        self.options.label_color = color;
        self.options.label_offset = offset;
        self.layout_track();
    }

    pub fn tick_count(&self) -> i64 {
        self.options.tick_count()
    }

    pub fn segments(&self) -> u32 {
        self.layout.segments
    }

    /// Distance between two adjacent ticks (ignoring the end nudge).
    pub fn ticks_distance(&self) -> f64 {
        self.layout.track.width / f64::from(self.layout.segments.max(1))
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    pub fn track_rect(&self) -> Rect {
        self.layout.track
    }

    pub fn tick_points(&self) -> &[Point] {
        &self.layout.ticks
    }

    pub fn marker_points(&self) -> &[Point] {
        &self.layout.markers
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Pins the value (bypassing touch tracking), re-lays the thumb and emits one
    /// `ValueChanged`.
    ///
    /// Values below the minimum are kept as-is and hide the thumb.
    pub fn set_value(&mut self, value: i64) {
        strace!(value, "StepSlider::set_value");
        self.thumb_animation_ms = THUMB_ANIMATION_MS;
        self.value = value;
        self.layout_thumb();
        self.set_needs_display();
        self.emit(ControlEvent::ValueChanged, None);
    }

    pub fn thumb_abscissa(&self) -> f64 {
        self.thumb_abscissa
    }

    pub fn is_thumb_visible(&self) -> bool {
        self.value >= self.options.minimum_value
    }

    /// Suggested duration for animating the thumb to its current position.
    pub fn thumb_animation_ms(&self) -> u64 {
        self.thumb_animation_ms
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == TouchPhase::Dragging
    }

    pub fn is_touched_inside(&self) -> bool {
        self.touched_inside
    }

    /// Abscissa the thumb rests at for `value`.
    pub fn abscissa_for_value(&self, value: i64) -> f64 {
        let ratio = geometry::value_to_ratio(
            value,
            self.options.minimum_value,
            self.options.increment_value,
            self.layout.segments,
            self.options.layout_direction,
        );
        geometry::ratio_to_abscissa(self.layout.track, ratio)
    }

    /// Value of the tick nearest to `abscissa`.
    pub fn value_for_abscissa(&self, abscissa: f64) -> i64 {
        let tick = self.layout.tick_at(abscissa, self.options.layout_direction);
        geometry::tick_to_value(
            tick,
            self.options.minimum_value,
            self.options.increment_value,
        )
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> SliderState {
        SliderState {
            value: self.value,
            thumb_abscissa: self.thumb_abscissa,
            phase: self.phase,
            touched_inside: self.touched_inside,
        }
    }

    /// Restores a previously captured snapshot without notifying listeners.
    ///
    /// A dragging snapshot keeps its (clamped) continuous thumb position; otherwise the thumb is
    /// recomputed from the value.
    pub fn restore_state(&mut self, state: SliderState) {
        self.value = state.value;
        self.phase = state.phase;
        self.touched_inside = state.touched_inside;
        if state.is_dragging() {
            self.thumb_abscissa = self.layout.clamp_abscissa(state.thumb_abscissa);
        } else {
            self.layout_thumb();
        }
        self.set_needs_display();
    }

    pub fn add_listener(
        &mut self,
        event: ControlEvent,
        f: impl FnMut(&ControlEventArgs) + 'static,
    ) -> ListenerId {
        self.listeners.add(alloc::vec![event], Box::new(f))
    }

    pub fn add_listener_for(
        &mut self,
        events: impl IntoIterator<Item = ControlEvent>,
        f: impl FnMut(&ControlEventArgs) + 'static,
    ) -> ListenerId {
        let events: Vec<ControlEvent> = events.into_iter().collect();
        self.listeners.add(events, Box::new(f))
    }

    /// Control → host half of the value synchronization: `f` receives the value on every
    /// `ValueChanged`.
    pub fn on_value_changed(&mut self, mut f: impl FnMut(i64) + 'static) -> ListenerId {
        self.add_listener(ControlEvent::ValueChanged, move |args| f(args.value))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_on_needs_display(&mut self, f: Option<impl Fn(&StepSlider) + 'static>) {
        self.on_needs_display = f.map(|f| Box::new(f) as _);
    }

    pub fn set_selection_feedback(&mut self, f: Option<impl FnMut() + 'static>) {
        self.selection_feedback = f.map(|f| Box::new(f) as _);
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Returns whether a redraw was requested since the last call, and clears the flag.
    pub fn take_needs_display(&mut self) -> bool {
        core::mem::replace(&mut self.needs_display, false)
    }

    /// Batches multiple updates into a single `on_needs_display` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::replace(&mut self.notify_pending, false) {
            self.notify_now();
        }
    }

    /// Iterates the draw commands for the current configuration and state, back to front.
    pub fn for_each_draw_command(&self, f: impl FnMut(DrawCommand)) {
        draw::for_each_command(
            &DrawInput {
                options: &self.options,
                layout: &self.layout,
                thumb_abscissa: self.thumb_abscissa,
                value: self.value,
            },
            f,
        );
    }

    /// Collects the draw commands. Pure: the same configuration and state give the same list.
    pub fn draw(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        self.for_each_draw_command(|cmd| out.push(cmd));
        out
    }

    /// First touch of the sequence: starts dragging and moves the thumb under the finger.
    pub fn touches_began(&mut self, touches: &[Touch]) {
        let touch = touches.first().copied();
        strace!(?touch, "touches_began");
        self.phase = TouchPhase::Dragging;
        self.touched_inside = true;

        let location = touch.map(|t| t.location);
        if let Some(touch) = touch {
            self.move_thumb_to(touch.location.x, THUMB_ANIMATION_MS);
            if let Some(feedback) = self.selection_feedback.as_mut() {
                feedback();
            }
        }

        self.emit(ControlEvent::ValueChanged, location);
        self.emit(ControlEvent::TouchDown, location);
        if touch.is_some_and(|t| t.tap_count > 1) {
            self.emit(ControlEvent::TouchDownRepeat, location);
        }
    }

    pub fn touches_moved(&mut self, touches: &[Touch]) {
        let touch = touches.first().copied();
        if self.phase == TouchPhase::Idle {
            swarn!(?touch, "touches_moved without touches_began");
            self.phase = TouchPhase::Dragging;
        }

        let location = touch.map(|t| t.location);
        if let Some(touch) = touch {
            self.move_thumb_to(touch.location.x, 0);
        }

        let inside = self.touches_are_inside(touches);
        self.emit(ControlEvent::ValueChanged, location);

        if inside != self.touched_inside {
            let crossing = if inside {
                ControlEvent::TouchDragEnter
            } else {
                ControlEvent::TouchDragExit
            };
            strace!(?crossing, "touches_moved crossed the bounds");
            self.emit(crossing, location);
            self.touched_inside = inside;
        }

        let drag = if inside {
            ControlEvent::TouchDragInside
        } else {
            ControlEvent::TouchDragOutside
        };
        self.emit(drag, location);
    }

    /// Last touch lifted: snaps the thumb to the nearest tick.
    pub fn touches_ended(&mut self, touches: &[Touch]) {
        strace!(touch = ?touches.first(), "touches_ended");
        let location = self.touch_up(touches);
        self.emit(ControlEvent::ValueChanged, location);
        let up = if self.touches_are_inside(touches) {
            ControlEvent::TouchUpInside
        } else {
            ControlEvent::TouchUpOutside
        };
        self.emit(up, location);
    }

    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        strace!(touch = ?touches.first(), "touches_cancelled");
        let location = self.touch_up(touches);
        self.emit(ControlEvent::ValueChanged, location);
        self.emit(ControlEvent::TouchCancel, location);
    }

    fn touch_up(&mut self, touches: &[Touch]) -> Option<Point> {
        self.phase = TouchPhase::Idle;
        let touch = touches.first()?;
        let tick = self
            .layout
            .tick_at(touch.location.x, self.options.layout_direction);
        self.move_thumb_to_tick(tick);
        Some(touch.location)
    }

    fn touches_are_inside(&self, touches: &[Touch]) -> bool {
        let Some(touch) = touches.first() else {
            return false;
        };
        Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height).contains(touch.location)
    }

    // Continuous move: the thumb follows the finger, the value follows the nearest tick.
    fn move_thumb_to(&mut self, abscissa: f64, animation_ms: u64) {
        self.thumb_animation_ms = animation_ms;
        self.thumb_abscissa = self.layout.clamp_abscissa(abscissa);
        self.value = self.value_for_abscissa(self.thumb_abscissa);
        self.set_needs_display();
    }

    fn move_thumb_to_tick(&mut self, tick: u32) {
        self.value = geometry::tick_to_value(
            tick,
            self.options.minimum_value,
            self.options.increment_value,
        );
        self.layout_thumb();
        self.set_needs_display();
    }

    fn layout_track(&mut self) {
        let tick_count = self.options.tick_count();
        assert!(tick_count > 1, "2 ticks minimum {tick_count}");
        assert!(
            tick_count <= geometry::MAX_TICK_COUNT,
            "{} ticks maximum {tick_count}",
            geometry::MAX_TICK_COUNT
        );
        self.layout = TrackLayout::compute(
            self.bounds,
            self.options.track_thickness,
            geometry::segments(tick_count),
        );
        self.layout_thumb();
        self.set_needs_display();
    }

    fn layout_thumb(&mut self) {
        self.thumb_abscissa = self.abscissa_for_value(self.value);
    }

    fn emit(&mut self, event: ControlEvent, location: Option<Point>) {
        let args = ControlEventArgs {
            event,
            value: self.value,
            location,
        };
        self.listeners.dispatch(&args);
    }

    fn set_needs_display(&mut self) {
        self.needs_display = true;
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_needs_display {
            cb(self);
        }
    }
}

impl SetSliderValue for StepSlider {
    fn set_slider_value(&mut self, value: i64) {
        self.set_value(value);
    }
}

impl core::fmt::Debug for StepSlider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StepSlider")
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("value", &self.value)
            .field("thumb_abscissa", &self.thumb_abscissa)
            .field("phase", &self.phase)
            .field("touched_inside", &self.touched_inside)
            .field("needs_display", &self.needs_display)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
