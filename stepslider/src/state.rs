use crate::TouchPhase;

/// A lightweight, serializable snapshot of the control's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub value: i64,
    /// Thumb center at capture time. Restoring recomputes it from `value` unless dragging.
    pub thumb_abscissa: f64,
    pub phase: TouchPhase,
    pub touched_inside: bool,
}

impl SliderState {
    pub fn is_dragging(&self) -> bool {
        self.phase == TouchPhase::Dragging
    }
}
