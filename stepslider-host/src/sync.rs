use alloc::rc::Rc;
use core::cell::RefCell;

use stepslider::{ListenerId, StepSlider};

/// Control → host half of the value synchronization.
///
/// The other half is [`stepslider::SetSliderValue`], implemented by the slider itself.
pub trait UpdateSliderValue {
    fn update_slider_value(&mut self, value: i64);
}

/// Forwards every slider value change to `display`.
///
/// The returned id can be passed to [`StepSlider::remove_listener`] to unbind.
pub fn bind_display<D>(slider: &mut StepSlider, display: Rc<RefCell<D>>) -> ListenerId
where
    D: UpdateSliderValue + 'static,
{
    slider.on_value_changed(move |value| {
        htrace!(value, "slider value → display");
        display.borrow_mut().update_slider_value(value);
    })
}
