use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::{Ref, RefCell};

use stepslider::{ListenerId, SetSliderValue, StepSlider, StepSliderOptions, Touch};

use crate::{KeyboardType, TextField, bind_display};

/// A framework-neutral screen controller that keeps a [`TextField`] and a [`StepSlider`] in
/// sync.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `touches_*` when the OS reports touches on the slider
/// - `begin_editing` / `edit_text` while the user types
/// - `text_field_should_return` (return key) or `dismiss_keyboard` (tap elsewhere) to commit
///
/// Slider changes overwrite the text; committing the text pins the slider (unparseable text pins
/// [`crate::FALLBACK_VALUE`]).
#[derive(Debug)]
pub struct HostController {
    slider: StepSlider,
    text_field: Rc<RefCell<TextField>>,
    binding: ListenerId,
}

impl HostController {
    pub fn new(options: StepSliderOptions) -> Self {
        Self::from_slider(StepSlider::new(options))
    }

    /// Wires an existing slider. The text field starts out showing the current value.
    pub fn from_slider(mut slider: StepSlider) -> Self {
        let mut field = TextField::new(slider.value().to_string());
        field.set_keyboard_type(KeyboardType::PhonePad);
        let text_field = Rc::new(RefCell::new(field));
        let binding = bind_display(&mut slider, Rc::clone(&text_field));
        hdebug!(value = slider.value(), "HostController wired");
        Self {
            slider,
            text_field,
            binding,
        }
    }

    pub fn slider(&self) -> &StepSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut StepSlider {
        &mut self.slider
    }

    /// Unbinds the text field and returns the slider.
    pub fn into_slider(mut self) -> StepSlider {
        self.slider.remove_listener(self.binding);
        self.slider
    }

    pub fn text_field(&self) -> Ref<'_, TextField> {
        self.text_field.borrow()
    }

    pub fn text(&self) -> String {
        self.text_field.borrow().text().to_string()
    }

    pub fn begin_editing(&mut self) {
        self.text_field.borrow_mut().begin_editing();
    }

    /// Replaces the field contents, as typed by the user.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.text_field.borrow_mut().set_text(text);
    }

    /// Return key: resigns the field (committing its value). Always allows the return.
    pub fn text_field_should_return(&mut self) -> bool {
        self.end_editing();
        true
    }

    /// Tap outside the field: resigns it, committing its value.
    pub fn dismiss_keyboard(&mut self) {
        self.end_editing();
    }

    pub fn touches_began(&mut self, touches: &[Touch]) {
        self.slider.touches_began(touches);
    }

    pub fn touches_moved(&mut self, touches: &[Touch]) {
        self.slider.touches_moved(touches);
    }

    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.slider.touches_ended(touches);
    }

    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        self.slider.touches_cancelled(touches);
    }

    fn end_editing(&mut self) {
        // The borrow must end before pinning: the slider writes back into the field.
        let value = self.text_field.borrow_mut().end_editing();
        let Some(value) = value else {
            return;
        };
        hdebug!(value, "text field committed");
        self.slider.set_slider_value(value);
    }
}
