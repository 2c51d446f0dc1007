use alloc::string::{String, ToString};

use crate::UpdateSliderValue;

/// Value pinned when the text cannot be parsed as an integer.
pub const FALLBACK_VALUE: i64 = 120;

/// Parses the text field contents, falling back to [`FALLBACK_VALUE`].
pub fn parse_value(text: &str) -> i64 {
    text.parse().unwrap_or(FALLBACK_VALUE)
}

/// Keyboard the host should present while the field is editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardType {
    Default,
    NumberPad,
    #[default]
    PhonePad,
}

/// A framework-neutral single-line text input.
///
/// It only tracks contents and focus; key handling and rendering belong to the host toolkit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextField {
    text: String,
    is_editing: bool,
    keyboard_type: KeyboardType,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    pub fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        self.keyboard_type = keyboard_type;
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn begin_editing(&mut self) {
        self.is_editing = true;
    }

    /// Resigns focus. Returns the parsed value when the field was editing, `None` otherwise.
    pub fn end_editing(&mut self) -> Option<i64> {
        if !core::mem::replace(&mut self.is_editing, false) {
            return None;
        }
        Some(parse_value(&self.text))
    }
}

impl UpdateSliderValue for TextField {
    fn update_slider_value(&mut self, value: i64) {
        self.text = value.to_string();
    }
}
