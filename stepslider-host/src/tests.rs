use crate::*;

use alloc::rc::Rc;
use core::cell::RefCell;
use stepslider::{ControlEvent, Size, StepSlider, StepSliderOptions, Touch};

fn controller() -> HostController {
    HostController::new(StepSliderOptions::default())
}

#[test]
fn parse_value_falls_back_to_default() {
    assert_eq!(parse_value("75"), 75);
    assert_eq!(parse_value("-5"), -5);
    assert_eq!(parse_value("abc"), FALLBACK_VALUE);
    assert_eq!(parse_value(""), FALLBACK_VALUE);
    assert_eq!(parse_value(" 75"), FALLBACK_VALUE);
}

#[test]
fn text_field_starts_with_slider_value() {
    let c = controller();
    assert_eq!(c.text(), "0");
    assert_eq!(c.text_field().keyboard_type(), KeyboardType::PhonePad);
    assert!(!c.text_field().is_editing());
}

#[test]
fn committing_text_pins_slider() {
    let mut c = controller();
    c.begin_editing();
    c.edit_text("75");
    assert!(c.text_field_should_return());
    assert_eq!(c.slider().value(), 75);
    assert_eq!(c.text(), "75");
    assert!(!c.text_field().is_editing());
}

#[test]
fn unparseable_text_pins_fallback() {
    let mut c = controller();
    c.begin_editing();
    c.edit_text("abc");
    c.dismiss_keyboard();
    assert_eq!(c.slider().value(), 120);
    // The slider writes the pinned value back.
    assert_eq!(c.text(), "120");
}

#[test]
fn resigning_without_editing_does_nothing() {
    let mut c = controller();
    c.edit_text("abc");
    c.dismiss_keyboard();
    assert_eq!(c.slider().value(), 0);
    assert_eq!(c.text(), "abc");
}

#[test]
fn commit_emits_one_value_changed() {
    let mut c = controller();
    let seen = Rc::new(RefCell::new(alloc::vec::Vec::new()));
    let sink = Rc::clone(&seen);
    c.slider_mut()
        .add_listener(ControlEvent::ValueChanged, move |a| sink.borrow_mut().push(a.value));
    c.begin_editing();
    c.edit_text("42");
    c.text_field_should_return();
    assert_eq!(*seen.borrow(), [42]);
}

#[test]
fn dragging_updates_text() {
    let mut c = controller();
    c.slider_mut().set_bounds(Size::new(300.0, 40.0));
    c.touches_began(&[Touch::at(0.0, 20.0)]);
    assert_eq!(c.text(), "-5");
    c.touches_moved(&[Touch::at(150.0, 20.0)]);
    assert_eq!(c.text(), "115");
    c.touches_ended(&[Touch::at(300.0, 20.0)]);
    assert_eq!(c.text(), "234");
    c.touches_began(&[Touch::at(150.0, 20.0)]);
    c.touches_cancelled(&[Touch::at(0.0, 20.0)]);
    assert_eq!(c.text(), "-5");
}

#[test]
fn into_slider_unbinds_text_field() {
    let c = controller();
    let mut s = c.into_slider();
    assert_eq!(s.listener_count(), 0);
    s.set_value(3);
    assert_eq!(s.value(), 3);
}

#[test]
fn bind_display_accepts_custom_displays() {
    #[derive(Default)]
    struct Last(Option<i64>);

    impl UpdateSliderValue for Last {
        fn update_slider_value(&mut self, value: i64) {
            self.0 = Some(value);
        }
    }

    let mut s = StepSlider::default();
    let last = Rc::new(RefCell::new(Last::default()));
    let id = bind_display(&mut s, Rc::clone(&last));
    s.set_value(9);
    assert_eq!(last.borrow().0, Some(9));

    s.remove_listener(id);
    s.set_value(10);
    assert_eq!(last.borrow().0, Some(9));
}

#[test]
fn text_field_end_editing_reports_value_once() {
    let mut field = TextField::new("12");
    assert_eq!(field.end_editing(), None);
    field.begin_editing();
    assert_eq!(field.end_editing(), Some(12));
    assert_eq!(field.end_editing(), None);
}
