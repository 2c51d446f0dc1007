// Example: a text field bound to the slider, edited from both sides.
use stepslider::{Size, StepSliderOptions, Touch};
use stepslider_host::HostController;

fn main() {
    let mut c = HostController::new(StepSliderOptions::default());
    c.slider_mut().set_bounds(Size::new(300.0, 40.0));

    c.touches_began(&[Touch::at(75.0, 20.0)]);
    c.touches_ended(&[Touch::at(75.0, 20.0)]);
    println!("after drag: text={:?} value={}", c.text(), c.slider().value());

    c.begin_editing();
    c.edit_text("180");
    c.text_field_should_return();
    println!("after typing: text={:?} value={}", c.text(), c.slider().value());

    c.begin_editing();
    c.edit_text("not a number");
    c.dismiss_keyboard();
    println!("after bad input: text={:?} value={}", c.text(), c.slider().value());
}
