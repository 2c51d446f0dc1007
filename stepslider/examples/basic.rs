// Example: drive the slider with a scripted drag and dump the draw commands.
use stepslider::{ControlEvent, DrawCommand, Size, StepSlider, StepSliderOptions, Touch};

fn main() {
    let mut s = StepSlider::new(StepSliderOptions::default()).with_bounds(Size::new(300.0, 40.0));
    s.add_listener_for(ControlEvent::ALL, |args| {
        println!("{:?} value={}", args.event, args.value);
    });

    s.touches_began(&[Touch::at(40.0, 20.0)]);
    for x in [80.0, 120.0, 150.0] {
        s.touches_moved(&[Touch::at(x, 20.0)]);
    }
    s.touches_ended(&[Touch::at(150.0, 20.0)]);

    println!("value={} thumb={:.2}", s.value(), s.thumb_abscissa());
    for cmd in s.draw() {
        match cmd {
            DrawCommand::Fill { .. } => {}
            other => println!("{other:?}"),
        }
    }
}
