// Example: right-to-left layout with a coarse increment and a shadowed thumb.
use stepslider::{LayoutDirection, Size, StepSlider, StepSliderOptions, Touch};

fn main() {
    let options = StepSliderOptions::new(0, 100, 10)
        .with_layout_direction(LayoutDirection::RightToLeft)
        .with_marker_labels(["0", "25", "50", "75", "100"])
        .with_thumb_shadow(2.0, Size::new(0.0, 1.0));
    let mut s = StepSlider::new(options).with_bounds(Size::new(200.0, 44.0));
    s.set_on_needs_display(Some(|s: &StepSlider| {
        println!("redraw: value={} thumb={:.1}", s.value(), s.thumb_abscissa());
    }));

    // The right end is the minimum.
    s.touches_began(&[Touch::at(190.0, 22.0)]);
    s.touches_ended(&[Touch::at(190.0, 22.0)]);

    s.batch_update(|s| {
        s.set_value(70);
        s.set_track_thickness(4.0);
    });
}
