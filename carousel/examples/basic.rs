// Example: minimal navigation and snap queries.
use carousel::{Carousel, CarouselOptions, SnapAlign};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(4, |_| 320)
            .with_looping(true)
            .with_gap(16)
            .with_viewport(320)
            .with_align(SnapAlign::Start),
    );

    println!("state={:?}", c.engine_state());

    c.scroll_next();
    c.scroll_to(3);
    println!("selected={} offset={}", c.selected_snap(), c.scroll_offset());

    // Wraps: 3 -> 0 with loop enabled.
    c.scroll_next();
    println!(
        "after wrap: selected={} progress={:.2}",
        c.selected_snap(),
        c.scroll_progress()
    );

    let mut slides = Vec::new();
    c.collect_slides(&mut slides);
    println!("first_slide={:?} total_size={}", slides.first(), c.total_size());
}
