use carousel::CarouselOptions;
use carousel_adapter::{Controller, Easing, collect_indicators, nav_state};

fn main() {
    // Example: a four-card rotator driven by a simulated clock.
    //
    // An adapter would:
    // - forward pointer enter/leave from the widget's bounding box
    // - forward presses from the prev/next buttons and the indicator dots
    // - call tick(now_ms) in a frame loop / timer
    // - render slides + indicators from the returned state
    let mut c = Controller::new(
        CarouselOptions::new(4, |_| 320)
            .with_looping(true)
            .with_viewport(320)
            .with_gap(16),
    )
    .with_autoplay_interval(2500);
    c.set_motion(240, Easing::EaseOutCubic);
    c.start_autoplay(0);

    let mut indicators = Vec::new();
    let mut now_ms = 0u64;
    while now_ms < 9000 {
        now_ms += 100;

        // Simulated hover between 5s and 6s: autoplay pauses.
        if now_ms == 5000 {
            c.pointer_enter();
        }
        if now_ms == 6000 {
            c.pointer_leave(now_ms);
        }

        let moving = c.tick(now_ms);
        if now_ms.is_multiple_of(1000) {
            let s = c.state();
            collect_indicators(&s.engine, &mut indicators);
            let dots: String = indicators
                .iter()
                .map(|i| if i.active { '●' } else { '○' })
                .collect();
            println!(
                "t={now_ms} selected={} {dots} nav={:?} suspended={} offset={:?}",
                s.engine.selected_index,
                nav_state(&s.engine),
                s.suspended,
                moving,
            );
        }
    }
}
