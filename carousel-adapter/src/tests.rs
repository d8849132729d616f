use crate::*;

use alloc::vec::Vec;

use carousel::CarouselOptions;

fn looping_options(count: usize) -> CarouselOptions {
    CarouselOptions::new(count, |_| 1).with_looping(true)
}

fn selected(c: &Controller) -> usize {
    c.engine().selected_snap()
}

// 4 slides, loop on, 2500ms autoplay: tick advance, manual jump, wrap,
// hover pause longer than the interval, resume.
#[test]
fn autoplay_walkthrough_with_hover_pause() {
    let mut c = Controller::new(looping_options(4));
    c.start_autoplay(0);

    assert!(c.tick(2499).is_none());
    assert_eq!(selected(&c), 0);

    c.tick(2500);
    assert_eq!(selected(&c), 1);

    c.on_indicator_press(3, 2600);
    assert_eq!(selected(&c), 3);

    // The interval timer is unaffected by manual navigation.
    c.tick(5000);
    assert_eq!(selected(&c), 0);

    c.pointer_enter();
    assert!(c.state().suspended);
    c.tick(7500);
    c.tick(10_000);
    assert_eq!(selected(&c), 0);

    c.pointer_leave(10_000);
    assert!(!c.state().suspended);
    c.tick(11_000);
    assert_eq!(selected(&c), 0);
    c.tick(12_500);
    assert_eq!(selected(&c), 1);
}

#[test]
fn resume_rearms_a_full_interval() {
    let mut c = Controller::new(looping_options(3));
    c.start_autoplay(0);
    c.tick(2500);
    assert_eq!(selected(&c), 1); // next deadline would be 5000

    c.pointer_enter();
    c.pointer_leave(4000);

    // The old 5000 deadline was cancelled by the hover, not deferred.
    c.tick(5000);
    assert_eq!(selected(&c), 1);
    c.tick(6500);
    assert_eq!(selected(&c), 2);
}

#[test]
fn late_tick_advances_at_most_once() {
    let mut c = Controller::new(looping_options(4));
    c.start_autoplay(0);

    c.tick(10_000);
    assert_eq!(selected(&c), 1);
    c.tick(10_001);
    assert_eq!(selected(&c), 1);
    c.tick(12_500);
    assert_eq!(selected(&c), 2);
}

#[test]
fn single_slide_without_loop_never_moves() {
    let mut c = Controller::new(CarouselOptions::new(1, |_| 1));
    c.start_autoplay(0);

    for now_ms in [2500u64, 5000, 7500] {
        c.tick(now_ms);
    }
    let s = c.state();
    assert_eq!(s.engine.selected_index, 0);
    assert!(!s.engine.can_scroll_prev);
    assert!(!s.engine.can_scroll_next);

    c.on_prev_press(8000);
    c.on_next_press(8000);
    assert_eq!(selected(&c), 0);
}

#[test]
fn autoplay_never_starts_for_an_empty_widget() {
    let mut c = Controller::new(looping_options(0));
    c.start_autoplay(0);
    assert!(c.autoplay().is_stopped());

    c.tick(2500);
    assert_eq!(selected(&c), 0);

    // Hover over the stopped widget must not arm anything either.
    c.pointer_enter();
    c.pointer_leave(3000);
    assert!(c.autoplay().is_stopped());
}

#[test]
fn stop_cancels_timer_and_motion() {
    let mut c = Controller::new(looping_options(4));
    c.set_motion(200, Easing::Linear);
    c.start_autoplay(0);
    c.scroll_next(100);
    assert!(c.is_animating());

    c.stop();
    assert!(!c.is_animating());
    assert!(c.tick(2500).is_none());
    assert_eq!(selected(&c), 1);

    c.pointer_leave(3000);
    c.tick(5500);
    assert_eq!(selected(&c), 1);
}

#[test]
fn press_handlers_respect_boundary_flags() {
    let mut c = Controller::new(CarouselOptions::new(3, |_| 1));

    c.on_prev_press(0);
    assert_eq!(selected(&c), 0);

    c.on_next_press(0);
    c.on_next_press(0);
    assert_eq!(selected(&c), 2);
    c.on_next_press(0);
    assert_eq!(selected(&c), 2);

    c.on_indicator_press(99, 0);
    assert_eq!(selected(&c), 2);
    c.on_indicator_press(0, 0);
    assert_eq!(selected(&c), 0);
}

#[test]
fn exactly_one_indicator_is_active_after_any_sequence() {
    let mut c = Controller::new(looping_options(5));
    c.start_autoplay(0);

    let mut indicators = Vec::new();
    let mut now_ms = 0u64;
    for step in 0..20u64 {
        now_ms += 1300;
        match step % 4 {
            0 => {
                c.tick(now_ms);
            }
            1 => c.on_next_press(now_ms),
            2 => c.on_indicator_press((step as usize * 3) % 7, now_ms),
            _ => c.on_prev_press(now_ms),
        }

        let s = c.state();
        collect_indicators(&s.engine, &mut indicators);
        assert_eq!(indicators.len(), 5);
        let active: Vec<_> = indicators.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].index, s.engine.selected_index);
    }
}

#[test]
fn nav_state_mirrors_boundary_flags() {
    let mut c = Controller::new(CarouselOptions::new(2, |_| 1));

    let nav = nav_state(&c.state().engine);
    assert!(!nav.prev_enabled);
    assert!(nav.next_enabled);

    c.on_next_press(0);
    let nav = nav_state(&c.state().engine);
    assert!(nav.prev_enabled);
    assert!(!nav.next_enabled);
}

#[test]
fn glide_drives_offset_to_the_target_snap() {
    let mut c = Controller::new(CarouselOptions::new(10, |_| 100).with_viewport(100));
    c.set_motion(100, Easing::SmoothStep);

    c.scroll_to(5, 0);
    assert!(c.is_animating());

    let mut last = 0u64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(last, 500);
    assert_eq!(c.engine().scroll_offset(), 500);
}

#[test]
fn navigating_mid_glide_departs_from_current_offset() {
    let mut c = Controller::new(CarouselOptions::new(10, |_| 100).with_viewport(100));
    c.set_motion(100, Easing::Linear);

    c.scroll_to(4, 0); // toward 400
    let mid = c.tick(50).unwrap();
    assert!(mid > 0 && mid < 400);

    c.scroll_to(1, 50); // redirect toward 100 from wherever we are
    let mut off = mid;
    for now_ms in [60u64, 100, 150, 200] {
        if let Some(o) = c.tick(now_ms) {
            off = o;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(off, 100);
    assert_eq!(selected(&c), 1);
}

#[test]
fn wrap_glide_crosses_the_loop_seam() {
    let mut c = Controller::new(
        CarouselOptions::new(4, |_| 100)
            .with_looping(true)
            .with_viewport(100)
            .with_start_index(3),
    );
    c.set_motion(100, Easing::Linear);

    // 3 -> 0 forward: the strip is circular (span 400), so the glide keeps
    // moving forward through the seam instead of rewinding 300 units.
    c.scroll_next(0);
    assert_eq!(selected(&c), 0);
    assert_eq!(c.tick(50), Some(350));
    assert_eq!(c.tick(100), Some(0));
    assert!(!c.is_animating());
    assert_eq!(c.engine().scroll_offset(), 0);

    // 0 -> 3 backward crosses the seam the other way.
    c.scroll_prev(200);
    assert_eq!(selected(&c), 3);
    assert_eq!(c.tick(250), Some(350));
    assert_eq!(c.tick(300), Some(300));
    assert!(!c.is_animating());
}
