use crate::*;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use windowed_list::{Align, Geometry, RowMemo, VisibleRange, WindowedList, WindowedListOptions};

fn geometry() -> Geometry {
    Geometry::new(10.0, 100.0).unwrap().with_overscan(2)
}

#[test]
fn anchor_preserves_scroll_across_prepend() {
    let old: Vec<u64> = (1000..1100).collect();
    let mut list = WindowedList::new(WindowedListOptions::new_with_key(geometry(), |id: &u64, _| {
        *id
    }));
    list.set_item_count(old.len());
    list.on_scroll(503.0);

    let anchor = capture_first_visible_anchor(&list, &old).unwrap();
    assert_eq!(anchor.key, 1050);
    assert_eq!(anchor.offset_in_viewport, 3.0);

    // Prepend 10 items: old items shift by +10 indexes.
    let new: Vec<u64> = (2000..2010).chain(1000..1100).collect();
    let index_of: HashMap<u64, usize> = new.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    assert!(apply_anchor(&mut list, &new, &anchor, |k| index_of.get(k).copied()));
    assert_eq!(list.item_count(), 110);
    assert_eq!(list.scroll_position(), 603.0);
    assert_eq!(list.first_visible_index(), Some(60));
}

#[test]
fn anchor_for_removed_key_is_not_applied() {
    let items: Vec<u64> = (0..50).collect();
    let mut list = WindowedList::new(WindowedListOptions::new_with_key(geometry(), |id: &u64, _| {
        *id
    }));
    list.set_item_count(items.len());
    list.on_scroll(200.0);
    let anchor = capture_first_visible_anchor(&list, &items).unwrap();

    let remaining: Vec<u64> = (30..50).collect();
    assert!(!apply_anchor(&mut list, &remaining, &anchor, |_| None));
    assert_eq!(list.scroll_position(), 200.0);
}

#[test]
fn controller_tween_drives_scroll_position() {
    let items: Vec<u32> = (0..1000).collect();
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()));
    c.list_mut().set_item_count(items.len());

    let to = c.start_tween_to_index(500, Align::Start, 0, 100, Easing::SmoothStep);
    assert_eq!(to, 5000.0);
    assert!(c.is_animating());

    let mut last = 0.0;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(position) = c.tick(now_ms) {
            assert!(position >= last);
            last = position;
        }
    }
    assert!(!c.is_animating());
    assert!(!c.is_scrolling());
    assert_eq!(c.list().scroll_position(), to);
}

#[test]
fn user_scroll_cancels_tween() {
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()));
    c.list_mut().set_item_count(1000);
    c.start_tween_to_position(9000.0, 0, 200, Easing::Linear);
    assert!(c.tick(50).is_some());

    c.on_scroll(42.0, 60);
    assert!(!c.is_animating());
    assert_eq!(c.list().scroll_position(), 42.0);
    assert_eq!(c.tick(70), None);
}

#[test]
fn retargeting_continues_from_current_sample() {
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()));
    c.list_mut().set_item_count(1000);
    c.start_tween_to_position(1000.0, 0, 100, Easing::Linear);
    assert_eq!(c.tick(50), Some(500.0));

    c.start_tween_to_position(2000.0, 50, 100, Easing::Linear);
    assert_eq!(c.tick(100), Some(1250.0));
    assert_eq!(c.tick(150), Some(2000.0));
    assert!(!c.is_animating());
}

#[test]
fn is_scrolling_resets_after_quiet_period() {
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()))
        .with_is_scrolling_reset_delay_ms(100);
    c.list_mut().set_item_count(1000);

    c.on_scroll(10.0, 0);
    assert!(c.is_scrolling());
    c.on_scroll(20.0, 50);
    c.tick(120);
    assert!(c.is_scrolling());
    c.tick(150);
    assert!(!c.is_scrolling());
}

#[test]
fn present_paints_before_notifying() {
    let events = Arc::new(Mutex::new(Vec::<&'static str>::new()));
    let options = WindowedListOptions::new(geometry()).with_on_range_change(Some({
        let events = Arc::clone(&events);
        move |_: VisibleRange| events.lock().unwrap().push("range")
    }));
    let mut c = Controller::new(options);
    let items: Vec<u32> = (0..1000).collect();

    let changed = c.present(
        &items,
        |item, _| *item,
        |frame| {
            assert_eq!(frame.rows.len(), 14);
            events.lock().unwrap().push("paint");
        },
    );
    assert!(changed);
    assert_eq!(*events.lock().unwrap(), ["paint", "range"]);

    // Same window: painted again, no notification.
    let changed = c.present(&items, |item, _| *item, |_| events.lock().unwrap().push("paint"));
    assert!(!changed);
    assert_eq!(*events.lock().unwrap(), ["paint", "range", "paint"]);
}

#[test]
fn present_memoized_reuses_rows_across_scrolls() {
    let items: Vec<u32> = (0..1000).collect();
    let mut c = Controller::new(WindowedListOptions::new(geometry()));
    let mut memo = RowMemo::new();

    c.present_memoized(&items, &mut memo, |item, _| *item * 2, |_| {});
    assert_eq!(memo.last_rendered(), 14);

    c.on_scroll(50.0, 0);
    let mut painted = 0;
    c.present_memoized(
        &items,
        &mut memo,
        |item, _| *item * 2,
        |frame| painted = frame.rows.len(),
    );
    // Window 3..17: rows 3..14 come from the memo.
    assert_eq!(painted, 14);
    assert_eq!(memo.last_reused(), 11);
    assert_eq!(memo.last_rendered(), 3);
}

#[test]
fn scroll_to_index_is_clamped() {
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()));
    c.list_mut().set_item_count(100);
    assert_eq!(c.scroll_to_index(99, Align::Start, 0), 900.0);
    assert!(c.is_scrolling());
    assert_eq!(c.scroll_to_position(-5.0, 1), 0.0);
}

#[test]
fn viewport_resize_is_validated() {
    let mut c = Controller::new(WindowedListOptions::<u32>::new(geometry()));
    assert!(c.on_viewport_height(0.0).is_err());
    assert!(c.on_viewport_height(200.0).is_ok());
    assert_eq!(c.list().geometry().visible_count(), 20);
}

#[test]
fn controller_anchor_at_offset() {
    let items: Vec<u32> = (0..100).collect();
    let mut c = Controller::new(WindowedListOptions::new(geometry()));
    c.list_mut().set_item_count(items.len());
    c.on_scroll(105.0, 0);

    let anchor = c.capture_anchor_at_offset_in_viewport(&items, 30.0).unwrap();
    assert_eq!(anchor.key, 13);
    assert_eq!(anchor.offset_in_viewport, -25.0);

    let anchor = c.capture_first_visible_anchor(&items).unwrap();
    assert_eq!(anchor.key, 10);
    assert!(c.apply_anchor(&items, &anchor, |k| Some(*k)));
    assert_eq!(c.list().scroll_position(), 105.0);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.ease(0.0), 0.0);
        assert_eq!(easing.ease(1.0), 1.0);
    }
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.ease(0.5), 0.5);
    }
    assert_eq!(Easing::EaseOutCubic.ease(0.5), 0.875);
    assert_eq!(Easing::EaseInOutCubic.ease(0.25), 0.0625);

    let t = Tween::new(0.0, 100.0, 10, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.progress(5), 0.0);
    assert!(t.is_done(11));
    assert_eq!(t.sample(11), 100.0);
}

#[test]
fn tween_progress_is_linear_in_time() {
    let t = Tween::new(200.0, 0.0, 100, 400, Easing::EaseOutCubic);
    assert_eq!(t.progress(100), 0.0);
    assert_eq!(t.progress(300), 0.5);
    assert_eq!(t.progress(900), 1.0);
    // Scrolling up: 200 - 200 * 0.875.
    assert_eq!(t.sample(300), 25.0);
    assert!(!t.is_done(499));
    assert!(t.is_done(500));
}
