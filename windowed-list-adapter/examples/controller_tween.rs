// Example: a controller driving tween scrolling without holding any UI objects.
//
// An adapter would:
// - start a tween (e.g. in response to a "scroll to index" command)
// - call tick(now_ms) in a frame loop or timer
// - apply the returned position to the real scroll container (if any)
// - present the list, painting the frame before it is committed
use windowed_list::{Align, Geometry, WindowedListOptions};
use windowed_list_adapter::{Controller, Easing};

fn main() {
    let items: Vec<u32> = (0..10_000).collect();
    let geometry = Geometry::new(20.0, 400.0).expect("valid geometry");
    let mut c = Controller::new(WindowedListOptions::new(geometry));
    c.list_mut().set_item_count(items.len());

    let target = c.start_tween_to_index(2_000, Align::Center, 0, 240, Easing::SmoothStep);
    println!("target_position={target}");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let Some(position) = c.tick(now_ms) else {
            break;
        };
        c.present(
            &items,
            |item, _| *item,
            |frame| {
                if now_ms % 80 == 0 {
                    println!(
                        "t={now_ms} position={position} first_row={:?}",
                        frame.rows.first().map(|r| r.index)
                    );
                }
            },
        );
    }
    println!("done: position={}", c.list().scroll_position());
}
