// Example: keep the same message on screen when older messages are prepended to a timeline.
//
// The flow is:
// 1) capture an anchor (key + offset_in_viewport) before the collection changes
// 2) swap in the new collection
// 3) apply the anchor so the list scrolls to keep the anchored row in place
use std::collections::HashMap;

use windowed_list::{Geometry, WindowedListOptions};
use windowed_list_adapter::Controller;

fn main() {
    let geometry = Geometry::new(10.0, 100.0).expect("valid geometry");
    let mut c = Controller::new(WindowedListOptions::new_with_key(geometry, |id: &u64, _| *id));

    let old: Vec<u64> = (1000..1100).collect();
    c.list_mut().set_item_count(old.len());
    c.on_scroll(503.0, 0);

    let anchor = c
        .capture_first_visible_anchor(&old)
        .expect("visible range must not be empty");
    println!(
        "before prepend: position={} anchor={anchor:?}",
        c.list().scroll_position()
    );

    // Prepend 10 items; old items shift by +10 indexes.
    let new: Vec<u64> = (2000..2010).chain(1000..1100).collect();
    let index_of: HashMap<u64, usize> = new.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    let ok = c.apply_anchor(&new, &anchor, |k| index_of.get(k).copied());
    println!(
        "after prepend: ok={ok} position={}",
        c.list().scroll_position()
    );
}
