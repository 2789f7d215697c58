// Example: prefetch more data whenever the committed window nears the end of what is loaded.
use std::sync::{Arc, Mutex};

use windowed_list::{Geometry, VisibleRange, WindowedList, WindowedListOptions};

fn main() {
    let wanted = Arc::new(Mutex::new(None::<VisibleRange>));
    let options = WindowedListOptions::new(Geometry::new(24.0, 240.0).expect("valid geometry"))
        .with_overscan(4)
        .with_on_range_change(Some({
            let wanted = Arc::clone(&wanted);
            move |range: VisibleRange| {
                println!("range changed: {}..{}", range.start_index, range.end_index);
                *wanted.lock().expect("poisoned") = Some(range);
            }
        }));
    let mut list = WindowedList::new(options);
    let mut items: Vec<u32> = (0..100).collect();

    for position in [0.0, 24.0 * 40.0, 24.0 * 41.0, 24.0 * 85.0] {
        list.on_scroll(position);
        let frame = list.render(&items, |item, _| *item);
        // Paint would happen here.
        list.commit_frame(&frame);

        let range = wanted.lock().expect("poisoned").take();
        if range.is_some_and(|r| r.end_index + 10 >= items.len()) {
            let next = items.len() as u32;
            items.extend(next..next + 100);
            println!("prefetched, now {} items", items.len());
        }
    }
}
