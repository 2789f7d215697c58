// Example: window a 1000-row list and print what the host would paint.
use windowed_list::{Align, Geometry, WindowedList, WindowedListOptions};

fn main() {
    let items: Vec<String> = (0..1000).map(|i| format!("Item {i}")).collect();
    let geometry = Geometry::new(80.0, 400.0).expect("valid geometry");
    let mut list = WindowedList::new(WindowedListOptions::new(geometry));

    list.on_scroll(4000.0);
    let frame = list.render(&items, |item, _| item.clone());
    println!(
        "spacer={} offset_y={} range={:?}",
        frame.spacer_height,
        frame.offset_y(),
        frame.range
    );
    for rendered in &frame.rows {
        println!("  [{}] {}", rendered.key, rendered.row.content());
    }
    list.commit_frame(&frame);

    let position = list.scroll_to_index(999, Align::End);
    println!("after scroll_to_index: position={position}");
    println!("visible_range={:?}", list.visible_range());
}
