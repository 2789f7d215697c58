// Example: key rows by identity and reuse unchanged row output across scrolls.
use windowed_list::{Geometry, RowMemo, WindowedList, WindowedListOptions};

#[derive(Clone, PartialEq)]
struct Message {
    id: u64,
    text: String,
}

fn main() {
    let mut messages: Vec<Message> = (0..500)
        .map(|i| Message {
            id: 10_000 + i,
            text: format!("message {i}"),
        })
        .collect();

    let options = WindowedListOptions::new_with_key(
        Geometry::new(32.0, 320.0).expect("valid geometry").with_overscan(3),
        |m: &Message, _| m.id,
    );
    let mut list = WindowedList::new(options);
    let mut memo = RowMemo::new();

    for position in [0.0, 64.0, 128.0] {
        list.on_scroll(position);
        let frame = list.render_memoized(&messages, &mut memo, |m, _| m.text.to_uppercase());
        list.commit_frame(&frame);
        println!(
            "position={position} rows={} rendered={} reused={}",
            frame.rows.len(),
            memo.last_rendered(),
            memo.last_reused()
        );
    }

    // Editing one visible message re-renders only that row.
    messages[6].text.push_str(" (edited)");
    let frame = list.render_memoized(&messages, &mut memo, |m, _| m.text.to_uppercase());
    list.commit_frame(&frame);
    println!(
        "after edit: rendered={} reused={}",
        memo.last_rendered(),
        memo.last_reused()
    );
}
