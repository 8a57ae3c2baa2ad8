//! Aggregate notes from several producers into one batched notification.
//!
//! Run with: `cargo run --example batch`

use hubcast::{EventHub, InlineScheduler, ListenerSpec, Note, PickerSpec};
use std::sync::Arc;

fn main() {
    let hub = EventHub::builder()
        .with_name("store")
        .with_scheduler(Arc::new(InlineScheduler))
        .build();

    hub.subscribe(ListenerSpec::new(|e| {
        let Some(notes) = &e.notes else { return };
        println!("batch {:?} fired with {} note(s):", e.action.as_deref(), notes.count(None));
        for note in notes.group(None) {
            println!("  - action={:?} path={:?}", note.action.as_deref(), note.path.as_deref());
        }
        for note in notes.group(Some("alerts")) {
            println!("  ! alert: {:?}", note.body.as_deref());
        }
    }))
    .expect("valid spec");

    // three producers contribute to the same "task" batch
    let a = hub.open_picker(PickerSpec::new().with_action("task.sync"));
    let b = hub.open_picker(PickerSpec::new().with_action("task.sync"));
    let c = hub.open_picker(PickerSpec::new().with_action("task.sync"));

    a.add_note(Note::new().with_action("update").with_path("doc.title"));
    b.add_note(Note::new().with_action("insert").with_path("doc.rows"));
    c.add_note(
        Note::new()
            .with_group("alerts")
            .with_body("rows grew past the soft limit"),
    );

    a.complete().expect("first release");
    b.complete().expect("second release");
    // only the last release fires, exactly once
    c.complete().expect("final release");

    // an empty batch is dropped silently unless asked to fire
    hub.open_picker(PickerSpec::new().with_action("idle"))
        .complete()
        .expect("empty batch skipped");
}
