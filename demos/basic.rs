//! Subscribe, broadcast, and propagate up a parent chain.
//!
//! Run with: `cargo run --example basic`

use hubcast::{Event, EventHub, InlineScheduler, ListenerSpec};
use std::sync::Arc;

fn main() {
    let document = EventHub::builder()
        .with_name("document")
        .with_scheduler(Arc::new(InlineScheduler))
        .build();

    let section = EventHub::builder()
        .with_name("section")
        .with_scheduler(Arc::new(InlineScheduler))
        .with_parent(document.clone())
        .build();

    document
        .subscribe(
            ListenerSpec::new(|e| {
                println!("[document] heard {:?}", e.action.as_deref());
            })
            .with_action("update"),
        )
        .expect("valid filter");

    section
        .subscribe(
            ListenerSpec::new(|e| {
                println!("[section] heard {:?}", e.action.as_deref());
            })
            .with_action("update insert"),
        )
        .expect("valid filter");

    // stays local: repeat is off by default
    section.broadcast(Event::new().with_action("insert.row"));

    // bubbles: the section fires first, then the document
    section.broadcast(Event::new().with_action("update.doc").with_repeat());

    // matches neither filter
    section.broadcast(Event::new().with_action("delete"));
}
