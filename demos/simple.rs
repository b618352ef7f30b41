//! Build a calendar with one event and print it.
//!
//! Run with: cargo run --example simple

use chrono::{Duration, Local};
use icalgen::{download_headers, Component};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let start = Local::now().naive_local();

    let mut calendar = Component::calendar_with([("name", "Demo")]);
    let event = calendar.add_event(
        "Standup",
        "Daily sync",
        start,
        Some(start + Duration::minutes(30)),
        None,
    );
    event.set_alarm("Standup in 5 minutes", 0, 0, 5, 0);

    for (name, value) in download_headers("demo.ics") {
        println!("{name}: {value}");
    }
    println!();
    print!("{}", calendar);

    Ok(())
}
