//! Default timezone, custom product id and readable line endings.
//!
//! Run with: cargo run --example custom_options

use chrono::NaiveDate;
use icalgen::{to_json_pretty, Component, IcalOptions, LineEnding};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = IcalOptions::new()
        .with_default_timezone("Europe/Berlin")
        .with_product_id("-//Example//Room Booking//EN")
        .with_line_ending(LineEnding::Lf);

    let day = NaiveDate::from_ymd_opt(2024, 12, 24).ok_or("invalid date")?;
    let start = day.and_hms_opt(0, 0, 0).ok_or("invalid time")?;
    let end = day
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid date")?;

    let mut calendar = Component::calendar_with_options([("name", "Holidays")], &options);
    calendar.add_event_with_options("Christmas Eve", "Office closed", start, Some(end), None, &options);

    println!("{}", calendar.render_with_options(&options));
    println!("{}", to_json_pretty(&calendar)?);

    Ok(())
}
