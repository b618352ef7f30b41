use chrono::NaiveDate;
use icalgen::{Component, ComponentType, IcalOptions, Status};

#[test]
fn test_every_component_type_renders_begin_end() {
    for tag in [
        "VCALENDAR",
        "VEVENT",
        "VTODO",
        "VJOURNAL",
        "VFREEBUSY",
        "VTIMEZONE",
        "VALARM",
        "X-ANYTHING",
    ] {
        let ics = Component::new(tag).unwrap().render();
        assert!(ics.starts_with(&format!("BEGIN:{tag}\r\n")), "{ics}");
        assert!(ics.ends_with(&format!("END:{tag}\r\n")), "{ics}");
    }
}

#[test]
fn test_every_line_is_crlf_terminated() {
    let mut calendar = Component::calendar();
    calendar.add_event(
        "Review",
        &"long description ".repeat(20),
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap(),
        None,
        None,
    );

    let ics = calendar.render();
    assert!(ics.ends_with("\r\n"));
    assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
    assert_eq!(ics.matches('\r').count(), ics.matches("\r\n").count());
}

#[test]
fn test_content_lines_stay_short() {
    let mut journal = Component::journal();
    journal.set_description(&"0123456789".repeat(30));

    for line in journal.render().split_terminator("\r\n") {
        // 65 value characters plus "DESCRIPTION:" on the first line.
        assert!(line.len() <= 65 + "DESCRIPTION:".len(), "{line}");
    }
}

#[test]
fn test_folded_value_layout() {
    let value = "q".repeat(200);
    let mut event = Component::event();
    event.set_description(&value);

    let ics = event.render();
    let expected = format!(
        "\r\nDESCRIPTION:{}\r\n {}\r\n {}\r\n {}\r\n",
        "q".repeat(65),
        "q".repeat(65),
        "q".repeat(65),
        "q".repeat(5)
    );
    assert!(ics.contains(&expected));
}

#[test]
fn test_calendar_version_is_first() {
    let calendar = Component::calendar_with([("x-first", "1"), ("version", "1.0")]);
    let ics = calendar.render();
    let mut lines = ics.split_terminator("\r\n");

    assert_eq!(lines.next(), Some("BEGIN:VCALENDAR"));
    assert_eq!(lines.next(), Some("VERSION:2.0"));
    assert_eq!(ics.matches("VERSION:").count(), 1);
}

#[test]
fn test_properties_render_in_insertion_order() {
    let mut todo = Component::todo();
    todo.set_property("zeta", "1").unwrap();
    todo.set_property("alpha", "2").unwrap();
    todo.set_property("mu", "3").unwrap();
    todo.set_property("zeta", "4").unwrap();

    let ics = todo.render();
    let zeta = ics.find("ZETA:4").unwrap();
    let alpha = ics.find("ALPHA:2").unwrap();
    let mu = ics.find("MU:3").unwrap();
    assert!(zeta < alpha && alpha < mu);
}

#[test]
fn test_bookkeeping_keys_are_not_rendered() {
    let mut event = Component::event();
    event.set_raw_property("internal-note", "do not print").unwrap();
    event.set_raw_property("X-RAW", "already;encoded").unwrap();

    assert_eq!(event.get_property("internal-note", ""), "do not print");
    let ics = event.render();
    assert!(!ics.contains("do not print"));
    assert!(!ics.contains("sequence:"));
    assert!(ics.contains("\r\nX-RAW:already;encoded\r\n"));
}

#[test]
fn test_nested_blocks() {
    let mut calendar = Component::calendar();
    let mut event = Component::event();
    event.set_alarm("first", 0, 0, 15, 0);
    event.set_alarm("second", 0, 0, 5, 0);
    calendar.add_child(event).unwrap();
    calendar.add_child(Component::todo()).unwrap();

    let ics = calendar.render();
    let order: Vec<&str> = ics
        .split_terminator("\r\n")
        .filter(|line| line.starts_with("BEGIN:") || line.starts_with("END:"))
        .collect();
    assert_eq!(
        order,
        vec![
            "BEGIN:VCALENDAR",
            "BEGIN:VEVENT",
            "BEGIN:VALARM",
            "END:VALARM",
            "BEGIN:VALARM",
            "END:VALARM",
            "END:VEVENT",
            "BEGIN:VTODO",
            "END:VTODO",
            "END:VCALENDAR",
        ]
    );
}

#[test]
fn test_status_values() {
    let mut todo = Component::todo();
    for status in Status::ALL {
        todo.set_status(status);
        assert!(todo.render().contains(&format!("\r\nSTATUS:{status}\r\n")));
    }
}

#[test]
fn test_type_change_updates_begin_end() {
    let mut node = Component::todo();
    node.set_property("TYPE", "vjournal").unwrap();
    assert_eq!(node.kind(), &ComponentType::Journal);

    let ics = node.render();
    assert!(ics.starts_with("BEGIN:VJOURNAL\r\n"));
    assert!(ics.ends_with("END:VJOURNAL\r\n"));
}

#[test]
fn test_product_id_option() {
    let options = IcalOptions::new().with_product_id("-//Acme//Scheduler 2.1//EN");
    let calendar = Component::calendar_with_options(std::iter::empty::<(&str, &str)>(), &options);
    assert!(calendar
        .render()
        .contains("\r\nPRODID:-//Acme//Scheduler 2.1//EN\r\n"));
}
