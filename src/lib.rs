//! # icalgen
//!
//! Build calendar objects in memory and serialize them to iCalendar (RFC 5545) text.
//!
//! ## What does it do?
//!
//! `icalgen` models a calendar as a tree of [`Component`] nodes. Each node has a type
//! (`VCALENDAR`, `VEVENT`, `VTODO`, `VJOURNAL`, `VFREEBUSY`, `VTIMEZONE`, `VALARM`, or
//! an extension), an ordered map of properties and an ordered list of children.
//! Rendering walks the tree and writes `BEGIN:`/`END:` blocks with one content line
//! per property.
//!
//! It is meant for applications that need to emit `.ics` files without adopting a
//! full calendar engine. Parsing existing iCalendar text and validating property
//! values against the RFC grammar are out of scope.
//!
//! ## Key Features
//!
//! - **Ordered output**: properties render in insertion order, `VERSION` first on calendars
//! - **Safe values**: line breaks are escaped and long values folded on insertion
//! - **Variant constructors**: calendars, events, to-dos, journals, alarms and timezones
//!   come with the properties RFC 5545 expects
//! - **Explicit configuration**: default timezone and product id travel in [`IcalOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use icalgen::Component;
//!
//! let t0 = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let mut calendar = Component::calendar();
//! calendar.add_event(
//!     "Standup",
//!     "Daily sync",
//!     t0,
//!     Some(t0 + chrono::Duration::minutes(30)),
//!     None,
//! );
//!
//! let ics = calendar.render();
//! assert!(ics.contains("BEGIN:VEVENT\r\n"));
//! assert!(ics.contains("DTSTART:20240305T090000\r\n"));
//! assert!(ics.contains("DTEND:20240305T093000\r\n"));
//! assert!(ics.ends_with("END:VCALENDAR\r\n"));
//! ```
//!
//! ## Output Format
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:-//icalgen//icalgen MIMEDIR//EN
//! ...
//! BEGIN:VEVENT
//! SUMMARY:Standup
//! ...
//! END:VEVENT
//! END:VCALENDAR
//! ```
//!
//! Every line ends with CRLF. Values longer than 65 characters continue on lines
//! starting with a single space.
//!
//! ## Serving Files
//!
//! The crate does not write HTTP responses. [`download_headers`] returns the header
//! pair a handler should set before writing the rendered text as the body.
//!
//! ## Threading
//!
//! Trees are plain owned data: build on one thread, render, and move or share the
//! result. Mutating one tree from several threads needs external locking.

pub mod component;
pub mod encode;
pub mod error;
pub mod kind;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod status;
pub mod time;

pub use component::Component;
pub use error::{Error, Result};
pub use kind::ComponentType;
pub use map::PropertyMap;
pub use options::{IcalOptions, LineEnding};
pub use ser::Serializer;
pub use status::Status;

use std::io;

/// MIME type of iCalendar files.
pub const CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Render a component tree with default options.
///
/// # Examples
///
/// ```rust
/// use icalgen::{to_string, Component};
///
/// let text = to_string(&Component::todo());
/// assert!(text.starts_with("BEGIN:VTODO\r\n"));
/// ```
#[must_use]
pub fn to_string(component: &Component) -> String {
    to_string_with_options(component, &IcalOptions::default())
}

/// Render a component tree with custom options.
///
/// # Examples
///
/// ```rust
/// use icalgen::{to_string_with_options, Component, IcalOptions, LineEnding};
///
/// let options = IcalOptions::new().with_line_ending(LineEnding::Lf);
/// let text = to_string_with_options(&Component::todo(), &options);
/// assert!(!text.contains('\r'));
/// ```
#[must_use]
pub fn to_string_with_options(component: &Component, options: &IcalOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_component(component);
    serializer.into_inner()
}

/// Render a component tree to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use icalgen::{to_writer, Component};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Component::calendar()).unwrap();
/// assert!(buffer.starts_with(b"BEGIN:VCALENDAR\r\n"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, component: &Component) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, component, &IcalOptions::default())
}

/// Render a component tree to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    component: &Component,
    options: &IcalOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(component, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Dump a component tree as compact JSON, for debugging.
///
/// The JSON view holds the type, the stored properties (bookkeeping entries
/// included), the timezone and the children. It is not an interchange format.
///
/// # Examples
///
/// ```rust
/// use icalgen::{to_json, Component};
///
/// let json = to_json(&Component::todo()).unwrap();
/// assert!(json.starts_with(r#"{"type":"VTODO","properties":{"#));
/// ```
///
/// # Errors
///
/// Returns [`Error::Custom`] if JSON encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json(component: &Component) -> Result<String> {
    Ok(serde_json::to_string(component)?)
}

/// Dump a component tree as indented JSON, for debugging.
///
/// # Errors
///
/// Returns [`Error::Custom`] if JSON encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_pretty(component: &Component) -> Result<String> {
    Ok(serde_json::to_string_pretty(component)?)
}

/// Headers for serving rendered text as a file download.
///
/// Control characters and quotes are dropped from `filename`.
///
/// # Examples
///
/// ```rust
/// use icalgen::download_headers;
///
/// let headers = download_headers("team.ics");
/// assert_eq!(headers[0], ("Content-Type", "text/calendar; charset=utf-8".to_string()));
/// assert_eq!(headers[1], ("Content-Disposition", "attachment; filename=team.ics".to_string()));
/// ```
#[must_use]
pub fn download_headers(filename: &str) -> [(&'static str, String); 2] {
    let filename: String = filename
        .chars()
        .filter(|ch| !ch.is_control() && *ch != '"')
        .collect();
    [
        ("Content-Type", CONTENT_TYPE.to_string()),
        (
            "Content-Disposition",
            format!("attachment; filename={filename}"),
        ),
    ]
}
