//! iCalendar serialization.
//!
//! This module provides the [`Serializer`] that renders a [`Component`] tree into
//! RFC 5545 text.
//!
//! ## Overview
//!
//! Rendering is a depth-first walk:
//!
//! 1. `BEGIN:<type>`
//! 2. One `NAME:value` line per property, in insertion order. Keys whose name part
//!    is not entirely uppercase are bookkeeping and skipped. A calendar always writes
//!    `VERSION` first.
//! 3. Each child, recursively, in the order it was attached.
//! 4. `END:<type>`
//!
//! Every line ends with the configured terminator (CRLF by default). Values are
//! written as stored; they were escaped and folded when they were set.
//!
//! ## Direct Serializer Usage
//!
//! Most users should call [`Component::render`] or the functions in the crate
//! root. The serializer can also render several trees into one buffer:
//!
//! ```rust
//! use icalgen::{Component, IcalOptions, Serializer};
//!
//! let mut serializer = Serializer::new(IcalOptions::default());
//! serializer.serialize_component(&Component::journal());
//! serializer.serialize_component(&Component::todo());
//!
//! let text = serializer.into_inner();
//! assert!(text.starts_with("BEGIN:VJOURNAL\r\n"));
//! assert!(text.ends_with("END:VTODO\r\n"));
//! ```

use crate::component::property_name;
use crate::encode::FOLD_SEPARATOR;
use crate::options::LineEnding;
use crate::{Component, IcalOptions};

/// The iCalendar serializer.
///
/// Created via [`Serializer::new`] with rendering options.
pub struct Serializer {
    output: String,
    options: IcalOptions,
}

impl Serializer {
    pub fn new(options: IcalOptions) -> Self {
        Serializer {
            output: String::with_capacity(512),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `component` and its subtree to the output.
    pub fn serialize_component(&mut self, component: &Component) {
        log::trace!(
            "Rendering {} with {} properties and {} children",
            component.kind(),
            component.properties().len(),
            component.children().len()
        );

        self.write_line(&format!("BEGIN:{}", component.kind()));

        let is_calendar = component.kind().is_calendar();
        if is_calendar {
            if let Some(version) = component.properties().get("VERSION") {
                self.write_property(component, "VERSION", version);
            }
        }
        for (key, value) in component.properties() {
            if (is_calendar && key == "VERSION") || !is_rendered_key(key) {
                continue;
            }
            self.write_property(component, key, value);
        }

        for child in component.children() {
            self.serialize_component(child);
        }

        self.write_line(&format!("END:{}", component.kind()));
    }

    fn write_property(&mut self, component: &Component, key: &str, value: &str) {
        let key = match component.timezone() {
            Some(tzid) if self.options.legacy_dtstart_key && key == "DTSTART" => {
                log::warn!("Writing DTSTART under its timezone id {tzid:?} (legacy key)");
                tzid
            }
            _ => key,
        };

        match self.options.line_ending {
            LineEnding::Crlf => self.write_line(&format!("{key}:{value}")),
            LineEnding::Lf => {
                let value = value.replace(FOLD_SEPARATOR, "\n ");
                self.write_line(&format!("{key}:{value}"));
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push_str(self.options.line_ending.as_str());
    }
}

/// Returns `true` if the name part of `key` is entirely uppercase.
///
/// Parameters after `;` (such as a mixed-case TZID) are not considered.
#[inline]
fn is_rendered_key(key: &str) -> bool {
    let name = property_name(key);
    !name.is_empty() && name.to_uppercase() == name
}
