//! The calendar component tree.
//!
//! A [`Component`] is one `BEGIN:`/`END:` block: a [`ComponentType`] tag, an ordered
//! [`PropertyMap`] and an ordered list of child components. Calendars, events,
//! to-dos, journals, alarms and timezones are all the same node type; the variant
//! constructors only differ in the default properties they seed.
//!
//! ## Construction order
//!
//! Every constructor fills the property map in three layers, later layers winning:
//!
//! 1. Base defaults: the bookkeeping `sequence` counter and a random `UID`.
//! 2. Caller supplied properties, names uppercased, values encoded.
//! 3. Required defaults of the variant (for example `VERSION` on a calendar, `STATUS`
//!    on an event). These cannot be replaced at construction time; use the setters
//!    afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use icalgen::Component;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let mut calendar = Component::calendar();
//! let event = calendar.add_event("Standup", "Daily sync", start, None, None);
//! event.set_alarm("Standup in 10 minutes", 0, 0, 10, 0);
//!
//! let ics = calendar.render();
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
//! assert!(ics.contains("SUMMARY:Standup\r\n"));
//! assert!(ics.contains("TRIGGER:-P0DT0H10M0S\r\n"));
//! ```

use crate::encode::{encode_value, escape, param_value};
use crate::kind::is_name_token;
use crate::time::{format_date_time, is_all_day_span, stamp_before, trigger_duration};
use crate::{ComponentType, Error, IcalOptions, PropertyMap, Result, Status};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Property name that changes the component type instead of being stored.
pub const TYPE_SELECTOR: &str = "TYPE";

/// Property name that sets the component timezone instead of being stored.
pub const TIMEZONE_SELECTOR: &str = "TIMEZONE";

/// Vendor flags marking an all-day event.
pub const ALL_DAY_FLAGS: [&str; 2] = ["X-FUNAMBOL-ALLDAY", "X-MICROSOFT-CDO-ALLDAYEVENT"];

/// Bookkeeping modification counter. Lowercase, so never rendered.
const SEQUENCE_COUNTER: &str = "sequence";

const TIME_PROPERTIES: [&str; 3] = ["DTSTART", "DTSTAMP", "DTEND"];

/// A node of the calendar component tree.
///
/// Nodes own their children; the tree has no parent pointers and children can only
/// be appended.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    kind: ComponentType,
    properties: PropertyMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Component>,
}

impl Component {
    /// Creates a component from a type tag such as `VEVENT` or `X-CUSTOM`.
    ///
    /// Prefer the variant constructors ([`Component::event`], ...) which seed the
    /// properties each variant needs.
    ///
    /// `tag` must be a fixed name or an `X-` name. IANA tokens such as `STANDARD`
    /// are built with [`ComponentType::iana`] and [`Component::of_type`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentType`] if `tag` is not a component name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::{Component, ComponentType};
    ///
    /// let node = Component::new("VJOURNAL").unwrap();
    /// assert_eq!(node.kind(), &ComponentType::Journal);
    /// assert!(Component::new("VMEETING").is_err());
    /// ```
    pub fn new(tag: &str) -> Result<Self> {
        Ok(Self::of_type(tag.parse()?))
    }

    /// Creates a component from a type tag and initial properties.
    ///
    /// Properties are applied with [`Component::set_property`], so a `type` entry
    /// changes the tag and a `timezone` entry sets the timezone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentType`] if `tag` or a `type` entry is invalid,
    /// and [`Error::InvalidPropertyName`] for a malformed property name.
    pub fn with_properties<I, K, V>(tag: &str, properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut component = Self::new(tag)?;
        component.set_properties(properties)?;
        Ok(component)
    }

    /// Creates a component of an already validated type, with base defaults only.
    #[must_use]
    pub fn of_type(kind: ComponentType) -> Self {
        log::debug!("Creating a {} component", kind);
        let mut properties = PropertyMap::with_capacity(8);
        properties.insert(SEQUENCE_COUNTER.to_string(), "0".to_string());
        properties.insert("UID".to_string(), Uuid::new_v4().to_string());

        Component {
            kind,
            properties,
            timezone: None,
            children: Vec::new(),
        }
    }

    /// Shared constructor of the variants: base defaults, then caller properties,
    /// then required defaults. Caller entries with malformed names are skipped.
    fn variant<I, K, V>(kind: ComponentType, properties: I, required: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut component = Self::of_type(kind);
        for (name, value) in properties {
            let name = name.as_ref().to_uppercase();
            match name.as_str() {
                // The variant fixes the type.
                TYPE_SELECTOR => {}
                TIMEZONE_SELECTOR => component.set_timezone(value.as_ref()),
                _ if !is_name_token(&name) => {
                    log::warn!("Skipping property with malformed name {name:?}");
                }
                _ => component.insert_encoded(name, value.as_ref()),
            }
        }
        for (name, value) in required {
            component.insert_encoded((*name).to_string(), value);
        }
        component
    }

    /// Creates an empty `VCALENDAR` root with default options.
    #[must_use]
    pub fn calendar() -> Self {
        Self::calendar_with(std::iter::empty::<(&str, &str)>())
    }

    /// Creates a `VCALENDAR` root with initial properties and default options.
    #[must_use]
    pub fn calendar_with<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::calendar_with_options(properties, &IcalOptions::default())
    }

    /// Creates a `VCALENDAR` root.
    ///
    /// Required defaults are `VERSION:2.0`, `PRODID` from `options`,
    /// `CALSCALE:GREGORIAN` and `X-PUBLISHED-TTL:1`. A `NAME` property is mirrored
    /// into `X-WR-CALNAME`, and a timezone (from a `timezone` entry or the options'
    /// default) into `X-WR-TIMEZONE`.
    ///
    /// `VERSION` is always rendered as the first property of a calendar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::{Component, IcalOptions};
    ///
    /// let calendar = Component::calendar_with_options(
    ///     [("name", "Team"), ("timezone", "Europe/Paris")],
    ///     &IcalOptions::default(),
    /// );
    /// assert_eq!(calendar.get_property("X-WR-CALNAME", ""), "Team");
    /// assert_eq!(calendar.get_property("X-WR-TIMEZONE", ""), "Europe/Paris");
    /// assert_eq!(calendar.timezone(), Some("Europe/Paris"));
    /// ```
    #[must_use]
    pub fn calendar_with_options<I, K, V>(properties: I, options: &IcalOptions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut calendar = Self::variant(
            ComponentType::Calendar,
            properties,
            &[
                ("VERSION", "2.0"),
                ("PRODID", options.product_id.as_str()),
                ("CALSCALE", "GREGORIAN"),
                ("X-PUBLISHED-TTL", "1"),
            ],
        );

        if let Some(name) = calendar.properties.get("NAME").map(str::to_string) {
            calendar.insert_raw("X-WR-CALNAME".to_string(), name);
        }
        if calendar.timezone.is_none() {
            if let Some(tzid) = &options.default_timezone {
                calendar.set_timezone(tzid);
            }
        }
        calendar
    }

    /// Creates a `VEVENT` with `STATUS:CONFIRMED` and `SEQUENCE:0`.
    #[must_use]
    pub fn event() -> Self {
        Self::event_with(std::iter::empty::<(&str, &str)>())
    }

    /// Creates a `VEVENT` with initial properties.
    #[must_use]
    pub fn event_with<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::variant(
            ComponentType::Event,
            properties,
            &[("STATUS", Status::Confirmed.as_str()), ("SEQUENCE", "0")],
        )
    }

    /// Creates a `VTODO`.
    #[must_use]
    pub fn todo() -> Self {
        Self::todo_with(std::iter::empty::<(&str, &str)>())
    }

    /// Creates a `VTODO` with initial properties.
    #[must_use]
    pub fn todo_with<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::variant(ComponentType::Todo, properties, &[])
    }

    /// Creates a `VJOURNAL`.
    #[must_use]
    pub fn journal() -> Self {
        Self::journal_with(std::iter::empty::<(&str, &str)>())
    }

    /// Creates a `VJOURNAL` with initial properties.
    #[must_use]
    pub fn journal_with<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::variant(ComponentType::Journal, properties, &[])
    }

    /// Creates a `VFREEBUSY`.
    #[must_use]
    pub fn free_busy() -> Self {
        Self::variant(ComponentType::FreeBusy, std::iter::empty::<(&str, &str)>(), &[])
    }

    /// Creates a `VALARM`. Usually built through [`Component::set_alarm`].
    #[must_use]
    pub fn alarm() -> Self {
        Self::alarm_with(std::iter::empty::<(&str, &str)>())
    }

    /// Creates a `VALARM` with initial properties.
    #[must_use]
    pub fn alarm_with<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::variant(ComponentType::Alarm, properties, &[])
    }

    /// Creates a `VTIMEZONE` for `tzid`.
    ///
    /// No `STANDARD`/`DAYLIGHT` rules are derived; attach them yourself with
    /// [`Component::standard`] and [`Component::daylight`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::Component;
    ///
    /// let mut tz = Component::vtimezone("Europe/Berlin");
    /// let mut standard = Component::standard();
    /// standard.set_properties([
    ///     ("DTSTART", "19701025T030000"),
    ///     ("TZOFFSETFROM", "+0200"),
    ///     ("TZOFFSETTO", "+0100"),
    /// ]).unwrap();
    /// tz.add_child(standard).unwrap();
    ///
    /// assert!(tz.render().contains("BEGIN:STANDARD\r\n"));
    /// ```
    #[must_use]
    pub fn vtimezone(tzid: &str) -> Self {
        Self::variant(ComponentType::Timezone, [("TZID", tzid)], &[])
    }

    /// Creates a `STANDARD` sub-component for a `VTIMEZONE`.
    #[must_use]
    pub fn standard() -> Self {
        Self::of_type(ComponentType::Iana("STANDARD".to_string()))
    }

    /// Creates a `DAYLIGHT` sub-component for a `VTIMEZONE`.
    #[must_use]
    pub fn daylight() -> Self {
        Self::of_type(ComponentType::Iana("DAYLIGHT".to_string()))
    }

    /// Returns the component type.
    pub fn kind(&self) -> &ComponentType {
        &self.kind
    }

    /// Returns the stored properties, bookkeeping entries included.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Returns the child components in attachment order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns the timezone identifier set with [`Component::set_timezone`].
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Returns the `UID` property, if present.
    pub fn uid(&self) -> Option<&str> {
        self.properties.get("UID")
    }

    /// Sets a property, uppercasing `name` and encoding `value`.
    ///
    /// Two names are reserved: `type` changes the component type (after validating
    /// it) and `timezone` calls [`Component::set_timezone`]. Neither is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentType`] when `name` is `type` and `value` is not
    /// a component name, and [`Error::InvalidPropertyName`] when `name` contains
    /// anything but letters, digits and `-`. The component is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::Component;
    ///
    /// let mut todo = Component::todo();
    /// todo.set_property("summary", "Write report").unwrap();
    /// assert_eq!(todo.get_property("SUMMARY", ""), "Write report");
    ///
    /// todo.set_property("type", "VJOURNAL").unwrap();
    /// assert_eq!(todo.kind().as_str(), "VJOURNAL");
    /// assert!(!todo.has_property("TYPE"));
    /// ```
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        let name = name.to_uppercase();
        match name.as_str() {
            TYPE_SELECTOR => {
                let kind: ComponentType = value.parse()?;
                log::debug!("Changing component type from {} to {}", self.kind, kind);
                self.kind = kind;
            }
            TIMEZONE_SELECTOR => self.set_timezone(value),
            _ if !is_name_token(&name) => return Err(Error::invalid_property_name(&name)),
            _ => self.insert_encoded(name, value),
        }
        Ok(())
    }

    /// Applies [`Component::set_property`] to each entry, in iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid `type` entry or property name; earlier entries stay
    /// applied.
    pub fn set_properties<I, K, V>(&mut self, properties: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in properties {
            self.set_property(name.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    /// Stores a property without case normalization or value encoding.
    ///
    /// Names that are not entirely uppercase are kept as bookkeeping and never
    /// rendered. Values must already be encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPropertyName`] when `name` contains anything but
    /// letters, digits and `-`.
    pub fn set_raw_property(&mut self, name: &str, value: &str) -> Result<()> {
        if !is_name_token(name) {
            return Err(Error::invalid_property_name(name));
        }
        self.insert_raw(name.to_string(), value.to_string());
        Ok(())
    }

    /// Removes a property by its (uppercased) name. A no-op if it is absent.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.remove(&name.to_uppercase())
    }

    /// Returns `true` if a property is stored under exactly `name`.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the stored (encoded) value of `name`, or `default`.
    ///
    /// Lookups are case-sensitive against the stored names, which are uppercase for
    /// everything set through [`Component::set_property`].
    pub fn get_property<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.properties.get(name).unwrap_or(default)
    }

    fn insert_encoded(&mut self, name: String, value: &str) {
        self.properties.insert(name, encode_value(value));
    }

    fn insert_raw(&mut self, name: String, value: String) {
        self.properties.insert(name, value);
    }

    /// Appends a child component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChildType`] if `child` is a `VCALENDAR`, which can
    /// only be a root. `self` is left unchanged.
    pub fn add_child(&mut self, child: Component) -> Result<()> {
        if child.kind.is_calendar() {
            return Err(Error::invalid_child_type(&format!(
                "{} cannot be nested inside {}",
                child.kind, self.kind
            )));
        }
        self.children.push(child);
        Ok(())
    }

    /// Appends each child in order with [`Component::add_child`].
    ///
    /// # Errors
    ///
    /// Stops at the first rejected child; earlier children stay attached.
    pub fn add_children<I>(&mut self, children: I) -> Result<()>
    where
        I: IntoIterator<Item = Component>,
    {
        for child in children {
            self.add_child(child)?;
        }
        Ok(())
    }

    /// Sets or clears the vendor all-day flags.
    ///
    /// Only the flags change; `DTSTART`/`DTEND` are left alone.
    pub fn set_all_day(&mut self, all_day: bool) {
        for flag in ALL_DAY_FLAGS {
            if all_day {
                self.insert_raw(flag.to_string(), "TRUE".to_string());
            } else {
                self.properties.remove(flag);
            }
        }
    }

    /// Returns `true` if both vendor all-day flags are set.
    pub fn is_all_day(&self) -> bool {
        ALL_DAY_FLAGS
            .iter()
            .all(|flag| self.properties.get(flag) == Some("TRUE"))
    }

    /// Sets `DTSTART`, `DTSTAMP` and `DTEND` using default options.
    ///
    /// See [`Component::set_time_with_options`].
    pub fn set_time(&mut self, start: NaiveDateTime, end: Option<NaiveDateTime>) {
        self.set_time_with_options(start, end, &IcalOptions::default());
    }

    /// Sets `DTSTART`, `DTSTAMP` and `DTEND`.
    ///
    /// `end` defaults to `start`. `DTSTAMP` is one second before `start`. When the
    /// node has a timezone, or `options` carries a default one, the names gain a
    /// `;TZID=` parameter. Times set by an earlier call are replaced.
    ///
    /// Afterwards the all-day flags are recomputed with
    /// [`is_all_day_span`](crate::time::is_all_day_span).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use icalgen::{Component, IcalOptions};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    /// let options = IcalOptions::new().with_default_timezone("Europe/Rome");
    ///
    /// let mut event = Component::event();
    /// event.set_time_with_options(
    ///     day.and_hms_opt(0, 0, 0).unwrap(),
    ///     Some(day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap()),
    ///     &options,
    /// );
    ///
    /// assert_eq!(event.get_property("DTSTART;TZID=Europe/Rome", ""), "20240701T000000");
    /// assert_eq!(event.get_property("DTSTAMP;TZID=Europe/Rome", ""), "20240630T235959");
    /// assert!(event.is_all_day());
    /// ```
    pub fn set_time_with_options(
        &mut self,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        options: &IcalOptions,
    ) {
        let end = end.unwrap_or(start);
        let tzid = self
            .timezone
            .clone()
            .or_else(|| options.default_timezone.clone());
        let key = |name: &str| match &tzid {
            Some(tzid) => format!("{name};TZID={}", param_value(tzid)),
            None => name.to_string(),
        };

        self.properties.retain(|name, _| {
            let name = property_name(name);
            !TIME_PROPERTIES.iter().any(|time| *time == name)
        });
        self.insert_encoded(key("DTSTART"), &format_date_time(&start));
        self.insert_encoded(key("DTSTAMP"), &format_date_time(&stamp_before(&start)));
        self.insert_encoded(key("DTEND"), &format_date_time(&end));

        self.set_all_day(is_all_day_span(&start, &end));
    }

    /// Attaches a display alarm that fires before the component starts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::Component;
    ///
    /// let mut event = Component::event();
    /// event.set_alarm("Reminder", 0, 1, 0, 0);
    ///
    /// let alarm = &event.children()[0];
    /// assert_eq!(alarm.get_property("ACTION", ""), "DISPLAY");
    /// assert_eq!(alarm.get_property("TRIGGER", ""), "-P0DT1H0M0S");
    /// ```
    pub fn set_alarm(&mut self, text: &str, days: u32, hours: u32, minutes: u32, seconds: u32) {
        let trigger = trigger_duration(days, hours, minutes, seconds);
        let alarm = Self::alarm_with([
            ("ACTION", "DISPLAY"),
            ("DESCRIPTION", text),
            ("TRIGGER", trigger.as_str()),
        ]);
        self.children.push(alarm);
    }

    /// Records the timezone identifier used by [`Component::set_time`].
    ///
    /// On a calendar it is also written as `X-WR-TIMEZONE`. The identifier is not
    /// checked against any timezone database; line breaks in it are escaped.
    pub fn set_timezone(&mut self, tzid: &str) {
        let tzid = escape(tzid);
        if self.kind.is_calendar() {
            self.insert_encoded("X-WR-TIMEZONE".to_string(), &tzid);
        }
        self.timezone = Some(tzid.into_owned());
    }

    /// Sets `SUMMARY`.
    pub fn set_title(&mut self, title: &str) {
        self.insert_encoded("SUMMARY".to_string(), title);
    }

    /// Sets `DESCRIPTION`.
    pub fn set_description(&mut self, description: &str) {
        self.insert_encoded("DESCRIPTION".to_string(), description);
    }

    /// Sets `ORGANIZER`, e.g. `mailto:alice@example.com`.
    pub fn set_owner(&mut self, organizer: &str) {
        self.insert_encoded("ORGANIZER".to_string(), organizer);
    }

    /// Sets `STATUS`.
    pub fn set_status(&mut self, status: Status) {
        self.insert_encoded("STATUS".to_string(), status.as_str());
    }

    /// Sets `LOCATION`.
    pub fn set_location(&mut self, location: &str) {
        self.insert_encoded("LOCATION".to_string(), location);
    }

    /// Sets `URL`.
    pub fn set_url(&mut self, url: &str) {
        self.insert_encoded("URL".to_string(), url);
    }

    /// Builds an event, attaches it and returns it for further editing.
    ///
    /// Uses default options; see [`Component::add_event_with_options`].
    pub fn add_event(
        &mut self,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        timezone: Option<&str>,
    ) -> &mut Component {
        self.add_event_with_options(
            title,
            description,
            start,
            end,
            timezone,
            &IcalOptions::default(),
        )
    }

    /// Builds an event with title, description, timezone and times, attaches it and
    /// returns it for further editing.
    pub fn add_event_with_options(
        &mut self,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        timezone: Option<&str>,
        options: &IcalOptions,
    ) -> &mut Component {
        let mut event = Self::event();
        event.set_title(title);
        event.set_description(description);
        if let Some(tzid) = timezone {
            event.set_timezone(tzid);
        }
        event.set_time_with_options(start, end, options);

        let index = self.children.len();
        self.children.push(event);
        &mut self.children[index]
    }

    /// Renders this component and its subtree with default options.
    #[must_use]
    pub fn render(&self) -> String {
        crate::to_string(self)
    }

    /// Renders this component and its subtree.
    #[must_use]
    pub fn render_with_options(&self, options: &IcalOptions) -> String {
        crate::to_string_with_options(self, options)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The name part of a stored key: everything before the first `;`.
pub(crate) fn property_name(key: &str) -> &str {
    key.split_once(';').map_or(key, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn keys(component: &Component) -> Vec<&str> {
        component.properties().keys().map(String::as_str).collect()
    }

    #[test]
    fn test_base_defaults() {
        let node = Component::new("VTODO").unwrap();
        assert_eq!(node.get_property("sequence", "missing"), "0");
        assert!(Uuid::parse_str(node.uid().unwrap()).is_ok());
        assert!(node.children().is_empty());
        assert!(node.timezone().is_none());
    }

    #[test]
    fn test_unique_identifiers() {
        assert_ne!(Component::event().uid(), Component::event().uid());
    }

    #[test]
    fn test_invalid_type_tag() {
        assert_eq!(
            Component::new("VMEETING"),
            Err(Error::InvalidComponentType("VMEETING".to_string()))
        );
        assert!(Component::with_properties("VEVENT", [("type", "nope")]).is_err());
    }

    #[test]
    fn test_caller_properties_overlay_base_defaults() {
        let todo = Component::todo_with([("uid", "fixed@example.com"), ("summary", "Taxes")]);
        assert_eq!(todo.uid(), Some("fixed@example.com"));
        assert_eq!(keys(&todo), vec!["sequence", "UID", "SUMMARY"]);
    }

    #[test]
    fn test_required_defaults_win_at_construction() {
        let event = Component::event_with([("status", "CANCELLED"), ("sequence", "4")]);
        assert_eq!(event.get_property("STATUS", ""), "CONFIRMED");
        assert_eq!(event.get_property("SEQUENCE", ""), "0");
        // The bookkeeping counter is a different, lowercase key.
        assert_eq!(event.get_property("sequence", ""), "0");
    }

    #[test]
    fn test_variant_ignores_type_entry() {
        let journal = Component::journal_with([("type", "VEVENT")]);
        assert_eq!(journal.kind(), &ComponentType::Journal);
        assert!(!journal.has_property("TYPE"));
    }

    #[test]
    fn test_calendar_defaults() {
        let calendar = Component::calendar();
        assert_eq!(calendar.get_property("VERSION", ""), "2.0");
        assert_eq!(
            calendar.get_property("PRODID", ""),
            crate::options::DEFAULT_PRODUCT_ID
        );
        assert_eq!(calendar.get_property("CALSCALE", ""), "GREGORIAN");
        assert_eq!(calendar.get_property("X-PUBLISHED-TTL", ""), "1");
        assert!(!calendar.has_property("X-WR-CALNAME"));
        assert!(!calendar.has_property("X-WR-TIMEZONE"));
    }

    #[test]
    fn test_calendar_timezone_from_options() {
        let options = IcalOptions::new().with_default_timezone("Asia/Tokyo");
        let calendar = Component::calendar_with_options([("name", "Ops")], &options);
        assert_eq!(calendar.timezone(), Some("Asia/Tokyo"));
        assert_eq!(calendar.get_property("X-WR-TIMEZONE", ""), "Asia/Tokyo");
        assert_eq!(calendar.get_property("X-WR-CALNAME", ""), "Ops");
    }

    #[test]
    fn test_set_property_normalizes_and_encodes() {
        let mut event = Component::event();
        event.set_property("Description", "two\nlines").unwrap();
        assert_eq!(event.get_property("DESCRIPTION", ""), "two\\nlines");
        assert!(!event.has_property("Description"));
    }

    #[test]
    fn test_set_property_last_write_wins() {
        let mut event = Component::event();
        event.set_property("location", "A").unwrap();
        event.set_property("LOCATION", "B").unwrap();
        assert_eq!(event.get_property("LOCATION", ""), "B");
        assert_eq!(
            keys(&event).iter().filter(|k| **k == "LOCATION").count(),
            1
        );
    }

    #[test]
    fn test_invalid_type_change_leaves_component() {
        let mut event = Component::event();
        assert!(event.set_property("type", "VNOPE").is_err());
        assert_eq!(event.kind(), &ComponentType::Event);
    }

    #[test]
    fn test_set_property_rejects_malformed_names() {
        let mut event = Component::event();
        let before = event.clone();
        for name in ["x-a:1\r\nEND:VEVENT\r\nBEGIN:X-EVIL", "DTSTART;TZID=UTC", "X A", ""] {
            let err = event.set_property(name, "v").unwrap_err();
            assert!(matches!(err, Error::InvalidPropertyName(_)));
        }
        assert_eq!(event, before);
        assert!(!event.render().contains("X-EVIL"));
        assert!(event.set_raw_property("X-A\r\nX-B", "v").is_err());
    }

    #[test]
    fn test_variant_skips_malformed_names() {
        let todo = Component::todo_with([("x-a:1\r\nEND:VTODO", "v"), ("summary", "Kept")]);
        assert_eq!(keys(&todo), vec!["sequence", "UID", "SUMMARY"]);
        assert_eq!(todo.render().matches("END:VTODO").count(), 1);
    }

    #[test]
    fn test_set_properties_empty_is_noop() {
        let mut event = Component::event();
        let before = event.clone();
        event
            .set_properties(Vec::<(String, String)>::new())
            .unwrap();
        assert_eq!(event, before);
    }

    #[test]
    fn test_remove_property() {
        let mut event = Component::event();
        event.set_location("Room 1");
        assert_eq!(event.remove_property("location"), Some("Room 1".to_string()));
        assert_eq!(event.remove_property("location"), None);
        assert_eq!(event.get_property("LOCATION", "none"), "none");
    }

    #[test]
    fn test_add_child_rejects_calendar() {
        let mut event = Component::event();
        let err = event.add_child(Component::calendar()).unwrap_err();
        assert!(matches!(err, Error::InvalidChildType(_)));
        assert!(event.children().is_empty());
    }

    #[test]
    fn test_add_children_keeps_order() {
        let mut calendar = Component::calendar();
        calendar
            .add_children(vec![Component::event(), Component::todo(), Component::journal()])
            .unwrap();
        let kinds: Vec<_> = calendar.children().iter().map(|c| c.kind().as_str()).collect();
        assert_eq!(kinds, vec!["VEVENT", "VTODO", "VJOURNAL"]);
    }

    #[test]
    fn test_set_all_day_toggle() {
        let mut event = Component::event();
        event.set_all_day(true);
        for flag in ALL_DAY_FLAGS {
            assert_eq!(event.get_property(flag, ""), "TRUE");
        }
        event.set_all_day(false);
        for flag in ALL_DAY_FLAGS {
            assert!(!event.has_property(flag));
        }
        // Clearing flags that are absent is fine.
        event.set_all_day(false);
        assert!(!event.is_all_day());
    }

    #[test]
    fn test_set_time_without_timezone() {
        let mut event = Component::event();
        event.set_time(at(2024, 3, 5, 9, 0, 0), Some(at(2024, 3, 5, 9, 30, 0)));
        assert_eq!(event.get_property("DTSTART", ""), "20240305T090000");
        assert_eq!(event.get_property("DTSTAMP", ""), "20240305T085959");
        assert_eq!(event.get_property("DTEND", ""), "20240305T093000");
        assert!(!event.is_all_day());
    }

    #[test]
    fn test_set_time_end_defaults_to_start() {
        let mut event = Component::event();
        event.set_time(at(2024, 3, 5, 0, 0, 0), None);
        assert_eq!(event.get_property("DTEND", ""), "20240305T000000");
        assert!(!event.is_all_day());
    }

    #[test]
    fn test_set_time_node_timezone_beats_default() {
        let mut event = Component::event();
        event.set_timezone("Europe/London");
        let options = IcalOptions::new().with_default_timezone("America/Chicago");
        event.set_time_with_options(at(2024, 3, 5, 9, 0, 0), None, &options);
        assert!(event.has_property("DTSTART;TZID=Europe/London"));
        assert!(!event.has_property("DTSTART;TZID=America/Chicago"));
    }

    #[test]
    fn test_set_time_replaces_previous_times() {
        let mut event = Component::event();
        event.set_time(at(2024, 3, 5, 9, 0, 0), None);
        event.set_timezone("Europe/London");
        event.set_time(at(2024, 3, 6, 9, 0, 0), None);

        assert!(!event.has_property("DTSTART"));
        assert_eq!(
            event.get_property("DTSTART;TZID=Europe/London", ""),
            "20240306T090000"
        );
    }

    #[test]
    fn test_set_time_clears_stale_all_day() {
        let mut event = Component::event();
        event.set_time(at(2024, 3, 5, 0, 0, 0), Some(at(2024, 3, 6, 0, 0, 0)));
        assert!(event.is_all_day());
        event.set_time(at(2024, 3, 5, 0, 0, 0), Some(at(2024, 3, 5, 1, 0, 0)));
        assert!(!event.is_all_day());
    }

    #[test]
    fn test_timezone_line_breaks_stay_inside_the_key() {
        let mut event = Component::event();
        event.set_timezone("Europe/Berlin\r\nX-INJ:1");
        event.set_time(at(2024, 1, 1, 9, 0, 0), None);

        assert_eq!(event.timezone(), Some("Europe/Berlin\\r\\nX-INJ:1"));
        assert_eq!(
            event.get_property("DTSTART;TZID=\"Europe/Berlin\\r\\nX-INJ:1\"", ""),
            "20240101T090000"
        );
        let ics = event.render();
        assert!(!ics.contains("\r\nX-INJ"));
        assert!(ics.lines().all(|line| !line.starts_with("X-INJ")));
    }

    #[test]
    fn test_typed_setters() {
        let mut event = Component::event();
        event.set_title("Launch");
        event.set_owner("mailto:ops@example.com");
        event.set_status(Status::Tentative);
        event.set_url("https://example.com/launch");
        assert_eq!(event.get_property("SUMMARY", ""), "Launch");
        assert_eq!(event.get_property("ORGANIZER", ""), "mailto:ops@example.com");
        assert_eq!(event.get_property("STATUS", ""), "TENTATIVE");
        assert_eq!(event.get_property("URL", ""), "https://example.com/launch");
    }

    #[test]
    fn test_set_timezone_only_tags_calendars() {
        let mut event = Component::event();
        event.set_timezone("UTC");
        assert!(!event.has_property("X-WR-TIMEZONE"));
        assert_eq!(event.timezone(), Some("UTC"));
    }

    #[test]
    fn test_add_event_returns_attached_event() {
        let mut calendar = Component::calendar();
        let event = calendar.add_event(
            "Standup",
            "Daily sync",
            at(2024, 3, 5, 9, 0, 0),
            None,
            Some("Europe/Berlin"),
        );
        event.set_location("Room 4");

        let event = &calendar.children()[0];
        assert_eq!(event.get_property("LOCATION", ""), "Room 4");
        assert_eq!(event.timezone(), Some("Europe/Berlin"));
        assert!(event.has_property("DTSTART;TZID=Europe/Berlin"));
    }

    #[test]
    fn test_timezone_subcomponents() {
        let mut tz = Component::vtimezone("Europe/Berlin");
        tz.add_children([Component::standard(), Component::daylight()])
            .unwrap();
        assert_eq!(tz.get_property("TZID", ""), "Europe/Berlin");
        assert_eq!(tz.children()[0].kind().as_str(), "STANDARD");
        assert_eq!(tz.children()[1].kind().as_str(), "DAYLIGHT");
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("DTSTART;TZID=Europe/Berlin"), "DTSTART");
        assert_eq!(property_name("SUMMARY"), "SUMMARY");
    }
}
