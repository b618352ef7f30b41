//! Component type tags.
//!
//! Every [`Component`](crate::Component) carries a [`ComponentType`] that names its
//! role in the tree and is written on its `BEGIN:`/`END:` lines. The set is closed:
//!
//! | Variant | Tag |
//! |---------|-----|
//! | `Calendar` | `VCALENDAR` |
//! | `Event` | `VEVENT` |
//! | `Todo` | `VTODO` |
//! | `Journal` | `VJOURNAL` |
//! | `FreeBusy` | `VFREEBUSY` |
//! | `Timezone` | `VTIMEZONE` |
//! | `Alarm` | `VALARM` |
//! | `Experimental` | `X-` followed by letters, digits and `-` |
//! | `Iana` | an IANA registered token, e.g. `STANDARD` |
//!
//! Parsing a tag with [`str::parse`] accepts the fixed names and the experimental
//! pattern. IANA tokens are only produced by [`ComponentType::iana`], so a typo such as
//! `VEVNT` is rejected instead of silently becoming a token.
//!
//! ```rust
//! use icalgen::ComponentType;
//!
//! let kind: ComponentType = "vevent".parse().unwrap();
//! assert_eq!(kind, ComponentType::Event);
//! assert_eq!(kind.as_str(), "VEVENT");
//!
//! let custom: ComponentType = "X-WR-GROUP".parse().unwrap();
//! assert!(custom.is_experimental());
//!
//! assert!("VMEETING".parse::<ComponentType>().is_err());
//! ```

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static X_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^X-[A-Za-z0-9-]+$").expect("X-name pattern is valid"));

static NAME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("name token pattern is valid"));

/// Returns `true` if `value` is a non-empty run of letters, digits and `-`.
///
/// Component tags and property names share this shape.
pub(crate) fn is_name_token(value: &str) -> bool {
    NAME_TOKEN.is_match(value)
}

/// The role of a component node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Calendar,
    Event,
    Todo,
    Journal,
    FreeBusy,
    Timezone,
    Alarm,
    /// An `X-` prefixed extension component, stored uppercase.
    Experimental(String),
    /// An IANA registered component token, stored uppercase.
    Iana(String),
}

impl ComponentType {
    /// Returns the tag written on `BEGIN:` and `END:` lines.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Calendar => "VCALENDAR",
            ComponentType::Event => "VEVENT",
            ComponentType::Todo => "VTODO",
            ComponentType::Journal => "VJOURNAL",
            ComponentType::FreeBusy => "VFREEBUSY",
            ComponentType::Timezone => "VTIMEZONE",
            ComponentType::Alarm => "VALARM",
            ComponentType::Experimental(name) | ComponentType::Iana(name) => name,
        }
    }

    /// Builds a type tag from an IANA token such as `STANDARD` or `DAYLIGHT`.
    ///
    /// Fixed names and `X-` names map to their own variants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentType`] if `token` is empty or contains
    /// characters other than letters, digits and `-`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::ComponentType;
    ///
    /// let standard = ComponentType::iana("standard").unwrap();
    /// assert_eq!(standard.as_str(), "STANDARD");
    /// assert_eq!(ComponentType::iana("VTODO").unwrap(), ComponentType::Todo);
    /// assert!(ComponentType::iana("NOT A TOKEN").is_err());
    /// ```
    pub fn iana(token: &str) -> Result<Self> {
        if let Ok(kind) = token.parse::<ComponentType>() {
            return Ok(kind);
        }
        if is_name_token(token) {
            Ok(ComponentType::Iana(token.to_uppercase()))
        } else {
            Err(Error::invalid_component_type(token))
        }
    }

    /// Returns `true` for `X-` extension components.
    #[must_use]
    pub fn is_experimental(&self) -> bool {
        matches!(self, ComponentType::Experimental(_))
    }

    /// Returns `true` for the calendar root.
    #[must_use]
    pub fn is_calendar(&self) -> bool {
        matches!(self, ComponentType::Calendar)
    }
}

impl FromStr for ComponentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        let kind = match upper.as_str() {
            "VCALENDAR" => ComponentType::Calendar,
            "VEVENT" => ComponentType::Event,
            "VTODO" => ComponentType::Todo,
            "VJOURNAL" => ComponentType::Journal,
            "VFREEBUSY" => ComponentType::FreeBusy,
            "VTIMEZONE" => ComponentType::Timezone,
            "VALARM" => ComponentType::Alarm,
            _ if X_NAME.is_match(&upper) => ComponentType::Experimental(upper),
            _ => return Err(Error::invalid_component_type(s)),
        };
        Ok(kind)
    }
}

impl TryFrom<&str> for ComponentType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
