//! Configuration options for building and rendering components.
//!
//! This module provides types to customize how trees are built and written:
//!
//! - [`IcalOptions`]: Main configuration struct
//! - [`LineEnding`]: Line terminator used by the serializer
//!
//! Options are passed explicitly to the calls that need them; nothing is read from
//! global state, so the same tree always renders the same way for the same options.
//!
//! ## Examples
//!
//! ```rust
//! use icalgen::{Component, IcalOptions};
//!
//! let options = IcalOptions::new()
//!     .with_default_timezone("Europe/Berlin")
//!     .with_product_id("-//Example Corp//Planner//EN");
//!
//! let calendar = Component::calendar_with_options([("X-WR-CALNAME", "Team")], &options);
//! assert_eq!(
//!     calendar.get_property("PRODID", ""),
//!     "-//Example Corp//Planner//EN"
//! );
//! ```

/// Product identifier written to `PRODID` unless overridden.
pub const DEFAULT_PRODUCT_ID: &str = "-//icalgen//icalgen MIMEDIR//EN";

/// Line terminator choice for rendered output.
///
/// RFC 5545 requires CRLF; `Lf` exists for logs and terminal debugging.
///
/// # Examples
///
/// ```rust
/// use icalgen::LineEnding;
///
/// assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Configuration for component construction and rendering.
///
/// # Examples
///
/// ```rust
/// use icalgen::{IcalOptions, LineEnding};
///
/// // RFC output, no default timezone
/// let options = IcalOptions::new();
/// assert!(options.default_timezone.is_none());
///
/// // Custom configuration
/// let options = IcalOptions::new()
///     .with_default_timezone("America/New_York")
///     .with_line_ending(LineEnding::Lf)
///     .with_legacy_dtstart_key(true);
/// assert!(options.legacy_dtstart_key);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcalOptions {
    /// TZID applied by [`Component::set_time_with_options`](crate::Component::set_time_with_options)
    /// when the node has no timezone of its own.
    pub default_timezone: Option<String>,
    /// `PRODID` for calendars built with these options.
    pub product_id: String,
    /// Render a literal `DTSTART` key as the node's timezone id.
    ///
    /// Older output of this format did this; some consumers were written against it.
    pub legacy_dtstart_key: bool,
    pub line_ending: LineEnding,
}

impl Default for IcalOptions {
    fn default() -> Self {
        IcalOptions {
            default_timezone: None,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            legacy_dtstart_key: false,
            line_ending: LineEnding::default(),
        }
    }
}

impl IcalOptions {
    /// Creates default options (CRLF output, no default timezone, no legacy quirks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timezone used when a node has none of its own.
    #[must_use]
    pub fn with_default_timezone(mut self, tzid: impl Into<String>) -> Self {
        self.default_timezone = Some(tzid.into());
        self
    }

    /// Sets the `PRODID` written by calendar constructors.
    #[must_use]
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Enables or disables the legacy `DTSTART` key substitution.
    #[must_use]
    pub fn with_legacy_dtstart_key(mut self, enabled: bool) -> Self {
        self.legacy_dtstart_key = enabled;
        self
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
