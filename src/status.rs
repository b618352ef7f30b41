//! Values of the `STATUS` property.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The RFC 5545 status values, across events, to-dos and journals.
///
/// # Examples
///
/// ```rust
/// use icalgen::Status;
///
/// let status: Status = "in-process".parse().unwrap();
/// assert_eq!(status, Status::InProcess);
/// assert_eq!(status.as_str(), "IN-PROCESS");
/// assert_eq!(Status::from_index(1), Some(Status::Confirmed));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Tentative,
    Confirmed,
    Cancelled,
    NeedsAction,
    Completed,
    InProcess,
    Draft,
    Final,
}

impl Status {
    /// All statuses, in their indexed order.
    pub const ALL: [Status; 8] = [
        Status::Tentative,
        Status::Confirmed,
        Status::Cancelled,
        Status::NeedsAction,
        Status::Completed,
        Status::InProcess,
        Status::Draft,
        Status::Final,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Tentative => "TENTATIVE",
            Status::Confirmed => "CONFIRMED",
            Status::Cancelled => "CANCELLED",
            Status::NeedsAction => "NEEDS-ACTION",
            Status::Completed => "COMPLETED",
            Status::InProcess => "IN-PROCESS",
            Status::Draft => "DRAFT",
            Status::Final => "FINAL",
        }
    }

    /// Looks a status up by its position in [`Status::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Status::ALL.get(index).copied()
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == upper)
            .ok_or_else(|| Error::invalid_status(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
