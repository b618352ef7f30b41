//! Error types for building and serializing calendar components.
//!
//! ## Error Categories
//!
//! - **Invalid component types**: a type tag outside the RFC 5545 component set
//! - **Invalid children**: a node that cannot be nested under another node
//! - **Invalid property names**: a name with characters outside letters, digits and `-`
//! - **Invalid statuses**: a `STATUS` value outside the RFC 5545 status set
//! - **I/O Errors**: writer failures while emitting rendered text
//!
//! Both construction errors are raised at the point of misuse and are never
//! coerced into something valid.
//!
//! ## Examples
//!
//! ```rust
//! use icalgen::{Component, Error};
//!
//! let result = Component::new("VMEETING");
//! assert!(matches!(result, Err(Error::InvalidComponentType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building or rendering a component tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The type tag is not one of the RFC 5545 component names
    #[error("Type '{0}' is not an allowed component type")]
    InvalidComponentType(String),

    /// The property name is not a name token
    #[error("Property name '{0}' may only contain letters, digits and '-'")]
    InvalidPropertyName(String),

    /// The node cannot be attached as a child
    #[error("Invalid child component: {0}")]
    InvalidChildType(String),

    /// The status is not one of the RFC 5545 status values
    #[error("Status '{0}' is not an allowed status value")]
    InvalidStatus(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid component type error for the rejected tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::Error;
    ///
    /// let err = Error::invalid_component_type("VMEETING");
    /// assert!(err.to_string().contains("VMEETING"));
    /// ```
    pub fn invalid_component_type(tag: &str) -> Self {
        Error::InvalidComponentType(tag.to_string())
    }

    /// Creates an invalid property name error for the rejected name.
    pub fn invalid_property_name(name: &str) -> Self {
        Error::InvalidPropertyName(name.to_string())
    }

    /// Creates an invalid child error with a description of the rejected node.
    pub fn invalid_child_type(msg: &str) -> Self {
        Error::InvalidChildType(msg.to_string())
    }

    /// Creates an invalid status error.
    pub fn invalid_status(status: &str) -> Self {
        Error::InvalidStatus(status.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::custom(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
