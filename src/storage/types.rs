//! Core data types for the fitlog record store
//!
//! - `Student`: one fitness log entry as stored and served
//! - `StudentFields`: the six mutable fields, used as the create/update body
//! - `Status`: the recognised health states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest accepted date label or caption, in characters
pub const MAX_TEXT_LEN: usize = 200;

/// A single fitness log entry
///
/// The wire format keeps the collection's historical field names
/// (`_id`, `studentname`, `noofpushups`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Opaque identifier assigned by the store
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl Student {
    pub fn new(id: impl Into<String>, fields: StudentFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// The six mutable fields of a log entry
///
/// Updates always replace all six at once. `student_name` doubles as the
/// entry date: the dashboard labels chart points with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentFields {
    #[serde(rename = "studentname")]
    pub student_name: String,
    #[serde(rename = "studentaddress")]
    pub student_address: String,
    pub status: String,
    #[serde(rename = "noofpushups")]
    pub pushups: String,
    /// Kilometers
    #[serde(rename = "randistance")]
    pub ran_distance: String,
    /// Kilograms
    #[serde(rename = "weightlifted")]
    pub weight_lifted: String,
}

impl StudentFields {
    /// Builder method: set the name/date label
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.student_name = name.into();
        self
    }

    /// Builder method: set the free-text caption
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.student_address = address.into();
        self
    }

    /// Builder method: set the status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builder method: set the three exercise measurements
    pub fn exercise(
        mut self,
        pushups: impl Into<String>,
        ran_distance: impl Into<String>,
        weight_lifted: impl Into<String>,
    ) -> Self {
        self.pushups = pushups.into();
        self.ran_distance = ran_distance.into();
        self.weight_lifted = weight_lifted.into();
        self
    }

    /// Check the fields before they are stored.
    ///
    /// Text is capped at [`MAX_TEXT_LEN`], status must be empty or a known
    /// [`Status`], measurements must be empty or a finite number.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (field, value) in [
            ("studentname", &self.student_name),
            ("studentaddress", &self.student_address),
        ] {
            if value.chars().count() > MAX_TEXT_LEN {
                return Err(FieldError::TooLong {
                    field,
                    max: MAX_TEXT_LEN,
                });
            }
        }

        if !Status::is_valid(&self.status) {
            return Err(FieldError::InvalidStatus(self.status.clone()));
        }

        for (field, value) in [
            ("noofpushups", &self.pushups),
            ("randistance", &self.ran_distance),
            ("weightlifted", &self.weight_lifted),
        ] {
            if !is_numeric_or_empty(value) {
                return Err(FieldError::NotNumeric {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_numeric_or_empty(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// A field value the store refuses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid status: {0}. Use Healthy, Unwell, Recovering, Unknown or leave empty")]
    InvalidStatus(String),

    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },
}

/// Health status of an entry
///
/// An empty status string is also accepted by the store and means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Healthy,
    Unwell,
    Recovering,
    Unknown,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Healthy,
        Status::Unwell,
        Status::Recovering,
        Status::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Healthy => "Healthy",
            Status::Unwell => "Unwell",
            Status::Recovering => "Recovering",
            Status::Unknown => "Unknown",
        }
    }

    /// Whether a raw status string is acceptable for storage
    pub fn is_valid(raw: &str) -> bool {
        raw.is_empty() || raw.parse::<Status>().is_ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status: {}", s))
    }
}
