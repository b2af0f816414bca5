//! Student Record
//!
//! Client-side copy of the record served by the student collection API.

use serde::{Deserialize, Serialize};

/// A fitness log entry as returned by `/getall` and `/search/{id}`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: StudentFields,
}

/// The six editable fields, sent as a whole on update
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentFields {
    /// Shown as "Date" and used as the chart label
    #[serde(rename = "studentname")]
    pub student_name: String,
    /// Shown as "Description" / "Caption"
    #[serde(rename = "studentaddress")]
    pub student_address: String,
    pub status: String,
    #[serde(rename = "noofpushups")]
    pub pushups: String,
    #[serde(rename = "randistance")]
    pub ran_distance: String,
    #[serde(rename = "weightlifted")]
    pub weight_lifted: String,
}

/// Choices offered by the status select, blank first
pub const STATUS_OPTIONS: [(&str, &str); 5] = [
    ("", "Select Status"),
    ("Healthy", "Healthy"),
    ("Unwell", "Unwell"),
    ("Recovering", "Recovering"),
    ("Unknown", "Unknown"),
];
