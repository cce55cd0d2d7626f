//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity, keyed by `id`
///
/// `name` is a snapshot of the linked account's full name taken when the
/// employee record is written; it does not follow later account edits.
/// `dept` holds a department name and is not validated against the
/// departments collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Reference to an `Account` email; must exist when the record is written
    pub email: String,
    pub position: String,
    pub dept: String,
    pub hire_date: String,
}

/// Upsert employee payload
///
/// Keyed by `id`: an existing id is replaced in place, a new one is
/// appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpsert {
    pub id: String,
    pub email: String,
    pub position: String,
    pub dept: String,
    pub hire_date: String,
}
