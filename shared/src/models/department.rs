//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity, keyed by `name`
///
/// Departments are created and listed only; rename and delete are outside
/// the current scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub description: String,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub description: String,
}
