//! The persisted root aggregate

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::department::Department;
use super::employee::Employee;
use super::request::EquipmentRequest;

/// The single root aggregate, persisted as one JSON blob.
///
/// Collections are plain vectors. Uniqueness of the keyed collections
/// (account email, department name, employee id) is enforced by the store
/// operations, not by the container itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub accounts: Vec<Account>,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub requests: Vec<EquipmentRequest>,
}
