//! Equipment Request Model

use serde::{Deserialize, Serialize};

/// Request lifecycle status
///
/// Requests are created `Pending`; nothing in the core mutates the status
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Single line item on a request
///
/// `qty` carries the raw form value, matching the shape of previously
/// persisted documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub qty: String,
}

/// Equipment request submitted by an authenticated account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<RequestItem>,
    pub status: RequestStatus,
    /// Creation-time date string, stamped by the store
    pub date: String,
    /// Email of the submitting account
    pub employee_email: String,
}

/// Submit request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCreate {
    pub kind: String,
    pub items: Vec<RequestItem>,
}
