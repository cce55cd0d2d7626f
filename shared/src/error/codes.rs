//! Unified error codes for the portal core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account errors
//! - 4xxx: Department errors
//! - 5xxx: Employee errors
//! - 6xxx: Request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Account email has not been verified yet
    EmailNotVerified = 1003,
    /// Persisted session token no longer resolves to a valid account
    SessionInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,
    /// The active session's own account cannot be deleted
    CannotDeleteSelf = 2003,

    // ==================== 3xxx: Account ====================
    /// Account not found
    AccountNotFound = 3001,
    /// An account with that email already exists
    AccountExists = 3002,
    /// Password is required for new accounts
    PasswordRequired = 3003,
    /// Password shorter than the accepted minimum
    PasswordTooShort = 3004,

    // ==================== 4xxx: Department ====================
    /// A department with that name already exists
    DepartmentExists = 4001,

    // ==================== 5xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 5001,
    /// No account exists for the referenced email
    LinkedAccountNotFound = 5002,

    // ==================== 6xxx: Request ====================
    /// A request must carry at least one item
    EmptyRequestItems = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Persistent storage operation failed
    StorageFailure = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "Invalid email or password",
            Self::EmailNotVerified => "Please verify your email first",
            Self::SessionInvalid => "Session is no longer valid",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Access Denied: Admin only",
            Self::CannotDeleteSelf => "Cannot delete yourself!",

            Self::AccountNotFound => "Account not found",
            Self::AccountExists => "Email already registered",
            Self::PasswordRequired => "Password is required for new accounts",
            Self::PasswordTooShort => "Password too short",

            Self::DepartmentExists => "Department already exists",

            Self::EmployeeNotFound => "Employee not found",
            Self::LinkedAccountNotFound => "No account found with that email",

            Self::EmptyRequestItems => "Please add at least one item",

            Self::InternalError => "Internal error",
            Self::StorageFailure => "Storage operation failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::EmailNotVerified,
            1004 => Self::SessionInvalid,

            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            2003 => Self::CannotDeleteSelf,

            3001 => Self::AccountNotFound,
            3002 => Self::AccountExists,
            3003 => Self::PasswordRequired,
            3004 => Self::PasswordTooShort,

            4001 => Self::DepartmentExists,

            5001 => Self::EmployeeNotFound,
            5002 => Self::LinkedAccountNotFound,

            6001 => Self::EmptyRequestItems,

            9001 => Self::InternalError,
            9002 => Self::StorageFailure,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
