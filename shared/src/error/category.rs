//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the thousands digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Account errors
/// - 4xxx: Department errors
/// - 5xxx: Employee errors
/// - 6xxx: Request errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Account errors (3xxx)
    Account,
    /// Department errors (4xxx)
    Department,
    /// Employee errors (5xxx)
    Employee,
    /// Request errors (6xxx)
    Request,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Account,
            4000..5000 => Self::Department,
            5000..6000 => Self::Employee,
            6000..7000 => Self::Request,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Account => "account",
            Self::Department => "department",
            Self::Employee => "employee",
            Self::Request => "request",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Department);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::EmailNotVerified.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::CannotDeleteSelf.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::AccountExists.category(), ErrorCategory::Account);
        assert_eq!(ErrorCode::DepartmentExists.category(), ErrorCategory::Department);
        assert_eq!(ErrorCode::EmployeeNotFound.category(), ErrorCategory::Employee);
        assert_eq!(ErrorCode::EmptyRequestItems.category(), ErrorCategory::Request);
        assert_eq!(ErrorCode::StorageFailure.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Permission).unwrap();
        assert_eq!(json, "\"permission\"");
        let category: ErrorCategory = serde_json::from_str("\"request\"").unwrap();
        assert_eq!(category, ErrorCategory::Request);
    }
}
