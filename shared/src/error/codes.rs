//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Cart errors
//! - 6xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Payload could not be decoded
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order can no longer be cancelled
    OrderNotCancellable = 4002,
    /// Stored order amounts are inconsistent (e.g. negative total)
    DataIntegrity = 4003,
    /// Monetary amount is invalid (negative where not allowed)
    InvalidAmount = 4004,

    // ==================== 5xxx: Cart ====================
    /// Cart is empty
    CartEmpty = 5001,
    /// Coupon code is invalid or expired
    CouponInvalid = 5002,
    /// Scheduled delivery needs a time slot
    DeliveryTimeRequired = 5003,
    /// Cart item not found
    CartItemNotFound = 5004,

    // ==================== 6xxx: Report ====================
    /// Report start date is after end date
    ReportRangeInvalid = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9003,
    /// Network error
    NetworkError = 9101,
    /// Timeout
    TimeoutError = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderNotCancellable => "Order can no longer be cancelled",
            ErrorCode::DataIntegrity => "Order amounts are inconsistent",
            ErrorCode::InvalidAmount => "Invalid amount",

            // Cart
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::CouponInvalid => "The coupon code is invalid or expired",
            ErrorCode::DeliveryTimeRequired => "A delivery time must be selected",
            ErrorCode::CartItemNotFound => "Cart item not found",

            // Report
            ErrorCode::ReportRangeInvalid => "Start date must be before end date",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderNotCancellable),
            4003 => Ok(ErrorCode::DataIntegrity),
            4004 => Ok(ErrorCode::InvalidAmount),

            // Cart
            5001 => Ok(ErrorCode::CartEmpty),
            5002 => Ok(ErrorCode::CouponInvalid),
            5003 => Ok(ErrorCode::DeliveryTimeRequired),
            5004 => Ok(ErrorCode::CartItemNotFound),

            // Report
            6001 => Ok(ErrorCode::ReportRangeInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::NetworkError),
            9102 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
