//! Coupon catalog

use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};

/// A percentage-off coupon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    pub code: &'static str,
    pub percent: u32,
}

impl Coupon {
    pub fn percent(&self) -> Decimal {
        Decimal::from(self.percent)
    }
}

/// Every coupon the storefront accepts
pub const COUPONS: [Coupon; 4] = [
    Coupon { code: "WELCOME10", percent: 10 },
    Coupon { code: "FIRSTORDER", percent: 15 },
    Coupon { code: "CHICKEN20", percent: 20 },
    Coupon { code: "SAVE25", percent: 25 },
];

/// Look up `code`, ignoring surrounding whitespace and case
pub fn lookup_coupon(code: &str) -> AppResult<Coupon> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::required("coupon code"));
    }
    COUPONS
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .copied()
        .ok_or_else(|| AppError::new(ErrorCode::CouponInvalid).with_detail("code", code))
}
