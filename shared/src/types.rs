//! Common types used across the backend

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Medications with fewer units than this are flagged as low stock
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Medications expiring within this many days are flagged as near expiry
pub const EXPIRY_WINDOW_DAYS: u64 = 30;

/// First date that is no longer considered "near expiry" relative to `today`.
///
/// A medication is near expiry when its expiry date is strictly before the
/// returned cutoff.
pub fn expiry_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(EXPIRY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Why a medication shows up in the alert listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertReason {
    LowStock,
    NearExpiry,
    LowStockAndNearExpiry,
}

impl AlertReason {
    /// Classify a stock level and expiry date against the alert rule.
    ///
    /// A missing expiry date never triggers the expiry arm.
    pub fn classify(quantity: i32, expiry_date: Option<NaiveDate>, today: NaiveDate) -> Option<Self> {
        let low_stock = quantity < LOW_STOCK_THRESHOLD;
        let near_expiry = expiry_date.is_some_and(|d| d < expiry_cutoff(today));

        match (low_stock, near_expiry) {
            (true, true) => Some(AlertReason::LowStockAndNearExpiry),
            (true, false) => Some(AlertReason::LowStock),
            (false, true) => Some(AlertReason::NearExpiry),
            (false, false) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertReason::LowStock => "Low stock",
            AlertReason::NearExpiry => "Near expiry",
            AlertReason::LowStockAndNearExpiry => "Low stock, near expiry",
        }
    }
}
