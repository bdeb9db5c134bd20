//! Medication models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::AlertReason;

/// A stocked medication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub med_id: i32,
    pub med_name: String,
    pub category: Option<String>,
    /// Units on hand; may go negative after overselling
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}

impl Medication {
    pub fn alert_reason(&self, today: NaiveDate) -> Option<AlertReason> {
        AlertReason::classify(self.quantity, self.expiry_date, today)
    }

    /// Expiry date formatted for display, `-` when unknown
    pub fn expiry_display(&self) -> String {
        self.expiry_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Input for adding a medication
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewMedication {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub med_name: String,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub category: String,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for overwriting a medication's stock level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InventoryUpdate {
    pub med_id: i32,
    pub new_quantity: i32,
}

/// A medication flagged by the alert rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockAlert {
    pub medication: Medication,
    pub reason: AlertReason,
}

impl StockAlert {
    pub fn reason_label(&self) -> &'static str {
        self.reason.label()
    }
}
