//! Sales models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded dispensing event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: i32,
    pub sale_date: NaiveDate,
    pub med_id: Option<i32>,
    pub quantity_sold: i32,
}

/// Input for recording a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewSale {
    pub med_id: i32,
    pub quantity_sold: i32,
}
