//! Supplier order models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchase header placed with a supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub order_date: NaiveDate,
    pub supplier_id: Option<i32>,
}

/// The single line item of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_detail_id: i32,
    pub order_id: Option<i32>,
    pub med_id: Option<i32>,
    pub quantity_ordered: i32,
}

/// Input for placing an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewOrder {
    pub supplier_id: i32,
    pub med_id: i32,
    pub quantity_ordered: i32,
}

/// Ids generated by a committed order placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub order_detail_id: i32,
}
