//! Supplier models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An external vendor medications are ordered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: i32,
    pub supplier_name: String,
    pub contact_info: Option<String>,
}

/// Input for adding a supplier
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewSupplier {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub supplier_name: String,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub contact_info: String,
}
