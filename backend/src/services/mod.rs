//! Business logic services for the Medical Store Inventory backend

pub mod medication;
pub mod order;
pub mod sale;
pub mod supplier;

pub use medication::MedicationService;
pub use order::OrderService;
pub use sale::SaleService;
pub use supplier::SupplierService;

use chrono::{NaiveDate, Utc};

/// Date stamped on sales and orders
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
