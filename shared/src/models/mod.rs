//! Domain models for the Medical Store Inventory backend

mod medication;
mod order;
mod sale;
mod supplier;

pub use medication::*;
pub use order::*;
pub use sale::*;
pub use supplier::*;
