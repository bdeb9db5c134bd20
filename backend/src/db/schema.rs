//! Schema initialization
//!
//! Creates the five store tables if they are absent. Statements run in
//! foreign-key dependency order so each reference target exists first.

use super::Database;
use crate::error::AppResult;

const CREATE_MEDICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS medications (
    med_id SERIAL PRIMARY KEY,
    med_name VARCHAR(255) NOT NULL,
    category VARCHAR(255),
    quantity INT NOT NULL,
    expiry_date DATE
)
"#;

const CREATE_SUPPLIERS: &str = r#"
CREATE TABLE IF NOT EXISTS suppliers (
    supplier_id SERIAL PRIMARY KEY,
    supplier_name VARCHAR(255) NOT NULL,
    contact_info VARCHAR(255)
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id SERIAL PRIMARY KEY,
    order_date DATE NOT NULL,
    supplier_id INT REFERENCES suppliers (supplier_id)
)
"#;

const CREATE_ORDER_DETAILS: &str = r#"
CREATE TABLE IF NOT EXISTS order_details (
    order_detail_id SERIAL PRIMARY KEY,
    order_id INT REFERENCES orders (order_id),
    med_id INT REFERENCES medications (med_id),
    quantity_ordered INT NOT NULL
)
"#;

const CREATE_SALES: &str = r#"
CREATE TABLE IF NOT EXISTS sales (
    sale_id SERIAL PRIMARY KEY,
    sale_date DATE NOT NULL,
    med_id INT REFERENCES medications (med_id),
    quantity_sold INT NOT NULL
)
"#;

/// Table creation statements in dependency order
pub const STATEMENTS: [(&str, &str); 5] = [
    ("medications", CREATE_MEDICATIONS),
    ("suppliers", CREATE_SUPPLIERS),
    ("orders", CREATE_ORDERS),
    ("order_details", CREATE_ORDER_DETAILS),
    ("sales", CREATE_SALES),
];

/// Ensure every table exists; stops at the first failure
pub async fn initialize(db: &Database) -> AppResult<()> {
    for (table, statement) in STATEMENTS {
        db.try_execute(sqlx::query(statement)).await?;
        tracing::debug!(table, "Table ready");
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
