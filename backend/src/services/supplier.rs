//! Supplier service

use shared::NewSupplier;

use crate::db::Database;
use crate::error::AppResult;

/// Supplier service for registering vendors
#[derive(Clone)]
pub struct SupplierService {
    db: Database,
}

impl SupplierService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn add(&self, input: &NewSupplier) {
        self.db
            .execute(
                sqlx::query(
                    r#"
                    INSERT INTO suppliers (supplier_name, contact_info)
                    VALUES ($1, $2)
                    "#,
                )
                .bind(&input.supplier_name)
                .bind(&input.contact_info),
            )
            .await;
    }

    /// Whether a supplier with this id exists
    pub async fn exists(&self, supplier_id: i32) -> AppResult<bool> {
        let count = self
            .db
            .fetch_count(
                sqlx::query_scalar("SELECT COUNT(*) FROM suppliers WHERE supplier_id = $1")
                    .bind(supplier_id),
            )
            .await?;
        Ok(count > 0)
    }
}
