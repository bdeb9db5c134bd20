//! Supplier order service
//!
//! Order placement is the only multi-statement unit that runs inside a
//! transaction: the order header and its line item commit together or not
//! at all.

use chrono::NaiveDate;
use shared::{NewOrder, PlacedOrder};
use sqlx::{Postgres, Transaction};

use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::services::{MedicationService, SupplierService};

/// Order service for placing supplier orders
#[derive(Clone)]
pub struct OrderService {
    db: Database,
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Validate both references, then insert the order and its line item
    pub async fn place_order(&self, input: NewOrder, order_date: NaiveDate) -> AppResult<PlacedOrder> {
        if !SupplierService::new(self.db.clone())
            .exists(input.supplier_id)
            .await?
        {
            return Err(AppError::UnknownSupplier(input.supplier_id));
        }

        if !MedicationService::new(self.db.clone())
            .exists(input.med_id)
            .await?
        {
            return Err(AppError::UnknownMedication(input.med_id));
        }

        self.insert_order(input, order_date).await
    }

    /// Insert the order header and line item in one transaction.
    ///
    /// Performs no existence checks; a bad reference fails inside the
    /// transaction and is rolled back explicitly before the error returns.
    pub async fn insert_order(&self, input: NewOrder, order_date: NaiveDate) -> AppResult<PlacedOrder> {
        let mut tx = self.db.pool().begin().await?;

        match Self::insert_rows(&mut tx, input, order_date).await {
            Ok(placed) => {
                tx.commit().await?;
                Ok(placed)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Order rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn insert_rows(
        tx: &mut Transaction<'_, Postgres>,
        input: NewOrder,
        order_date: NaiveDate,
    ) -> AppResult<PlacedOrder> {
        let order_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (order_date, supplier_id)
            VALUES ($1, $2)
            RETURNING order_id
            "#,
        )
        .bind(order_date)
        .bind(input.supplier_id)
        .fetch_one(&mut **tx)
        .await?;

        let order_detail_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO order_details (order_id, med_id, quantity_ordered)
            VALUES ($1, $2, $3)
            RETURNING order_detail_id
            "#,
        )
        .bind(order_id)
        .bind(input.med_id)
        .bind(input.quantity_ordered)
        .fetch_one(&mut **tx)
        .await?;

        Ok(PlacedOrder {
            order_id,
            order_detail_id,
        })
    }
}
