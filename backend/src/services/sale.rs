//! Sales service

use chrono::NaiveDate;
use shared::NewSale;

use crate::db::Database;

/// Sales service for recording dispensed medications
#[derive(Clone)]
pub struct SaleService {
    db: Database,
}

impl SaleService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Record a sale dated `sale_date` and take the sold units off the shelf.
    ///
    /// The two statements auto-commit independently. If the decrement fails
    /// after the sale row is written, the sale stays recorded against an
    /// unchanged stock level.
    pub async fn record(&self, sale: NewSale, sale_date: NaiveDate) {
        self.db
            .execute(
                sqlx::query(
                    r#"
                    INSERT INTO sales (sale_date, med_id, quantity_sold)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(sale_date)
                .bind(sale.med_id)
                .bind(sale.quantity_sold),
            )
            .await;

        self.db
            .execute(
                sqlx::query(
                    r#"
                    UPDATE medications
                    SET quantity = quantity - $1
                    WHERE med_id = $2
                    "#,
                )
                .bind(sale.quantity_sold)
                .bind(sale.med_id),
            )
            .await;
    }
}
