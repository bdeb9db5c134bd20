//! Medication service for stock levels and alerts

use chrono::NaiveDate;
use shared::{expiry_cutoff, InventoryUpdate, Medication, NewMedication, StockAlert, LOW_STOCK_THRESHOLD};
use sqlx::FromRow;

use crate::db::Database;
use crate::error::AppResult;

/// Medication service for adding medications and reading stock
#[derive(Clone)]
pub struct MedicationService {
    db: Database,
}

/// Row for medication queries
#[derive(Debug, FromRow)]
struct MedicationRow {
    med_id: i32,
    med_name: String,
    category: Option<String>,
    quantity: i32,
    expiry_date: Option<NaiveDate>,
}

impl From<MedicationRow> for Medication {
    fn from(row: MedicationRow) -> Self {
        Medication {
            med_id: row.med_id,
            med_name: row.med_name,
            category: row.category,
            quantity: row.quantity,
            expiry_date: row.expiry_date,
        }
    }
}

impl MedicationService {
    /// Create a new MedicationService instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a medication with the submitted fields as given
    pub async fn add(&self, input: &NewMedication) {
        self.db
            .execute(
                sqlx::query(
                    r#"
                    INSERT INTO medications (med_name, category, quantity, expiry_date)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(&input.med_name)
                .bind(&input.category)
                .bind(input.quantity)
                .bind(input.expiry_date),
            )
            .await;
    }

    /// Overwrite the stock level of a medication.
    ///
    /// Unknown ids update nothing; no lower bound is enforced.
    pub async fn update_quantity(&self, update: InventoryUpdate) {
        self.db
            .execute(
                sqlx::query(
                    r#"
                    UPDATE medications
                    SET quantity = $1
                    WHERE med_id = $2
                    "#,
                )
                .bind(update.new_quantity)
                .bind(update.med_id),
            )
            .await;
    }

    /// List every medication
    pub async fn list(&self) -> Vec<Medication> {
        let rows = self
            .db
            .fetch(sqlx::query_as::<_, MedicationRow>(
                r#"
                SELECT med_id, med_name, category, quantity, expiry_date
                FROM medications
                ORDER BY med_id
                "#,
            ))
            .await;

        rows.into_iter().map(Medication::from).collect()
    }

    /// List medications that are low on stock or close to expiry
    pub async fn alerts(&self, today: NaiveDate) -> Vec<StockAlert> {
        let rows = self
            .db
            .fetch(
                sqlx::query_as::<_, MedicationRow>(
                    r#"
                    SELECT med_id, med_name, category, quantity, expiry_date
                    FROM medications
                    WHERE quantity < $1 OR expiry_date < $2
                    ORDER BY med_id
                    "#,
                )
                .bind(LOW_STOCK_THRESHOLD)
                .bind(expiry_cutoff(today)),
            )
            .await;

        rows.into_iter()
            .map(Medication::from)
            .filter_map(|medication| {
                medication
                    .alert_reason(today)
                    .map(|reason| StockAlert { medication, reason })
            })
            .collect()
    }

    /// Whether a medication with this id exists
    pub async fn exists(&self, med_id: i32) -> AppResult<bool> {
        let count = self
            .db
            .fetch_count(
                sqlx::query_scalar("SELECT COUNT(*) FROM medications WHERE med_id = $1")
                    .bind(med_id),
            )
            .await?;
        Ok(count > 0)
    }
}
