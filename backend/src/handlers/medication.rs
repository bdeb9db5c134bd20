//! HTTP handlers for medications, stock levels and alerts

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    expiry_cutoff, parse_int, parse_optional_date, InventoryUpdate, Medication, NewMedication,
    StockAlert, LOW_STOCK_THRESHOLD,
};
use tracing::instrument;
use validator::Validate;

use super::render;
use crate::error::AppResult;
use crate::flash;
use crate::services::{today, MedicationService};
use crate::AppState;

/// Form input for adding a medication
#[derive(Debug, Deserialize)]
pub struct AddMedicationForm {
    #[serde(default)]
    pub med_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub expiry_date: String,
}

impl AddMedicationForm {
    pub fn parse(self) -> AppResult<NewMedication> {
        let input = NewMedication {
            quantity: parse_int("quantity", &self.quantity)?,
            expiry_date: parse_optional_date("expiry_date", &self.expiry_date)?,
            med_name: self.med_name,
            category: self.category,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Form input for overwriting a stock level
#[derive(Debug, Deserialize)]
pub struct UpdateInventoryForm {
    #[serde(default)]
    pub med_id: String,
    #[serde(default)]
    pub new_quantity: String,
}

impl UpdateInventoryForm {
    pub fn parse(&self) -> AppResult<InventoryUpdate> {
        Ok(InventoryUpdate {
            med_id: parse_int("med_id", &self.med_id)?,
            new_quantity: parse_int("new_quantity", &self.new_quantity)?,
        })
    }
}

#[derive(Template)]
#[template(path = "add_medication.html")]
pub struct AddMedicationPage {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "update_inventory.html")]
pub struct UpdateInventoryPage {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "check_stock.html")]
pub struct CheckStockPage {
    pub flash: Option<String>,
    pub medications: Vec<Medication>,
}

#[derive(Template)]
#[template(path = "generate_alerts.html")]
pub struct AlertsPage {
    pub flash: Option<String>,
    pub alerts: Vec<StockAlert>,
    pub low_stock_threshold: i32,
    pub expiry_cutoff: NaiveDate,
}

pub async fn add_medication_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, AddMedicationPage { flash })
}

/// Insert a medication from the submitted form
#[instrument(skip(state, jar))]
pub async fn add_medication(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddMedicationForm>,
) -> (CookieJar, Redirect) {
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return flash::redirect(jar, "/add_medication", e.flash_message()),
    };

    MedicationService::new(state.db).add(&input).await;
    tracing::info!(
        med_name = %input.med_name,
        quantity = input.quantity,
        "Add medication processed"
    );

    flash::redirect(
        jar,
        "/",
        format!("Medication {} added successfully.", input.med_name),
    )
}

pub async fn update_inventory_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, UpdateInventoryPage { flash })
}

/// Overwrite a medication's quantity
#[instrument(skip(state, jar))]
pub async fn update_inventory(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UpdateInventoryForm>,
) -> (CookieJar, Redirect) {
    let update = match form.parse() {
        Ok(update) => update,
        Err(e) => return flash::redirect(jar, "/update_inventory", e.flash_message()),
    };

    MedicationService::new(state.db)
        .update_quantity(update)
        .await;
    tracing::info!(
        med_id = update.med_id,
        new_quantity = update.new_quantity,
        "Inventory update processed"
    );

    flash::redirect(
        jar,
        "/",
        format!("Inventory updated for Medication ID {}.", update.med_id),
    )
}

/// List all medications
pub async fn check_stock(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let medications = MedicationService::new(state.db).list().await;
    let (jar, flash) = flash::take(jar);
    render(jar, CheckStockPage { flash, medications })
}

/// List medications that are low on stock or close to expiry
pub async fn generate_alerts(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let today = today();
    let alerts = MedicationService::new(state.db).alerts(today).await;
    let (jar, flash) = flash::take(jar);
    render(
        jar,
        AlertsPage {
            flash,
            alerts,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            expiry_cutoff: expiry_cutoff(today),
        },
    )
}
