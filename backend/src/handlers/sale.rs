//! HTTP handlers for sales

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use shared::{parse_int, NewSale};
use tracing::instrument;

use super::render;
use crate::error::AppResult;
use crate::flash;
use crate::services::{today, SaleService};
use crate::AppState;

/// Form input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleForm {
    #[serde(default)]
    pub med_id: String,
    #[serde(default)]
    pub quantity_sold: String,
}

impl RecordSaleForm {
    pub fn parse(&self) -> AppResult<NewSale> {
        Ok(NewSale {
            med_id: parse_int("med_id", &self.med_id)?,
            quantity_sold: parse_int("quantity_sold", &self.quantity_sold)?,
        })
    }
}

#[derive(Template)]
#[template(path = "record_sale.html")]
pub struct RecordSalePage {
    pub flash: Option<String>,
}

pub async fn record_sale_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, RecordSalePage { flash })
}

/// Record a sale dated today and decrement stock
#[instrument(skip(state, jar))]
pub async fn record_sale(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RecordSaleForm>,
) -> (CookieJar, Redirect) {
    let sale = match form.parse() {
        Ok(sale) => sale,
        Err(e) => return flash::redirect(jar, "/record_sale", e.flash_message()),
    };

    SaleService::new(state.db).record(sale, today()).await;
    tracing::info!(
        med_id = sale.med_id,
        quantity_sold = sale.quantity_sold,
        "Record sale processed"
    );

    flash::redirect(
        jar,
        "/",
        format!("Sale recorded for Medication ID {}.", sale.med_id),
    )
}
