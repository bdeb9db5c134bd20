//! HTTP handlers for supplier orders

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use shared::{parse_int, NewOrder};
use tracing::instrument;

use super::render;
use crate::error::AppResult;
use crate::flash;
use crate::services::{today, OrderService};
use crate::AppState;

/// Form input for placing an order
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(default)]
    pub supplier_id: String,
    #[serde(default)]
    pub med_id: String,
    #[serde(default)]
    pub quantity_ordered: String,
}

impl PlaceOrderForm {
    pub fn parse(&self) -> AppResult<NewOrder> {
        Ok(NewOrder {
            supplier_id: parse_int("supplier_id", &self.supplier_id)?,
            med_id: parse_int("med_id", &self.med_id)?,
            quantity_ordered: parse_int("quantity_ordered", &self.quantity_ordered)?,
        })
    }
}

#[derive(Template)]
#[template(path = "place_order.html")]
pub struct PlaceOrderPage {
    pub flash: Option<String>,
}

pub async fn place_order_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, PlaceOrderPage { flash })
}

/// Validate references and place the order in one transaction.
///
/// Any failure redirects back to the order form with the reason.
#[instrument(skip(state, jar))]
pub async fn place_order(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PlaceOrderForm>,
) -> (CookieJar, Redirect) {
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return flash::redirect(jar, "/place_order", e.flash_message()),
    };

    match OrderService::new(state.db).place_order(input, today()).await {
        Ok(placed) => {
            tracing::info!(
                order_id = placed.order_id,
                supplier_id = input.supplier_id,
                med_id = input.med_id,
                quantity_ordered = input.quantity_ordered,
                "Order placed"
            );
            flash::redirect(
                jar,
                "/",
                format!(
                    "Order placed: Supplier ID {}, Medication ID {}, Quantity {}.",
                    input.supplier_id, input.med_id, input.quantity_ordered
                ),
            )
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                supplier_id = input.supplier_id,
                med_id = input.med_id,
                "Order rejected"
            );
            flash::redirect(jar, "/place_order", e.flash_message())
        }
    }
}
