//! HTTP handlers for suppliers

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use shared::NewSupplier;
use tracing::instrument;
use validator::Validate;

use super::render;
use crate::error::AppResult;
use crate::flash;
use crate::services::SupplierService;
use crate::AppState;

/// Form input for adding a supplier
#[derive(Debug, Deserialize)]
pub struct AddSupplierForm {
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub contact_info: String,
}

impl AddSupplierForm {
    pub fn parse(self) -> AppResult<NewSupplier> {
        let input = NewSupplier {
            supplier_name: self.supplier_name,
            contact_info: self.contact_info,
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Template)]
#[template(path = "add_supplier.html")]
pub struct AddSupplierPage {
    pub flash: Option<String>,
}

pub async fn add_supplier_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, AddSupplierPage { flash })
}

/// Insert a supplier from the submitted form
#[instrument(skip(state, jar))]
pub async fn add_supplier(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddSupplierForm>,
) -> (CookieJar, Redirect) {
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return flash::redirect(jar, "/add_supplier", e.flash_message()),
    };

    SupplierService::new(state.db).add(&input).await;
    tracing::info!(supplier_name = %input.supplier_name, "Add supplier processed");

    flash::redirect(
        jar,
        "/",
        format!("Supplier {} added successfully.", input.supplier_name),
    )
}
