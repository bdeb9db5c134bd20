//! HTTP handlers for the store's form pages
//!
//! Every page follows the same pattern: GET renders the (empty) form and any
//! pending flash message, POST applies the operation and redirects with a
//! status message. Errors never escape a POST handler.

mod health;
mod index;
mod medication;
mod order;
mod sale;
mod supplier;

pub use health::*;
pub use index::*;
pub use medication::*;
pub use order::*;
pub use sale::*;
pub use supplier::*;

use askama::Template;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::error::AppResult;

/// Render a page, passing the cookie jar through so a consumed flash
/// message is cleared in the same response
fn render<T: Template>(jar: CookieJar, page: T) -> AppResult<(CookieJar, Html<String>)> {
    Ok((jar, Html(page.render()?)))
}
