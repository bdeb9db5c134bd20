//! Landing page

use askama::Template;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use super::render;
use crate::error::AppResult;
use crate::flash;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub flash: Option<String>,
}

pub async fn index(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    render(jar, IndexPage { flash })
}
