//! One-shot flash messages
//!
//! A POST handler stores a status message in the `flash` cookie and
//! redirects; the next rendered page shows the message and clears the
//! cookie.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "flash";

/// Store `message` for the next rendered page
pub fn set(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, message.into()))
        .path("/")
        .http_only(true);
    jar.add(cookie)
}

/// Take the pending message, if any, and clear it
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar
        .get(FLASH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty());

    match message {
        Some(message) => {
            let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
            (jar, Some(message))
        }
        None => (jar, None),
    }
}

/// Redirect to `to` carrying `message`
pub fn redirect(jar: CookieJar, to: &str, message: impl Into<String>) -> (CookieJar, Redirect) {
    (set(jar, message), Redirect::to(to))
}
