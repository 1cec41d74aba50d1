//! Cookie Parsing
//!
//! Read-only access to request cookies. Cookies are issued and cleared by
//! the external auth provider; nothing in this workspace sets them.

use axum::http::{HeaderMap, header};

/// Extract a cookie value from headers
///
/// Every `Cookie` header is scanned (HTTP/2 clients may split cookies across
/// several). The first pair whose name matches exactly wins. One pair of
/// surrounding DQUOTEs is stripped (RFC 6265 `cookie-value`); the value is
/// otherwise returned as sent, without decoding.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key.trim() == name {
                Some(unquote(value.trim()).to_string())
            } else {
                None
            }
        })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
