//! Session Cookie
//!
//! The session travels in a single HttpOnly cookie scoped to `/`.
//! [`SessionCookie`] writes it, clears it and reads it back from requests.

use std::fmt;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        })
    }
}

/// Attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool, same_site: SameSite) -> Self {
        Self {
            name: name.into(),
            secure,
            same_site,
        }
    }

    fn render(&self, value: &str, max_age_secs: u64) -> String {
        let secure = if self.secure { "; Secure" } else { "" };
        format!(
            "{}={}; HttpOnly{}; SameSite={}; Path=/; Max-Age={}",
            self.name, value, secure, self.same_site, max_age_secs
        )
    }

    /// `Set-Cookie` value carrying `token` for `max_age` (whole seconds).
    ///
    /// `None` when the token holds bytes a header cannot carry.
    pub fn issue(&self, token: &str, max_age: Duration) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.render(token, max_age.as_secs())).ok()
    }

    /// `Set-Cookie` value that makes the browser drop the session.
    pub fn clear(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.render("", 0)).ok()
    }

    /// Session token sent with a request. An empty value counts as absent.
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, value)| *key == self.name && !value.is_empty())
            .map(|(_, value)| value.to_string())
    }
}

/// `Max-Age` of a rendered `Set-Cookie` value.
pub fn max_age_of(set_cookie: &str) -> Option<u64> {
    set_cookie
        .split(';')
        .filter_map(|attr| attr.trim().split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("Max-Age"))
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_cookie() -> SessionCookie {
        SessionCookie::new("auth_token", false, SameSite::Strict)
    }

    #[test]
    fn issued_cookie_layout() {
        let value = dev_cookie()
            .issue("jwt", Duration::from_secs(86_400))
            .unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "auth_token=jwt; HttpOnly; SameSite=Strict; Path=/; Max-Age=86400"
        );
    }

    #[test]
    fn secure_flag_in_production() {
        let cookie = SessionCookie::new("auth_token", true, SameSite::Lax);
        let value = cookie.issue("jwt", Duration::from_secs(60)).unwrap();
        let raw = value.to_str().unwrap();
        assert!(raw.contains("; Secure;"));
        assert!(raw.contains("SameSite=Lax"));
    }

    #[test]
    fn cleared_cookie_expires_now() {
        let value = dev_cookie().clear().unwrap();
        let raw = value.to_str().unwrap();
        assert!(raw.starts_with("auth_token=;"));
        assert_eq!(max_age_of(raw), Some(0));
    }

    #[test]
    fn read_picks_the_session_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; auth_token=abc123; cart=7"),
        );
        assert_eq!(dev_cookie().read(&headers), Some("abc123".to_string()));

        let other = SessionCookie::new("missing", false, SameSite::Strict);
        assert_eq!(other.read(&headers), None);
    }

    #[test]
    fn empty_session_value_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("auth_token="));
        assert_eq!(dev_cookie().read(&headers), None);
    }

    #[test]
    fn max_age_parsing() {
        assert_eq!(
            max_age_of("auth_token=x; HttpOnly; Path=/; Max-Age=2592000"),
            Some(2_592_000)
        );
        assert_eq!(max_age_of("auth_token=x; HttpOnly"), None);
    }
}
