//! Status classes every crate renders its errors into.

/// Error classification shared by the account and catalog crates.
///
/// `AuthError` and `CatalogError` each map their variants onto one of
/// these; the kind alone decides the HTTP status of the response.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert!(ErrorKind::InternalServerError.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed input
    BadRequest,
    /// No session, or the session token did not verify
    Unauthorized,
    /// Signed in, but not the owner or not an admin
    Forbidden,
    NotFound,
    /// Duplicate email, or a record still referenced elsewhere
    Conflict,
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Server-side failures. Their details never reach the client.
    pub const fn is_server_error(self) -> bool {
        matches!(self, ErrorKind::InternalServerError)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
        };
        f.write_str(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_status() {
        let kinds = [
            ErrorKind::BadRequest,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
            ErrorKind::InternalServerError,
        ];
        let mut codes: Vec<u16> = kinds.iter().map(|k| k.status_code()).collect();
        codes.dedup();
        assert_eq!(codes, vec![400, 401, 403, 404, 409, 500]);
    }

    #[test]
    fn only_internal_is_a_server_error() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());
    }

    #[test]
    fn display_uses_reason_phrase() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(ErrorKind::BadRequest.to_string(), "Bad Request");
    }
}
