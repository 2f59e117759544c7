//! Route Classification
//!
//! Static policy deciding, per request path, whether a session is needed
//! and whether the session must belong to an admin.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Access level a path requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RouteAccess {
    /// No session required
    #[display("public")]
    Public,
    /// Any authenticated user
    #[display("protected")]
    Protected,
    /// Authenticated user with the ADMIN role
    #[display("admin")]
    Admin,
}

const STOREFRONT_PUBLIC_PATHS: &[&str] = &[
    "/",
    "/signin",
    "/signup",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
    "/product",
    "/category",
    "/search",
    "/api/auth/signin",
    "/api/auth/signup",
    "/api/auth/signout",
    "/api/auth/session",
    "/api/auth/verify-email",
    "/api/auth/resend-verification",
    "/api/auth/reset-password",
];

const STOREFRONT_PUBLIC_PATTERNS: &[&str] = &[
    r"^/product/[\w-]+$",
    r"^/category/[\w-]+$",
    r"^/api/(?:[\w-]+/)?(?:products|categories|billboards|sizes|colors)(?:/.*)?$",
    r"^/api/auth/reset-password/.+$",
    r"\.(?:jpg|jpeg|png|svg|webp|ico|css|js)$",
];

const STOREFRONT_ADMIN_PREFIXES: &[&str] = &["/admin", "/api/admin"];

static STOREFRONT: LazyLock<RoutePolicy> = LazyLock::new(|| {
    RoutePolicy::new(
        STOREFRONT_PUBLIC_PATHS.iter().copied(),
        STOREFRONT_PUBLIC_PATTERNS,
        STOREFRONT_ADMIN_PREFIXES.iter().copied(),
    )
    .expect("Invalid regex")
});

/// Public exact paths, public patterns, admin prefixes.
///
/// Classification order: exact public paths, then public patterns; anything
/// else needs a session. Admin prefixes only matter for non-public paths and
/// match whole segments (`/admin` covers `/admin/x`, not `/administrator`).
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public_paths: HashSet<String>,
    public_patterns: Vec<Regex>,
    admin_prefixes: Vec<String>,
}

impl RoutePolicy {
    pub fn new<P, A>(
        public_paths: P,
        public_patterns: &[&str],
        admin_prefixes: A,
    ) -> Result<Self, regex::Error>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let public_patterns = public_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            public_paths: public_paths.into_iter().map(Into::into).collect(),
            public_patterns,
            admin_prefixes: admin_prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .collect(),
        })
    }

    /// Default storefront policy.
    pub fn storefront() -> Self {
        STOREFRONT.clone()
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(path) || self.public_patterns.iter().any(|re| re.is_match(path))
    }

    pub fn is_admin(&self, path: &str) -> bool {
        self.admin_prefixes.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn classify(&self, path: &str) -> RouteAccess {
        if self.is_public(path) {
            RouteAccess::Public
        } else if self.is_admin(path) {
            RouteAccess::Admin
        } else {
            RouteAccess::Protected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_public_paths() {
        let policy = RoutePolicy::storefront();
        for path in STOREFRONT_PUBLIC_PATHS {
            assert_eq!(policy.classify(path), RouteAccess::Public, "{path}");
        }
    }

    #[test]
    fn test_public_patterns() {
        let policy = RoutePolicy::storefront();
        for path in [
            "/product/red-shirt",
            "/category/shoes_2",
            "/api/products",
            "/api/3f2504e0-4f89-41d3-9a0c-0305e82c3301/products",
            "/api/3f2504e0-4f89-41d3-9a0c-0305e82c3301/sizes/abc",
            "/api/auth/reset-password/abc123",
            "/images/logo.png",
            "/static/app.js",
        ] {
            assert_eq!(policy.classify(path), RouteAccess::Public, "{path}");
        }
    }

    #[test]
    fn test_protected_paths() {
        let policy = RoutePolicy::storefront();
        for path in [
            "/account",
            "/checkout",
            "/product/a/b",
            "/api/auth/profile",
            "/api/auth/addresses",
            "/api/store/orders",
            "/administrator",
        ] {
            assert_eq!(policy.classify(path), RouteAccess::Protected, "{path}");
        }
    }

    #[test]
    fn test_admin_prefixes_are_segment_aware() {
        let policy = RoutePolicy::storefront();
        assert_eq!(policy.classify("/admin"), RouteAccess::Admin);
        assert_eq!(policy.classify("/admin/users"), RouteAccess::Admin);
        assert_eq!(policy.classify("/api/admin/stores"), RouteAccess::Admin);
        assert_eq!(policy.classify("/adminpanel"), RouteAccess::Protected);
        assert_eq!(policy.classify("/api/administer"), RouteAccess::Protected);
    }

    #[test]
    fn test_custom_policy_rejects_bad_pattern() {
        let result = RoutePolicy::new(["/"], &["("], ["/admin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_prefix_trailing_slash() {
        let policy = RoutePolicy::new(["/"], &[], ["/ops/"]).unwrap();
        assert_eq!(policy.classify("/ops/jobs"), RouteAccess::Admin);
        assert_eq!(policy.classify("/"), RouteAccess::Public);
    }
}
