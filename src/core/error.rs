//! Custom error types for the application.
//!
//! - [`RouteError`] - Route table configuration errors, fatal at startup

use thiserror::Error;

/// Route table configuration errors.
///
/// Raised while building a [`RouteTable`](super::router::RouteTable). None of
/// these can occur at navigation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Route path is an empty string
    #[error("route path is empty")]
    EmptyPath,
    /// Route path does not start with '/'
    #[error("route path '{0}' must start with '/'")]
    NotAbsolute(String),
    /// Route path carries a query or fragment, so it could never match
    #[error("route path '{0}' must not contain '?' or '#'")]
    QueryOrFragment(String),
    /// Two routes share the same path
    #[error("route path '{0}' is registered more than once")]
    DuplicatePath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RouteError::EmptyPath.to_string(), "route path is empty");
        assert_eq!(
            RouteError::NotAbsolute("login".to_string()).to_string(),
            "route path 'login' must start with '/'"
        );
        assert_eq!(
            RouteError::QueryOrFragment("/a?b".to_string()).to_string(),
            "route path '/a?b' must not contain '?' or '#'"
        );
        assert_eq!(
            RouteError::DuplicatePath("/pfps".to_string()).to_string(),
            "route path '/pfps' is registered more than once"
        );
    }
}
