//! URL location model.
//!
//! A [`Location`] is the part of a URL the router cares about: the path used
//! for matching, plus the raw query and fragment carried along untouched.

/// Parsed in-app location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Absolute path, always starting with '/'
    pub path: String,
    /// Raw query string without the leading '?'
    pub query: Option<String>,
    /// Raw fragment without the leading '#'
    pub fragment: Option<String>,
}

impl Location {
    /// Location of the application root.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            fragment: None,
        }
    }

    /// Parse a path-with-query-and-fragment string.
    ///
    /// An empty path becomes `/`. A path without a leading slash gets one.
    /// Empty query or fragment strings are dropped.
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, non_empty(fragment)),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: normalize_path(path),
            query,
            fragment,
        }
    }

    /// Render back to a URL string relative to the application base.
    pub fn to_url(&self) -> String {
        let mut url = self.path.clone();
        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Path part of a URL string, before any '?' or '#', without normalization.
pub fn path_part(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |i| &url[..i])
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Normalize a deployment base path.
///
/// `""` and `"/"` mean "served from the domain root" and normalize to `""`.
/// Anything else gets exactly one leading slash and no trailing slash.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strip a normalized base prefix from a browser pathname.
///
/// Only strips on a segment boundary, so base `/app` does not eat `/apple`.
pub fn strip_base<'a>(pathname: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let loc = Location::parse("/login");
        assert_eq!(loc.path, "/login");
        assert_eq!(loc.query, None);
        assert_eq!(loc.fragment, None);
    }

    #[test]
    fn test_parse_query_and_fragment() {
        let loc = Location::parse("/pfps?page=2#top");
        assert_eq!(loc.path, "/pfps");
        assert_eq!(loc.query.as_deref(), Some("page=2"));
        assert_eq!(loc.fragment.as_deref(), Some("top"));
        assert_eq!(loc.to_url(), "/pfps?page=2#top");
    }

    #[test]
    fn test_parse_question_mark_inside_fragment() {
        let loc = Location::parse("/settings#a?b");
        assert_eq!(loc.path, "/settings");
        assert_eq!(loc.query, None);
        assert_eq!(loc.fragment.as_deref(), Some("a?b"));
    }

    #[test]
    fn test_parse_normalizes_path() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("?x=1").path, "/");
        assert_eq!(Location::parse("upload").path, "/upload");
        assert_eq!(Location::parse("/upload?").query, None);
    }

    #[test]
    fn test_path_part() {
        assert_eq!(path_part("/pfps?page=2#top"), "/pfps");
        assert_eq!(path_part("/settings#a?b"), "/settings");
        assert_eq!(path_part("?ref=x"), "");
        assert_eq!(path_part("login"), "login");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("/nested/app"), "/nested/app");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/login", ""), "/login");
        assert_eq!(strip_base("/app/login", "/app"), "/login");
        assert_eq!(strip_base("/app", "/app"), "/");
        assert_eq!(strip_base("/app/", "/app"), "/");
        assert_eq!(strip_base("/apple", "/app"), "/apple");
    }
}
