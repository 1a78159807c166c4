//! URL 验证模块
//!
//! Decides whether a trimmed, user-entered string has the shape of a URL.
//! Two shapes are accepted:
//! - `http://host[...]` or `https://host[...]` (scheme case-insensitive)
//! - a bare `host.tld[...]` with at least two dot-separated labels

use url::Url;

/// URL 验证错误
///
/// `Display` yields the human-readable reason surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlValidationError {
    Blank,
    Invalid,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "can't be blank"),
            Self::Invalid => write!(f, "is invalid"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// True for an empty or whitespace-only string
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Checks the URL shape of an already-trimmed string
pub fn matches_url_shape(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }

    match input.split_once("://") {
        Some((scheme, _)) if is_web_scheme(scheme) => Url::parse(input)
            .ok()
            .and_then(|u| u.host_str().map(|h| !h.is_empty()))
            .unwrap_or(false),
        Some(_) => false,
        None => bare_host_has_domain(input),
    }
}

/// 验证原始 URL
///
/// Blank input is reported before shape problems.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if is_blank(input) {
        return Err(UrlValidationError::Blank);
    }

    if !matches_url_shape(input.trim()) {
        return Err(UrlValidationError::Invalid);
    }

    Ok(())
}

// 规范化只会剥离 http/https，其余 scheme 无法得到可跳转的规范形式
fn is_web_scheme(candidate: &str) -> bool {
    candidate.eq_ignore_ascii_case("http") || candidate.eq_ignore_ascii_case("https")
}

fn bare_host_has_domain(input: &str) -> bool {
    let Ok(parsed) = Url::parse(&format!("http://{}", input)) else {
        return false;
    };

    match parsed.host() {
        Some(url::Host::Domain(domain)) => {
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
        }
        // The url crate also reads "127" as an IPv4 address; only dotted quads count
        Some(url::Host::Ipv4(_)) => input
            .split(['/', '?', '#'])
            .next()
            .is_some_and(|host| host.matches('.').count() == 3),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        for url in [
            "http://www.google.com",
            "http://www.google.com/",
            "https://www.google.com",
            "https://google.com",
            "www.google.com",
            "google.com",
            "my-google.com",
            "https://en.wikipedia.org/wiki/HTML_element#Anchor",
            "https://stackoverflow.com/questions/14098031/whats-the-difference-between-the-build-and-create-methods-in-factorygirl",
            "http://localhost:8080",
            "example.com/search?q=rust",
        ] {
            assert!(validate_url(url).is_ok(), "expected valid: {}", url);
        }
    }

    #[test]
    fn test_blank() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Blank));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Blank));
        assert_eq!(validate_url("\t\n"), Err(UrlValidationError::Blank));
    }

    #[test]
    fn test_invalid_shapes() {
        for url in [
            "abc",
            "google.",
            ".com",
            "goo gle.com",
            "http://",
            "file:///etc/passwd",
            "javascript:alert(1)",
            "1http://example.com",
            "12345",
            "ftp://example.com/file",
            "javascript://example.com/%0aalert(1)",
            "git+ssh://github.com/rust-lang/rust",
        ] {
            assert_eq!(
                validate_url(url),
                Err(UrlValidationError::Invalid),
                "expected invalid: {}",
                url
            );
        }
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(validate_url("HTTPS://Example.com").is_ok());
        assert!(validate_url("Http://example.com/path").is_ok());
        assert_eq!(validate_url("FTP://example.com"), Err(UrlValidationError::Invalid));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(validate_url("  http://www.google.com").is_ok());
        assert!(validate_url("http://www.google.com  ").is_ok());
    }

    #[test]
    fn test_error_reasons() {
        assert_eq!(UrlValidationError::Blank.to_string(), "can't be blank");
        assert_eq!(UrlValidationError::Invalid.to_string(), "is invalid");
    }
}
