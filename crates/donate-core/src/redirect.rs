//! # Redirect URLs
//!
//! Success and cancel URLs handed to the hosted checkout page. They point
//! back at the donate page of whichever site origin made the request.

/// Path of the donate page on the front-end site
pub const DONATE_PATH: &str = "/donate";

/// Origin used when a request carries no `Origin` header
pub const DEFAULT_ORIGIN: &str = "https://a2a6fc1c-fbe4-4bb3-baed-689501ca927c.lovableproject.com";

/// Redirect targets for a single checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    /// Origin the URLs were built from
    pub origin: String,
}

impl RedirectUrls {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Use the request origin verbatim, or `fallback` when it is absent or empty
    pub fn from_origin(origin: Option<&str>, fallback: &str) -> Self {
        match origin {
            Some(o) if !o.is_empty() => Self::new(o),
            _ => Self::new(fallback),
        }
    }

    pub fn success_url(&self) -> String {
        format!("{}{}?success=true", self.origin, DONATE_PATH)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}?canceled=true", self.origin, DONATE_PATH)
    }
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_echo_origin() {
        let urls = RedirectUrls::from_origin(Some("https://charity.example"), DEFAULT_ORIGIN);

        assert_eq!(urls.success_url(), "https://charity.example/donate?success=true");
        assert_eq!(urls.cancel_url(), "https://charity.example/donate?canceled=true");
    }

    #[test]
    fn test_urls_fall_back_to_default() {
        let urls = RedirectUrls::from_origin(None, DEFAULT_ORIGIN);
        assert_eq!(urls.success_url(), format!("{}/donate?success=true", DEFAULT_ORIGIN));

        let urls = RedirectUrls::from_origin(Some(""), "http://localhost:5173");
        assert_eq!(urls.cancel_url(), "http://localhost:5173/donate?canceled=true");
    }

    #[test]
    fn test_default() {
        assert_eq!(RedirectUrls::default().origin, DEFAULT_ORIGIN);
    }
}
