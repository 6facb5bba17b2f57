//! Effective redirect target computation.

use crate::routing::has_url_scheme;

/// Compute the URL a matched request is redirected to.
///
/// Precedence:
/// 1. The stored new URL is already absolute → use it unchanged.
/// 2. A non-empty configured redirect domain → prefix the new URL with it
///    (scheme defaults to `https://`, any trailing slash is stripped).
/// 3. Fall back to the inbound request's scheme and host.
pub fn resolve_redirect_target(
    new_url: &str,
    redirect_domain: &str,
    request_scheme: &str,
    request_host: &str,
) -> String {
    if has_url_scheme(new_url) {
        return new_url.to_string();
    }

    if !redirect_domain.is_empty() {
        let domain = if has_url_scheme(redirect_domain) {
            redirect_domain.to_string()
        } else {
            format!("https://{}", redirect_domain)
        };
        return format!("{}{}", domain.trim_end_matches('/'), new_url);
    }

    format!("{}://{}{}", request_scheme, request_host, new_url)
}
