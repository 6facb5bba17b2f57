//! TLS configuration from in-memory certificate material.

use axum_server::tls_rustls::RustlsConfig;

/// Build a rustls server configuration from inline PEM strings.
///
/// The config loader guarantees both strings are non-empty when TLS is
/// enabled; a malformed pair fails here and aborts startup. rustls pins
/// the minimum negotiated protocol version at TLS 1.2.
pub async fn build_rustls_config(
    cert_pem: &str,
    key_pem: &str,
) -> Result<RustlsConfig, std::io::Error> {
    RustlsConfig::from_pem(cert_pem.as_bytes().to_vec(), key_pem.as_bytes().to_vec()).await
}
