//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from explicit parts.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
        }
    }

    /// Build the configuration from environment variables.
    ///
    /// - `MARKET_BIND_ADDR`: socket address to listen on, default
    ///   `0.0.0.0:8080`.
    /// - `SESSION_COOKIE_SECURE`: any value other than `0` keeps the
    ///   `Secure` cookie flag on (the default).
    /// - `SESSION_KEY_FILE`: path to the session signing key material; see
    ///   [`load_session_key`] for the dev fallback.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the bind address is malformed or the
    /// session key cannot be loaded.
    pub fn from_env() -> std::io::Result<Self> {
        let raw_addr = env::var("MARKET_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let bind_addr: SocketAddr = raw_addr.parse().map_err(|e| {
            std::io::Error::other(format!("invalid bind address {raw_addr}: {e}"))
        })?;

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        let key = load_session_key()?;
        Ok(Self::new(key, cookie_secure, SameSite::Lax, bind_addr))
    }
}

/// Read the session signing key, falling back to an ephemeral key in
/// development builds (or when `SESSION_ALLOW_EPHEMERAL=1`).
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    // Fingerprint only; never log key material.
    let digest = Sha256::digest(key.master());
    info!(fingerprint = %hex::encode(&digest[..8]), "session key loaded");
    Ok(key)
}
