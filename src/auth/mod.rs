//! API key resolution.
//!
//! A token is looked up from progressively less-explicit sources: a caller
//! argument, the `CFBD_API_KEY` environment variable, then the local key
//! file written by [`TokenStore::save`]. Resolution happens once at startup
//! and the resulting [`ApiToken`] is passed to [`CfbdClient`] explicitly;
//! there is no process-global token cache.
//!
//! [`CfbdClient`]: crate::client::CfbdClient

pub mod obfuscate;
pub mod store;

pub use obfuscate::{deobfuscate, obfuscate, TOKEN_SHIFT};
pub use store::TokenStore;

use tracing::{debug, warn};

use crate::error::{CfbdError, Result};

/// Environment variable consulted when no explicit key is given.
pub const ENV_TOKEN_VAR: &str = "CFBD_API_KEY";

/// The placeholder used throughout the CFBD documentation. Never accepted
/// as a real credential.
pub const PLACEHOLDER_TOKEN: &str = "tigersAreAwesome";

/// A resolved CFBD API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Resolve a token using the key file at its default location.
    ///
    /// Source order: `explicit` argument (unless it is the documentation
    /// placeholder), then [`ENV_TOKEN_VAR`], then the stored secret. With no
    /// usable source this is [`CfbdError::MissingCredential`]; an empty
    /// token is never returned.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(token) = Self::from_explicit(explicit) {
            return Ok(token);
        }
        if let Some(token) = Self::from_env() {
            return Ok(token);
        }
        let store = TokenStore::default_location()?;
        Self::from_store(&store)
    }

    /// [`ApiToken::resolve`] against a caller-chosen key file location.
    pub fn resolve_with_store(explicit: Option<&str>, store: &TokenStore) -> Result<Self> {
        if let Some(token) = Self::from_explicit(explicit) {
            return Ok(token);
        }
        if let Some(token) = Self::from_env() {
            return Ok(token);
        }
        Self::from_store(store)
    }

    fn from_explicit(explicit: Option<&str>) -> Option<Self> {
        match explicit {
            Some(PLACEHOLDER_TOKEN) => {
                warn!("ignoring the CFBD documentation placeholder token");
                None
            }
            Some(token) if !token.is_empty() => {
                debug!("using explicitly supplied CFBD API key");
                Some(Self(token.to_string()))
            }
            _ => None,
        }
    }

    fn from_env() -> Option<Self> {
        match std::env::var(ENV_TOKEN_VAR) {
            Ok(value) if !value.is_empty() => {
                debug!("using CFBD API key from {ENV_TOKEN_VAR}");
                Some(Self(value))
            }
            _ => {
                debug!("{ENV_TOKEN_VAR} not set; trying the local key file");
                None
            }
        }
    }

    fn from_store(store: &TokenStore) -> Result<Self> {
        match store.load()? {
            Some(token) if !token.is_empty() => {
                debug!(path = %store.path().display(), "using CFBD API key from key file");
                Ok(Self(token))
            }
            Some(_) => {
                warn!(path = %store.path().display(), "key file holds an empty token");
                Err(CfbdError::MissingCredential {
                    env_var: ENV_TOKEN_VAR,
                })
            }
            None => Err(CfbdError::MissingCredential {
                env_var: ENV_TOKEN_VAR,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Authorization` header value for this token.
    ///
    /// Keys pasted with a `Bearer` prefix are accepted: a well-formed prefix
    /// passes through and a missing space after `Bearer` is repaired.
    pub fn bearer(&self) -> String {
        let token = self.0.trim();
        if token.starts_with("Bearer ") {
            token.to_string()
        } else if let Some(rest) = token.strip_prefix("Bearer") {
            format!("Bearer {rest}")
        } else {
            format!("Bearer {token}")
        }
    }
}
