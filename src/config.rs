//! Credential sourcing.
//!
//! The signer never reads the process environment. Callers that want the
//! `XFYUN_API_KEY` / `XFYUN_API_SECRET` convention resolve it here and pass
//! the values in.

use std::env;
use std::fmt;

use crate::constant::{API_KEY_ENV, API_SECRET_ENV};
use crate::error::{Error, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    #[inline]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load credentials from `XFYUN_API_KEY` and `XFYUN_API_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::config(format!("environment variable {} is not set", name)))
        };

        Ok(Self {
            api_key: read(API_KEY_ENV)?,
            api_secret: read(API_SECRET_ENV)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
