use std::fmt;
use std::str::FromStr;

use hmac::crypto_mac::InvalidKeyLength;
use hmac::{Hmac, Mac, NewMac};
use sha2::Sha256;

use crate::error::Error;

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm announced in the `algorithm` field of the
/// authorization payload. Every variant is a keyed MAC over the canonical
/// signing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HmacSha256,
}

const ALGORITHMS: &[(&str, Algorithm)] = &[("hmac-sha256", Algorithm::HmacSha256)];

impl Algorithm {
    /// Identifier used on the wire.
    pub fn name(&self) -> &'static str {
        ALGORITHMS
            .iter()
            .find(|(_, algo)| algo == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn lookup(name: &str) -> Option<Self> {
        ALGORITHMS
            .iter()
            .find(|(id, _)| *id == name)
            .map(|(_, algo)| *algo)
    }

    #[inline]
    pub fn mac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, InvalidKeyLength> {
        match self {
            Algorithm::HmacSha256 => {
                let mut h = HmacSha256::new_from_slice(key)?;
                h.update(message);
                Ok(h.finalize().into_bytes().to_vec())
            }
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HmacSha256
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            let supported = ALGORITHMS
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<&str>>()
                .join(", ");
            Error::config(format!(
                "unsupported algorithm `{}` (supported: {})",
                s, supported
            ))
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hmac_sha256() {
        assert_eq!(Algorithm::default(), Algorithm::HmacSha256);
        assert_eq!(Algorithm::default().name(), "hmac-sha256");
    }

    #[test]
    fn parses_known_identifier() {
        let algo: Algorithm = "hmac-sha256".parse().unwrap();
        assert_eq!(algo, Algorithm::HmacSha256);
        assert_eq!(algo.to_string(), "hmac-sha256");
    }

    #[test]
    fn rejects_unknown_identifier() {
        for name in &["hmac-sha1", "rsa-sha256", "HMAC-SHA256", ""] {
            let err = name.parse::<Algorithm>().unwrap_err();
            match err {
                Error::ConfigError(msg) => assert!(msg.contains("hmac-sha256")),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn hmac_sha256_matches_rfc4231_case_2() {
        let digest = Algorithm::HmacSha256
            .mac(b"Jefe", b"what do ya want for nothing?")
            .unwrap();
        let hex = digest
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        assert_eq!(
            hex,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
