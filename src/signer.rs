use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

pub struct Signer<'s> {
    secret: &'s str,
    algorithm: Algorithm,
}

impl<'s> Signer<'s> {
    #[inline]
    pub fn new(secret: &'s str, algorithm: Algorithm) -> Self {
        Self { secret, algorithm }
    }

    /// Keyed digest of `string_to_sign`, base64 encoded with padding.
    #[inline]
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        if self.secret.is_empty() {
            return Err(Error::config("api secret is empty"));
        }

        let msg = self
            .algorithm
            .mac(self.secret.as_bytes(), string_to_sign.as_bytes())?;
        Ok(base64::encode(&msg))
    }
}
