use crate::algorithm::Algorithm;
use crate::constant::*;
use crate::error::{Error, Result};

/// Fields of the `authorization` query parameter, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationPayload {
    pub api_key: String,
    pub algorithm: String,
    pub headers: String,
    pub signature: String,
}

impl AuthorizationPayload {
    pub fn new(
        api_key: impl Into<String>,
        algorithm: Algorithm,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            algorithm: algorithm.name().to_string(),
            headers: SIGNED_HEADERS_VALUE.to_string(),
            signature: signature.into(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (PAYLOAD_API_KEY, self.api_key.as_str()),
            (PAYLOAD_ALGORITHM, self.algorithm.as_str()),
            (PAYLOAD_HEADERS, self.headers.as_str()),
            (PAYLOAD_SIGNATURE, self.signature.as_str()),
        ]
    }

    /// `key="value"` pairs joined by `", "`. Values are not escaped.
    pub fn render(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!(r#"{}="{}""#, key, value))
            .collect::<Vec<String>>()
            .join(", ")
    }

    pub fn encode(&self) -> String {
        base64::encode(self.render())
    }

    /// Parses an `authorization` value produced by [`encode`](Self::encode).
    pub fn decode(authorization: &str) -> Result<Self> {
        let text = String::from_utf8(base64::decode(authorization)?)?;

        let mut api_key = None;
        let mut algorithm = None;
        let mut headers = None;
        let mut signature = None;

        for pair in text.split(", ") {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::encoding(format!("malformed pair `{}`", pair)))?;
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .ok_or_else(|| Error::encoding(format!("unquoted value for `{}`", key)))?
                .to_string();

            let slot = match key {
                PAYLOAD_API_KEY => &mut api_key,
                PAYLOAD_ALGORITHM => &mut algorithm,
                PAYLOAD_HEADERS => &mut headers,
                PAYLOAD_SIGNATURE => &mut signature,
                _ => return Err(Error::encoding(format!("unknown field `{}`", key))),
            };
            if slot.replace(value).is_some() {
                return Err(Error::encoding(format!("duplicate field `{}`", key)));
            }
        }

        let missing = |key: &str| Error::encoding(format!("missing field `{}`", key));
        Ok(Self {
            api_key: api_key.ok_or_else(|| missing(PAYLOAD_API_KEY))?,
            algorithm: algorithm.ok_or_else(|| missing(PAYLOAD_ALGORITHM))?,
            headers: headers.ok_or_else(|| missing(PAYLOAD_HEADERS))?,
            signature: signature.ok_or_else(|| missing(PAYLOAD_SIGNATURE))?,
        })
    }
}
