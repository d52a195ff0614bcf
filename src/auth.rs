use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::authorization::AuthorizationPayload;
use crate::config::Credentials;
use crate::constant::*;
use crate::error::{Error, Result};
use crate::signer::Signer;
use crate::string_to_sign::{rfc1123_date, Endpoint, StringToSign};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUrlInfo {
    pub url: String,
    pub authorization: String,
    pub date: String,
    pub host: String,
}

/// Signed request URL for one endpoint.
///
/// Everything is computed once by [`XfyunAuthBuilder::build`]; the date is
/// captured at that point and shared by the signature and the `date` query
/// parameter. The secret is not retained.
#[derive(Clone)]
pub struct XfyunAuth {
    endpoint: Endpoint,
    api_key: String,
    method: String,
    algorithm: Algorithm,
    date: String,
    string_to_sign: String,
    signature: String,
    authorization: String,
    auth_url: String,
}

impl XfyunAuth {
    #[inline]
    pub fn builder(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> XfyunAuthBuilder {
        XfyunAuthBuilder::new(endpoint, api_key, api_secret)
    }

    /// `GET`, `hmac-sha256`, signed now.
    #[inline]
    pub fn new(endpoint: impl Into<String>, credentials: &Credentials) -> Result<Self> {
        Self::builder(
            endpoint,
            credentials.api_key.as_str(),
            credentials.api_secret.as_str(),
        )
        .build()
    }

    #[inline]
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Base64 of the rendered [`AuthorizationPayload`].
    #[inline]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    #[inline]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    #[inline]
    pub fn string_to_sign(&self) -> &str {
        &self.string_to_sign
    }

    /// RFC 1123 date the request was signed with.
    #[inline]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[inline]
    pub fn host(&self) -> &str {
        self.endpoint.host()
    }

    #[inline]
    pub fn path(&self) -> &str {
        self.endpoint.path()
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn info(&self) -> AuthUrlInfo {
        AuthUrlInfo {
            url: self.auth_url.clone(),
            authorization: self.authorization.clone(),
            date: self.date.clone(),
            host: self.host().to_string(),
        }
    }
}

impl fmt::Display for XfyunAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<XfyunAuth {}>", self.endpoint())
    }
}

impl fmt::Debug for XfyunAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XfyunAuth")
            .field("endpoint", &self.endpoint())
            .field("api_key", &self.api_key)
            .field("method", &self.method)
            .field("algorithm", &self.algorithm)
            .field("date", &self.date)
            .finish()
    }
}

#[derive(Clone)]
pub struct XfyunAuthBuilder {
    endpoint: String,
    api_key: String,
    api_secret: String,
    method: String,
    algorithm: String,
    date: Option<DateTime<Utc>>,
}

impl XfyunAuthBuilder {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            method: DEFAULT_METHOD.to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            date: None,
        }
    }

    /// HTTP verb of the request line. Not validated.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Algorithm identifier, checked by [`build`](Self::build).
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Sign with a fixed instant instead of the current time.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn build(self) -> Result<XfyunAuth> {
        self.try_build().map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "cannot build authenticated url");
            e
        })
    }

    fn try_build(&self) -> Result<XfyunAuth> {
        // Step 1: Validate static input
        let endpoint = Endpoint::parse(&self.endpoint)?;
        if self.api_key.is_empty() {
            return Err(Error::config("api key is empty"));
        }
        if self.api_secret.is_empty() {
            return Err(Error::config("api secret is empty"));
        }
        let algorithm: Algorithm = self.algorithm.parse()?;

        // Step 2: Freeze the date and sign
        let date = rfc1123_date(self.date.unwrap_or_else(Utc::now));
        let string_to_sign = StringToSign::new(&endpoint, &self.method, &date).string_to_sign();
        let signature = Signer::new(&self.api_secret, algorithm).sign(&string_to_sign)?;
        let authorization =
            AuthorizationPayload::new(self.api_key.as_str(), algorithm, signature.as_str())
                .encode();

        // Step 3: Append authorization, date and host to the endpoint query
        let auth_url = endpoint.with_query_pairs(&[
            (AUTHORIZATION_KEY, authorization.as_str()),
            (DATE_KEY, date.as_str()),
            (HOST_KEY, endpoint.host()),
        ]);

        debug!(
            endpoint = %endpoint.as_str(),
            method = %self.method,
            algorithm = %algorithm,
            date = %date,
            host = %endpoint.host(),
            "built authenticated url"
        );

        Ok(XfyunAuth {
            endpoint,
            api_key: self.api_key.clone(),
            method: self.method.clone(),
            algorithm,
            date,
            string_to_sign,
            signature,
            authorization,
            auth_url,
        })
    }
}

impl fmt::Debug for XfyunAuthBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XfyunAuthBuilder")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("method", &self.method)
            .field("algorithm", &self.algorithm)
            .field("date", &self.date)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const ENDPOINT: &str = "https://api.example.com/v1/resource";

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    fn fixed(endpoint: &str) -> XfyunAuthBuilder {
        XfyunAuth::builder(endpoint, "key123", "s3cr3t").date(epoch())
    }

    #[test]
    fn golden_url() {
        let auth = fixed(ENDPOINT).build().unwrap();
        assert_eq!(
            auth.string_to_sign(),
            "host: api.example.com\ndate: Thu, 01 Jan 1970 00:00:00 GMT\nGET /v1/resource HTTP/1.1"
        );
        assert_eq!(
            auth.signature(),
            "Lu2OsiUtV63PdI7r4kknLOwjOPS8DU38vxftxmWREbo="
        );
        assert_eq!(
            auth.auth_url(),
            "https://api.example.com/v1/resource?authorization=YXBpX2tleT0ia2V5MTIzIiwgYWxnb3JpdGhtPSJobWFjLXNoYTI1NiIsIGhlYWRlcnM9Imhvc3QgZGF0ZSByZXF1ZXN0LWxpbmUiLCBzaWduYXR1cmU9Ikx1Mk9zaVV0VjYzUGRJN3I0a2tuTE93ak9QUzhEVTM4dnhmdHhtV1JFYm89Ig%3D%3D&date=Thu%2C+01+Jan+1970+00%3A00%3A00+GMT&host=api.example.com"
        );
    }

    #[test]
    fn signs_endpoint_text_verbatim() {
        let auth = fixed("https://API.Example.com:443/v1/a/../resource")
            .build()
            .unwrap();
        assert_eq!(
            auth.string_to_sign(),
            "host: API.Example.com:443\ndate: Thu, 01 Jan 1970 00:00:00 GMT\nGET /v1/a/../resource HTTP/1.1"
        );
        assert_eq!(
            auth.signature(),
            "nLYTynVV9WKRX6xk2OBABTgFUgtjHqXUnc6SKMFa/6o="
        );
        assert_eq!(
            auth.auth_url(),
            "https://API.Example.com:443/v1/a/../resource?authorization=YXBpX2tleT0ia2V5MTIzIiwgYWxnb3JpdGhtPSJobWFjLXNoYTI1NiIsIGhlYWRlcnM9Imhvc3QgZGF0ZSByZXF1ZXN0LWxpbmUiLCBzaWduYXR1cmU9Im5MWVR5blZWOVdLUlg2eGsyT0JBQlRnRlVndGpIcVhVbmM2U0tNRmEvNm89Ig%3D%3D&date=Thu%2C+01+Jan+1970+00%3A00%3A00+GMT&host=API.Example.com%3A443"
        );
    }

    #[test]
    fn method_changes_signature() {
        let auth = fixed(ENDPOINT).method("POST").build().unwrap();
        assert!(auth.string_to_sign().ends_with("POST /v1/resource HTTP/1.1"));
        assert_eq!(
            auth.signature(),
            "3HQsZZRG5p0fpthffAcC8Ke9bAzQYwzzhxkQPa0ZyN4="
        );
    }

    #[test]
    fn keeps_existing_query_pairs_first() {
        let auth = fixed("wss://iat-api.xfyun.cn/v2/iat?lang=en").build().unwrap();
        let url = url::Url::parse(auth.auth_url()).unwrap();
        let keys = url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect::<Vec<String>>();
        assert_eq!(keys, vec!["lang", "authorization", "date", "host"]);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let cases = vec![
            XfyunAuth::builder("", "key123", "s3cr3t"),
            XfyunAuth::builder("api.example.com/v1", "key123", "s3cr3t"),
            XfyunAuth::builder(ENDPOINT, "", "s3cr3t"),
            XfyunAuth::builder(ENDPOINT, "key123", ""),
            XfyunAuth::builder(ENDPOINT, "key123", "s3cr3t").algorithm("hmac-sha1"),
        ];
        for builder in cases {
            let desc = format!("{:?}", builder);
            match builder.build() {
                Err(Error::ConfigError(_)) => {}
                other => panic!("{} should fail, got {:?}", desc, other),
            }
        }
    }

    #[test]
    fn display_and_debug_hide_secret() {
        let auth = fixed(ENDPOINT).build().unwrap();
        assert_eq!(
            auth.to_string(),
            "<XfyunAuth https://api.example.com/v1/resource>"
        );
        assert!(!format!("{:?}", auth).contains("s3cr3t"));
        assert!(!format!("{:?}", fixed(ENDPOINT)).contains("s3cr3t"));
    }

    #[test]
    fn info_mirrors_accessors() {
        let auth = fixed(ENDPOINT).build().unwrap();
        let info = auth.info();
        assert_eq!(info.url, auth.auth_url());
        assert_eq!(info.authorization, auth.authorization());
        assert_eq!(info.date, "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(info.host, "api.example.com");
    }

    #[test]
    fn new_uses_defaults() {
        let auth = XfyunAuth::new(ENDPOINT, &Credentials::new("key123", "s3cr3t")).unwrap();
        assert_eq!(auth.method(), "GET");
        assert_eq!(auth.algorithm(), Algorithm::HmacSha256);
        assert!(auth.date().ends_with(" GMT"));
    }
}
