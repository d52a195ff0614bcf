use chrono::{DateTime, Utc};
use url::{form_urlencoded, Url};

use crate::constant::{HTTP_VERSION, RFC1123_FORMAT};
use crate::error::{Error, Result};

const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Target endpoint split into the parts that take part in signing.
///
/// The `url` crate only validates the endpoint; host and path are sliced out
/// of the caller's text unchanged, so case, explicit ports and `..` segments
/// are signed exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    raw: String,
    host: String,
    path: String,
}

impl Endpoint {
    pub fn parse(endpoint: &str) -> Result<Self> {
        let raw = endpoint.trim();
        if raw.is_empty() {
            return Err(Error::config("endpoint is empty"));
        }

        let url = Url::parse(raw)?;
        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(Error::config(format!(
                "unsupported endpoint scheme `{}`",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(Error::config("endpoint has no host"));
        }

        let rest = match raw.split_once("://") {
            Some((_, rest)) => rest,
            None => {
                return Err(Error::config(format!(
                    "endpoint `{}` is not an absolute URL",
                    raw
                )))
            }
        };
        let authority_end = rest
            .find(|c: char| c == '/' || c == '?' || c == '#')
            .unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);
        // userinfo is never part of the signed host
        let host = match authority.rsplit_once('@') {
            Some((_, host)) => host,
            None => authority,
        };
        let path_end = tail.find(|c: char| c == '?' || c == '#').unwrap_or(tail.len());

        Ok(Self {
            raw: raw.to_string(),
            host: host.to_string(),
            path: tail[..path_end].to_string(),
        })
    }

    /// Endpoint text as given, minus surrounding whitespace.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Authority as sent in the `host` header.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends form-encoded `pairs` to the query, ahead of any fragment.
    pub fn with_query_pairs(&self, pairs: &[(&str, &str)]) -> String {
        let (base, fragment) = match self.raw.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (self.raw.as_str(), None),
        };

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        let query = serializer.finish();

        let separator = match base.find('?') {
            Some(i) if i + 1 < base.len() && !base.ends_with('&') => "&",
            Some(_) => "",
            None => "?",
        };

        let mut url = format!("{}{}{}", base, separator, query);
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

/// Inputs of the `host date request-line` canonical string.
#[derive(Debug, Clone)]
pub struct StringToSign<'a> {
    endpoint: &'a Endpoint,
    method: &'a str,
    date: &'a str,
}

impl<'a> StringToSign<'a> {
    pub fn new(endpoint: &'a Endpoint, method: &'a str, date: &'a str) -> Self {
        Self {
            endpoint,
            method,
            date,
        }
    }

    pub fn request_line(&self) -> String {
        format!(
            "{method} {path} {version}",
            method = self.method,
            path = self.endpoint.path(),
            version = HTTP_VERSION,
        )
    }

    pub fn string_to_sign(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("host: {}\n", self.endpoint.host()));
        s.push_str(&format!("date: {}\n", self.date));
        s.push_str(&self.request_line());

        s
    }
}

#[inline]
pub fn rfc1123_date(date: DateTime<Utc>) -> String {
    date.format(RFC1123_FORMAT).to_string()
}
