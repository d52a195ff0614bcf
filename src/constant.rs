pub const AUTHORIZATION_KEY: &str = "authorization";
pub const DATE_KEY: &str = "date";
pub const HOST_KEY: &str = "host";

pub const PAYLOAD_API_KEY: &str = "api_key";
pub const PAYLOAD_ALGORITHM: &str = "algorithm";
pub const PAYLOAD_HEADERS: &str = "headers";
pub const PAYLOAD_SIGNATURE: &str = "signature";

pub const SIGNED_HEADERS_VALUE: &str = "host date request-line";
pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_ALGORITHM: &str = "hmac-sha256";

pub const API_KEY_ENV: &str = "XFYUN_API_KEY";
pub const API_SECRET_ENV: &str = "XFYUN_API_SECRET";

pub const ENDPOINT_ENV: &str = "api_url";
pub const METHOD_ENV: &str = "method";
