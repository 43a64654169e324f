use ascii::AsciiString;
use duration_str::deserialize_option_duration;
use http::{HeaderName, HeaderValue};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use url::Url;

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// If false (or not defined), credentials are not allowed in requests
    pub allow_credentials: bool,
    /// Origins from which we allow requests
    pub allow_origins: Option<AnyOrUrlArray>,
    /// Maximum time between OPTIONS and the next request
    #[serde(deserialize_with = "deserialize_option_duration")]
    pub max_age: Option<Duration>,
    /// HTTP methods allowed to the endpoint.
    pub allow_methods: Option<AnyOrHttpMethodArray>,
    /// Headers allowed in incoming requests
    pub allow_headers: Option<AnyOrAsciiStringArray>,
}

impl CorsConfig {
    /// Builds the tower layer, rejecting credentials combined with a wildcard,
    /// which browsers refuse and tower-http does not allow.
    pub fn into_layer(self) -> crate::Result<CorsLayer> {
        if self.allow_credentials {
            let wildcard = [
                ("allow_origins", matches!(self.allow_origins, Some(AnyOrUrlArray::Any))),
                ("allow_methods", matches!(self.allow_methods, Some(AnyOrHttpMethodArray::Any))),
                ("allow_headers", matches!(self.allow_headers, Some(AnyOrAsciiStringArray::Any))),
            ]
            .into_iter()
            .find_map(|(setting, any)| any.then_some(setting));

            if let Some(setting) = wildcard {
                return Err(crate::Error::InvalidCorsConfig(format!(
                    "allow_credentials cannot be combined with {setting} = \"any\""
                )));
            }
        }

        let mut layer = CorsLayer::new().allow_credentials(self.allow_credentials);

        if let Some(origins) = self.allow_origins {
            layer = layer.allow_origin(origins);
        }

        if let Some(max_age) = self.max_age {
            layer = layer.max_age(max_age);
        }

        if let Some(methods) = self.allow_methods {
            layer = layer.allow_methods(methods);
        }

        if let Some(headers) = self.allow_headers {
            layer = layer.allow_headers(headers);
        }

        Ok(layer)
    }
}

#[derive(Debug, PartialEq, Clone, Copy, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Options,
}

impl From<HttpMethod> for http::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Options => http::Method::OPTIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(expecting = "expecting string \"any\", or an array of urls")]
pub enum AnyOrUrlArray {
    Any,
    #[serde(untagged)]
    Explicit(Vec<Url>),
}

impl From<AnyOrUrlArray> for AllowOrigin {
    fn from(value: AnyOrUrlArray) -> Self {
        match value {
            AnyOrUrlArray::Any => AllowOrigin::any(),
            AnyOrUrlArray::Explicit(ref origins) => {
                // Browsers send the origin without a trailing slash.
                let origins = origins
                    .iter()
                    .map(|url| url.as_str())
                    .map(|url| url.strip_suffix('/').unwrap_or(url))
                    .filter_map(|url| HeaderValue::from_str(url).ok());

                AllowOrigin::list(origins)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(expecting = "expecting string \"any\", or an array of capitalized HTTP methods")]
pub enum AnyOrHttpMethodArray {
    Any,
    #[serde(untagged)]
    Explicit(Vec<HttpMethod>),
}

impl From<AnyOrHttpMethodArray> for AllowMethods {
    fn from(value: AnyOrHttpMethodArray) -> Self {
        match value {
            AnyOrHttpMethodArray::Any => AllowMethods::any(),
            AnyOrHttpMethodArray::Explicit(methods) => {
                let methods = methods.iter().map(|method| http::Method::from(*method));
                AllowMethods::list(methods)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(expecting = "expecting string \"any\", or an array of ASCII strings")]
pub enum AnyOrAsciiStringArray {
    Any,
    #[serde(untagged)]
    Explicit(Vec<AsciiString>),
}

impl From<AnyOrAsciiStringArray> for AllowHeaders {
    fn from(value: AnyOrAsciiStringArray) -> Self {
        match value {
            AnyOrAsciiStringArray::Any => AllowHeaders::any(),
            AnyOrAsciiStringArray::Explicit(headers) => {
                let headers = headers
                    .iter()
                    .filter_map(|header| HeaderName::from_bytes(header.as_bytes()).ok());

                AllowHeaders::list(headers)
            }
        }
    }
}
