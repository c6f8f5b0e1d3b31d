use axum::http::{HeaderMap, Uri, header::HOST};

const PAGE_PARAM: &str = "page";
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds `next` / `previous` URLs for a list response.
///
/// Links repeat the request's own query string with the `page` parameter
/// replaced; the link to page 1 carries no `page` at all. With a `Host`
/// header the links are absolute, otherwise they are path-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    base: String,
    retained: Vec<String>,
}

impl PageLinks {
    pub fn from_request(headers: &HeaderMap, uri: &Uri) -> Self {
        let base = match request_origin(headers, uri) {
            Some(origin) => format!("{}{}", origin, uri.path()),
            None => uri.path().to_string(),
        };

        let retained = uri
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(PAGE_PARAM))
            .map(str::to_string)
            .collect();

        Self { base, retained }
    }

    pub fn link(&self, page: u64) -> String {
        let mut pairs = self.retained.clone();
        if page > 1 {
            pairs.push(format!("{PAGE_PARAM}={page}"));
        }

        if pairs.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, pairs.join("&"))
        }
    }
}

/// `scheme://host` the client addressed, from `Host` (or the URI authority)
/// and `x-forwarded-proto`. `None` when no host is known.
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))?;

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|scheme| !scheme.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    Some(format!("{}://{}", scheme, host))
}
