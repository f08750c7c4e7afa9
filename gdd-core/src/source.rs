//! The seam through which GDD responses are fetched.
//!
//! The browser build implements [`GddSource`] over `window.fetch`; the native
//! build (`api` feature) over `reqwest`. Tests use in-memory stubs.

use crate::error::FetchError;
use crate::params::GddQuery;
use crate::response::RawResponse;

/// Fetches the raw body of a `GET /gdd` response.
///
/// Implementations pass the HTTP status and body through [`check_status`].
#[allow(async_fn_in_trait)]
pub trait GddSource {
    async fn fetch(&self, query: &GddQuery) -> Result<String, FetchError>;
}

/// Decide what to keep from a response with the given HTTP status.
///
/// 2xx bodies are kept as they are. Any other status is a transport failure
/// unless the body carries the service's own `error` field, which is then
/// surfaced like on a 200.
pub fn check_status(status: u16, body: String) -> Result<String, FetchError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    match RawResponse::from_json(&body) {
        Ok(raw) if raw.error.is_some() => Ok(body),
        _ => Err(FetchError::Transport(format!("HTTP status {}", status))),
    }
}

#[cfg(feature = "api")]
pub use http::HttpGddSource;

#[cfg(feature = "api")]
mod http {
    use super::{check_status, GddSource};
    use crate::config::ServiceConfig;
    use crate::error::FetchError;
    use crate::params::GddQuery;
    use log::debug;

    /// Native HTTP client for the GDD service.
    #[derive(Debug, Clone)]
    pub struct HttpGddSource {
        client: reqwest::Client,
        url: String,
    }

    impl HttpGddSource {
        pub fn new(config: &ServiceConfig) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .build()?;
            Ok(Self {
                client,
                url: config.gdd_url(),
            })
        }
    }

    impl GddSource for HttpGddSource {
        async fn fetch(&self, query: &GddQuery) -> Result<String, FetchError> {
            let response = self
                .client
                .get(&self.url)
                .query(&query.pairs())
                .send()
                .await?;
            let status = response.status();
            debug!("GET {} -> {}", response.url(), status);
            let body = response.text().await?;
            check_status(status.as_u16(), body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_bodies_pass_through_untouched() {
        assert_eq!(check_status(200, "{}".to_string()), Ok("{}".to_string()));
        // Non-JSON 2xx bodies are left for the controller to reject.
        assert_eq!(check_status(204, "".to_string()), Ok("".to_string()));
    }

    #[test]
    fn error_status_with_service_error_is_kept() {
        let body = r#"{"error": "Location not found"}"#.to_string();
        assert_eq!(check_status(404, body.clone()), Ok(body));
    }

    #[test]
    fn error_status_without_service_error_is_transport_failure() {
        let detail = r#"{"detail": "Internal Server Error"}"#.to_string();
        assert!(matches!(check_status(500, detail), Err(FetchError::Transport(_))));
        let html = "<html>Bad Gateway</html>".to_string();
        assert!(matches!(check_status(502, html), Err(FetchError::Transport(_))));
        let empty_error = r#"{"error": ""}"#.to_string();
        assert!(matches!(check_status(503, empty_error), Err(FetchError::Transport(_))));
    }
}
