//! `GddSource` over the browser's `window.fetch`.

use gdd_core::source::check_status;
use gdd_core::{FetchError, GddQuery, GddSource, ServiceConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches GDD responses from the page's window.
#[derive(Debug, Clone, PartialEq)]
pub struct WebFetchSource {
    url: String,
}

impl WebFetchSource {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            url: config.gdd_url(),
        }
    }

    /// Endpoint URL with the query string, each value URI-encoded.
    pub fn request_url(&self, query: &GddQuery) -> String {
        let params: Vec<String> = query
            .pairs()
            .iter()
            .map(|(name, value)| {
                format!("{}={}", name, String::from(js_sys::encode_uri_component(value)))
            })
            .collect();
        format!("{}?{}", self.url, params.join("&"))
    }
}

impl GddSource for WebFetchSource {
    async fn fetch(&self, query: &GddQuery) -> Result<String, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no browser window".to_string()))?;
        let url = self.request_url(query);

        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        log::debug!("GET {} -> {}", url, response.status());

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = body
            .as_string()
            .ok_or_else(|| FetchError::Transport("response body is not text".to_string()))?;
        check_status(response.status(), body)
    }
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Transport(format!("{:?}", value))
}
