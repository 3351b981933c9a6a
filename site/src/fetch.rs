//! Browser `fetch` transport for the contact form.

use bird_contact::{ContactRecord, ContactTransport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// POSTs the record as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

fn network_error(err: JsValue) -> TransportError {
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    TransportError::Network(message)
}

impl ContactTransport for FetchTransport {
    async fn send(&self, record: &ContactRecord) -> Result<(), TransportError> {
        let body =
            serde_json::to_string(record).map_err(|e| TransportError::Encode(e.to_string()))?;

        let headers = Headers::new().map_err(network_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(network_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &init).map_err(network_error)?;
        let window =
            web_sys::window().ok_or_else(|| TransportError::Network("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = response.dyn_into().map_err(network_error)?;

        if response.ok() {
            Ok(())
        } else {
            Err(TransportError::Status(response.status()))
        }
    }
}
