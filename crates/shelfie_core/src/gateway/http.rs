//! Blocking HTTP implementation of the gateway seam.

use reqwest::blocking::Client;
use serde_json::Value;

use super::{application_message, ApiRequest, FetchError, Gateway, GatewayResult, Method};
use crate::config::ShelfieConfig;

/// One-attempt HTTP gateway over the remote book-tracking API.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &ShelfieConfig) -> Self {
        Self::new(config.api_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Gateway for HttpGateway {
    fn call(&self, request: &ApiRequest) -> GatewayResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let value: Value = serde_json::from_str(&text)
            .map_err(|_| FetchError::Network(format!("non-JSON response (HTTP {status})")))?;

        if !status.is_success() {
            return Err(FetchError::Application {
                message: application_message(&value),
            });
        }

        Ok(value)
    }
}
