use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::ApiResponse;

const USER_AGENT: &str = concat!("magpie-console/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("server returned http {status} for {url}")]
    Http { url: String, status: u16 },
    #[error("cannot encode request body for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The envelope came back with a nonzero business code.
    #[error("{message} (server code {code})")]
    Server { code: i64, message: String },
    #[error("response from {url} carried no data")]
    MissingData { url: String },
}

/// Blocking client for the aggregation server's admin API.
///
/// Every call sends the configured key as `X-API-Key`, unwraps the response
/// envelope and turns nonzero business codes into [`ApiError::Server`].
pub struct Client {
    agent: ureq::Agent,
    base: String,
    api_key: String,
}

impl Client {
    pub fn new(server_url: &str, api_key: &str, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent: config.into(),
            base: server_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn transport(url: &str, source: ureq::Error) -> ApiError {
        ApiError::Transport {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    fn execute_get(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        debug!(%url, "GET");
        let mut request = self.agent.get(url);
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        request.call().map_err(|err| Self::transport(url, err))
    }

    fn execute_delete(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        debug!(%url, "DELETE");
        let mut request = self.agent.delete(url);
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        request.call().map_err(|err| Self::transport(url, err))
    }

    fn execute_post_json(
        &self,
        url: &str,
        payload: &str,
    ) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        debug!(%url, "POST");
        let mut request = self
            .agent
            .post(url)
            .header("Content-Type", "application/json");
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        request.send(payload).map_err(|err| Self::transport(url, err))
    }

    fn execute_put_json(
        &self,
        url: &str,
        payload: &str,
    ) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        debug!(%url, "PUT");
        let mut request = self
            .agent
            .put(url)
            .header("Content-Type", "application/json");
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        request.send(payload).map_err(|err| Self::transport(url, err))
    }

    /// Read the envelope out of a response, mapping http-level and
    /// business-level failures to their own error variants.
    fn parse<T: DeserializeOwned>(
        url: &str,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status().as_u16();
        if status >= 400 {
            warn!(%url, status, "request rejected");
            return Err(ApiError::Http {
                url: url.to_string(),
                status,
            });
        }
        let envelope: ApiResponse<T> = serde_json::from_reader(response.body_mut().as_reader())
            .map_err(|err| ApiError::Decode {
                url: url.to_string(),
                source: err,
            })?;
        if envelope.code != 0 {
            warn!(%url, code = envelope.code, message = %envelope.message, "server error");
            return Err(ApiError::Server {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    fn require_data<T>(url: &str, envelope: ApiResponse<T>) -> Result<T, ApiError> {
        envelope.data.ok_or_else(|| ApiError::MissingData {
            url: url.to_string(),
        })
    }

    fn encode<B: Serialize>(url: &str, body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|err| ApiError::Encode {
            url: url.to_string(),
            source: err,
        })
    }

    pub(crate) fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let envelope = Self::parse(&url, self.execute_get(&url)?)?;
        Self::require_data(&url, envelope)
    }

    /// GET where only the envelope message matters.
    pub(crate) fn get_ack(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);
        let envelope: ApiResponse<serde_json::Value> =
            Self::parse(&url, self.execute_get(&url)?)?;
        Ok(envelope.message)
    }

    pub(crate) fn post_data<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let payload = Self::encode(&url, body)?;
        let envelope = Self::parse(&url, self.execute_post_json(&url, &payload)?)?;
        Self::require_data(&url, envelope)
    }

    pub(crate) fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = self.url(path);
        let payload = Self::encode(&url, body)?;
        let envelope: ApiResponse<serde_json::Value> =
            Self::parse(&url, self.execute_post_json(&url, &payload)?)?;
        Ok(envelope.message)
    }

    pub(crate) fn put_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = self.url(path);
        let payload = Self::encode(&url, body)?;
        let envelope: ApiResponse<serde_json::Value> =
            Self::parse(&url, self.execute_put_json(&url, &payload)?)?;
        Ok(envelope.message)
    }

    pub(crate) fn delete_ack(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);
        let envelope: ApiResponse<serde_json::Value> =
            Self::parse(&url, self.execute_delete(&url)?)?;
        Ok(envelope.message)
    }

    /// POST with credentials in query parameters and an empty body; the user
    /// endpoints take their input this way.
    pub(crate) fn post_query_ack(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let mut request = self.agent.post(&url);
        for (key, value) in params {
            request = request.query(*key, *value);
        }
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        let response = request.send("").map_err(|err| Self::transport(&url, err))?;
        let envelope: ApiResponse<serde_json::Value> = Self::parse(&url, response)?;
        Ok(envelope.message)
    }

    pub(crate) fn put_query_ack(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let mut request = self.agent.put(&url);
        for (key, value) in params {
            request = request.query(*key, *value);
        }
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        let response = request.send("").map_err(|err| Self::transport(&url, err))?;
        let envelope: ApiResponse<serde_json::Value> = Self::parse(&url, response)?;
        Ok(envelope.message)
    }

    /// POST an urlencoded form without the api-key header; used for login,
    /// which happens before any key exists.
    pub(crate) fn post_form_data<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .agent
            .post(&url)
            .send_form(form.iter().copied())
            .map_err(|err| Self::transport(&url, err))?;
        let envelope = Self::parse(&url, response)?;
        Self::require_data(&url, envelope)
    }

    /// POST a preassembled body with an explicit content type; used for the
    /// multipart spreadsheet upload.
    pub(crate) fn post_raw_ack(
        &self,
        path: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!(%url, bytes = body.len(), "POST");
        let mut request = self.agent.post(&url).header("Content-Type", content_type);
        if !self.api_key.is_empty() {
            request = request.header("X-API-Key", self.api_key.as_str());
        }
        let response = request.send(body).map_err(|err| Self::transport(&url, err))?;
        let envelope: ApiResponse<serde_json::Value> = Self::parse(&url, response)?;
        Ok(envelope.message)
    }
}
