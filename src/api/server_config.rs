use serde::Serialize;
use serde_json::Value;

use super::client::{ApiError, Client};
use crate::types::Downloader;

#[derive(Serialize)]
struct ConfigUpdate<'a> {
    key: &'a str,
    payload: &'a Value,
}

impl Client {
    /// Fetch one stored config value as raw JSON; schemas differ per key.
    pub fn get_config(&self, key: &str) -> Result<Value, ApiError> {
        self.get_data(&format!("/config/{key}"))
    }

    /// Store `payload` under `key`, replacing the previous value.
    pub fn set_config(&self, key: &str, payload: &Value) -> Result<String, ApiError> {
        self.post_ack("/config/", &ConfigUpdate { key, payload })
    }

    /// Downloaders the server knows, with their advertised save paths.
    pub fn downloaders(&self) -> Result<Vec<Downloader>, ApiError> {
        self.get_data("/config/downloaders")
    }
}
