use super::client::{ApiError, Client};
use crate::types::User;

impl Client {
    /// Exchange credentials for the account's API key. Runs without an
    /// `X-API-Key` header since none exists yet.
    pub fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.post_form_data("/users/login", &[("username", username), ("password", password)])
    }

    pub fn create_user(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.post_query_ack("/users", &[("username", username), ("password", password)])
    }

    /// Change an existing account's password.
    pub fn update_user(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.put_query_ack("/users", &[("username", username), ("password", password)])
    }
}
