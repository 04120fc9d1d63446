use super::client::{ApiError, Client};
use crate::types::Rule;

impl Client {
    pub fn list_rules(&self) -> Result<Vec<Rule>, ApiError> {
        self.get_data("/rules/")
    }

    pub fn add_rule(&self, rule: &Rule) -> Result<String, ApiError> {
        self.post_ack("/rules/", rule)
    }

    /// Replace an existing rule wholesale; `rule.id` selects the row.
    pub fn update_rule(&self, rule: &Rule) -> Result<String, ApiError> {
        self.put_ack("/rules/", rule)
    }

    pub fn delete_rule(&self, id: u64) -> Result<String, ApiError> {
        self.delete_ack(&format!("/rules/{id}"))
    }
}
