use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Custom attribute carrying the customer identifier in the user pool schema.
pub const CUSTOM_CUSTOMER_ID: &str = "custom:customerId";

/// Cognito pre-token-generation trigger event, reduced to the fields the
/// trigger inspects. Every level defaults so that an event missing `request`
/// or `userAttributes` entirely still deserializes. Fields the trigger does
/// not know about are kept in the flattened maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerEvent {
    #[serde(rename = "userPoolId", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(rename = "userName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub request: TriggerRequest,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerRequest {
    #[serde(rename = "userAttributes", default)]
    pub user_attributes: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TriggerEvent {
    /// The `custom:customerId` attribute. An empty value is treated the same
    /// as an absent one.
    pub fn customer_id(&self) -> Option<&str> {
        self.request
            .user_attributes
            .get(CUSTOM_CUSTOMER_ID)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

/// Detail payload published when an authenticated user has no customer id.
/// Carries the identifying fields from the event so the consumer can resolve
/// and upsert the user without a round trip back to the user pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingCustomerIdDetail {
    #[serde(rename = "userPoolId", skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "userAttributes")]
    pub user_attributes: HashMap<String, String>,
}

impl MissingCustomerIdDetail {
    pub fn from_event(event: &TriggerEvent) -> Self {
        Self {
            user_pool_id: event.user_pool_id.clone(),
            user_name: event.user_name.clone(),
            user_attributes: event.request.user_attributes.clone(),
        }
    }
}
