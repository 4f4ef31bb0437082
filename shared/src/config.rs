use std::env;
use std::str::FromStr;

use crate::{TriggerError, TriggerResult};

/// Which notification transport the trigger publishes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTransport {
    EventBridge,
    Http,
}

impl FromStr for NotificationTransport {
    type Err = TriggerError;

    fn from_str(value: &str) -> TriggerResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eventbridge" => Ok(NotificationTransport::EventBridge),
            "http" => Ok(NotificationTransport::Http),
            other => Err(TriggerError::ConfigurationError(format!(
                "Unknown NOTIFICATION_TRANSPORT: {}",
                other
            ))),
        }
    }
}

/// Runtime configuration for the trigger, read from Lambda environment
/// variables set at deploy time.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    pub transport: NotificationTransport,
    pub event_bus_name: String,
    pub user_api_url: Option<String>,
    /// When set, a failed notification fails the whole invocation and with it
    /// the authentication flow. Off by default: the notification is
    /// best-effort and must not block token issuance.
    pub fail_on_notification_error: bool,
}

impl TriggerConfig {
    pub fn from_env() -> TriggerResult<Self> {
        Self::from_vars(
            env::var("NOTIFICATION_TRANSPORT").ok(),
            env::var("EVENT_BUS_NAME").ok(),
            env::var("USER_API_URL").ok(),
            env::var("FAIL_ON_NOTIFICATION_ERROR").ok(),
        )
    }

    fn from_vars(
        transport: Option<String>,
        event_bus_name: Option<String>,
        user_api_url: Option<String>,
        fail_on_notification_error: Option<String>,
    ) -> TriggerResult<Self> {
        let transport = match transport {
            Some(value) => value.parse()?,
            None => NotificationTransport::EventBridge,
        };

        let user_api_url = user_api_url.filter(|url| !url.trim().is_empty());
        if transport == NotificationTransport::Http && user_api_url.is_none() {
            return Err(TriggerError::ConfigurationError(
                "USER_API_URL must be set when NOTIFICATION_TRANSPORT is http".to_string(),
            ));
        }

        Ok(Self {
            transport,
            event_bus_name: event_bus_name.unwrap_or_else(|| "default".to_string()),
            user_api_url,
            fail_on_notification_error: fail_on_notification_error
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
        })
    }
}
