pub mod event_bridge_sink;
pub mod http_sink;

pub use event_bridge_sink::*;
pub use http_sink::*;

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::SdkConfig;

use crate::{NotificationTransport, TriggerConfig, TriggerError, TriggerEvent, TriggerResult};

/// Destination for the fire-and-forget "customerId missing" notification.
/// Implementations deliver at most one outbound call per invocation, with no
/// retry and no deduplication.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify_missing_customer_id(&self, event: &TriggerEvent) -> TriggerResult<()>;
}

/// Build the configured sink once per process. The Lambda entry point calls
/// this before entering the runtime loop so the underlying client is reused
/// across invocations.
pub fn sink_from_config(
    config: &TriggerConfig,
    aws_config: &SdkConfig,
) -> TriggerResult<Arc<dyn NotificationSink>> {
    match config.transport {
        NotificationTransport::EventBridge => {
            let client = aws_sdk_eventbridge::Client::new(aws_config);
            Ok(Arc::new(EventBridgeSink::new(
                client,
                config.event_bus_name.clone(),
            )))
        }
        NotificationTransport::Http => {
            let base_url = config.user_api_url.clone().ok_or_else(|| {
                TriggerError::ConfigurationError(
                    "USER_API_URL must be set when NOTIFICATION_TRANSPORT is http".to_string(),
                )
            })?;
            Ok(Arc::new(HttpSink::new(reqwest::Client::new(), base_url)))
        }
    }
}
