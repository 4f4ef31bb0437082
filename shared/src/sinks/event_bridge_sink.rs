use async_trait::async_trait;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client as EventBridgeClient;
use tracing::info;

use crate::{
    MissingCustomerIdDetail, NotificationSink, TriggerError, TriggerEvent, TriggerResult,
};

/// Fixed source tag on published events.
pub const EVENT_SOURCE: &str = "nva.cognito";
/// Fixed detail-type tag on published events.
pub const EVENT_DETAIL_TYPE: &str = "updateUserAttributes";

/// Publishes the missing-customerId notification to an EventBridge bus.
pub struct EventBridgeSink {
    client: EventBridgeClient,
    event_bus_name: String,
}

impl EventBridgeSink {
    pub fn new(client: EventBridgeClient, event_bus_name: String) -> Self {
        Self {
            client,
            event_bus_name,
        }
    }
}

#[async_trait]
impl NotificationSink for EventBridgeSink {
    async fn notify_missing_customer_id(&self, event: &TriggerEvent) -> TriggerResult<()> {
        let detail = serde_json::to_string(&MissingCustomerIdDetail::from_event(event))?;

        let entry = PutEventsRequestEntry::builder()
            .event_bus_name(&self.event_bus_name)
            .source(EVENT_SOURCE)
            .detail_type(EVENT_DETAIL_TYPE)
            .detail(detail)
            .build();

        let result = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .map_err(|e| TriggerError::EventBridgeError(e.to_string()))?;

        // PutEvents reports partial failure per entry rather than through the
        // call result itself.
        if result.failed_entry_count() > 0 {
            let reason = result
                .entries()
                .iter()
                .filter_map(|entry| entry.error_message())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TriggerError::EventBridgeError(format!(
                "{} failed entries: {}",
                result.failed_entry_count(),
                reason
            )));
        }

        info!(
            "Published {} event to bus: {}",
            EVENT_DETAIL_TYPE, self.event_bus_name
        );
        Ok(())
    }
}
