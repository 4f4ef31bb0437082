use tracing::{info, warn};

use crate::{NotificationSink, TriggerConfig, TriggerEvent, TriggerResult};

/// Core trigger logic, independent of the configured transport.
///
/// A present, non-empty customerId means no side effect. A missing one means
/// exactly one notification through the sink before returning. Whether a sink
/// failure fails the invocation is governed by the explicit
/// `fail_on_notification_error` flag rather than leaking out accidentally.
pub async fn process_authentication_event(
    event: &TriggerEvent,
    sink: &dyn NotificationSink,
    config: &TriggerConfig,
) -> TriggerResult<()> {
    match event.customer_id() {
        Some(customer_id) => {
            info!("User already has customerId: {}", customer_id);
            Ok(())
        }
        None => {
            info!("customerId missing from user attributes, notifying");
            match sink.notify_missing_customer_id(event).await {
                Ok(()) => Ok(()),
                Err(e) if config.fail_on_notification_error => {
                    warn!("Notification failed, failing invocation as configured: {}", e);
                    Err(e)
                }
                Err(e) => {
                    warn!("Notification failed, continuing authentication flow: {}", e);
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NotificationTransport, TriggerError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingSink {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify_missing_customer_id(&self, _event: &TriggerEvent) -> TriggerResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TriggerError::EventBridgeError("simulated outage".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn config(fail_on_notification_error: bool) -> TriggerConfig {
        TriggerConfig {
            transport: NotificationTransport::EventBridge,
            event_bus_name: "default".to_string(),
            user_api_url: None,
            fail_on_notification_error,
        }
    }

    fn event(value: serde_json::Value) -> TriggerEvent {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_present_customer_id_skips_notification() {
        let sink = RecordingSink::new(false);
        let event = event(json!({
            "request": {"userAttributes": {"custom:customerId": "abc123"}}
        }));

        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        assert_eq!(sink.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_customer_id_notifies_once() {
        let sink = RecordingSink::new(false);
        let event = event(json!({"request": {"userAttributes": {}}}));

        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_absent_user_attributes_notifies_once() {
        let sink = RecordingSink::new(false);
        let event = event(json!({"request": {}}));

        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_repeat_invocations_notify_independently() {
        // No deduplication: the same event twice produces two notifications.
        let sink = RecordingSink::new(false);
        let event = event(json!({"request": {"userAttributes": {}}}));

        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        assert_eq!(sink.call_count(), 2);
    }

    #[tokio::test]
    async fn test_sink_failure_swallowed_by_default() {
        let sink = RecordingSink::new(true);
        let event = event(json!({"request": {}}));

        let result = process_authentication_event(&event, &sink, &config(false)).await;
        assert!(result.is_ok());
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_sink_failure_propagates_when_configured() {
        let sink = RecordingSink::new(true);
        let event = event(json!({"request": {}}));

        let result = process_authentication_event(&event, &sink, &config(true)).await;
        assert!(matches!(result, Err(TriggerError::EventBridgeError(_))));
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_customer_id_notifies() {
        let sink = RecordingSink::new(false);
        let event = event(json!({
            "request": {"userAttributes": {"custom:customerId": ""}}
        }));

        process_authentication_event(&event, &sink, &config(false))
            .await
            .unwrap();
        assert_eq!(sink.call_count(), 1);
    }
}
