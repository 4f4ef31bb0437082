use async_trait::async_trait;
use tracing::info;

use crate::{NotificationSink, TriggerError, TriggerEvent, TriggerResult};

/// Fixed upsert path on the user API.
pub const USER_UPSERT_PATH: &str = "/users/upsert";

/// Posts the event to the user API upsert endpoint.
pub struct HttpSink {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSink {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn upsert_url(&self) -> String {
        format!("{}{}", self.base_url, USER_UPSERT_PATH)
    }
}

#[async_trait]
impl NotificationSink for HttpSink {
    async fn notify_missing_customer_id(&self, event: &TriggerEvent) -> TriggerResult<()> {
        let response = self
            .client
            .post(self.upsert_url())
            .json(event)
            .send()
            .await
            .map_err(|e| TriggerError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriggerError::HttpError(format!(
                "User API upsert returned {}",
                status
            )));
        }

        info!("Requested user upsert, status: {}", status);
        Ok(())
    }
}
