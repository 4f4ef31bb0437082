use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use trigger_shared::{
    process_authentication_event, sink_from_config, NotificationSink, TriggerConfig, TriggerEvent,
};

async fn function_handler(
    event: LambdaEvent<Value>,
    sink: &dyn NotificationSink,
    config: &TriggerConfig,
) -> Result<Value, Error> {
    let (payload, _context) = event.into_parts();

    // The typed view is only used for inspection; the raw payload is what
    // goes back to Cognito, unchanged. A payload that does not match the
    // expected shape counts as "customerId missing", not as a fault.
    let typed = match serde_json::from_value::<TriggerEvent>(payload.clone()) {
        Ok(typed) => typed,
        Err(e) => {
            warn!("Unexpected event shape, treating customerId as missing: {}", e);
            TriggerEvent::default()
        }
    };

    process_authentication_event(&typed, sink, config).await?;

    Ok(payload)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = TriggerConfig::from_env()?;
    info!("Notification transport: {:?}", config.transport);

    // Client construction happens once, before the runtime loop, so the
    // handle is reused across invocations.
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sink = sink_from_config(&config, &aws_config)?;
    let config = Arc::new(config);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let sink = Arc::clone(&sink);
        let config = Arc::clone(&config);
        async move { function_handler(event, sink.as_ref(), config.as_ref()).await }
    }))
    .await
}
