use dioxus::prelude::*;
use std::time::Duration;

/// Wait `delay` using the webview's timer, so the same code runs on web and
/// desktop without pulling in a runtime.
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    let script = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); return true;",
        delay.as_millis()
    );
    if let Err(e) = document::eval(&script).join::<bool>().await {
        tracing::debug!(error = ?e, "Timer eval failed, continuing without delay");
    }
}
