use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::catalog::LoadError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// GET a JSON document from the catalog store.
/// Sends the `API-Token` header when a token is configured and maps
/// transport, status and decoding failures to [`LoadError`].
pub async fn get_json(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    endpoint: &str,
) -> Result<Value, LoadError> {
    let url = format!("{}{}", api_base_url, endpoint);

    // --- Curl Logging ---
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));
    if !api_token.is_empty() {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'API-Token: ***'").fg(yansi::Color::Magenta)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let mut req = client.get(&url);
    if !api_token.is_empty() {
        req = req.header("API-Token", api_token);
    }

    let response = req
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, %url, "Catalog API returned an error status");
        return Err(LoadError::Api(format!("HTTP {}: {}", status, body)));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    let value: Value = serde_json::from_str(&text)?;

    log_output(format!(
        "Response:\n{}",
        Paint::new(format!("{} bytes", text.len())).rgb(100, 100, 100)
    ));
    Ok(value)
}
