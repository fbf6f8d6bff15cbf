//! Generic request passthrough commands

use anyhow::{Context, Result};
use bookshelf_core::render::render_notification;
use bookshelf_core::{ClientConfig, Method, RequestHook};
use serde_json::Value;

/// Send one request through a hook and print the response body
pub async fn request(
    config: ClientConfig,
    method: Method,
    path: &str,
    data: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let body: Value = data
        .map(serde_json::from_str)
        .transpose()
        .context("--data is not valid JSON")?
        .unwrap_or(Value::Null);

    let hook: RequestHook<Value> = RequestHook::new(config);
    let notify = !quiet;
    let outcome = match method {
        Method::Get => hook.get(path, notify).await,
        Method::Post => hook.post(path, &body, notify).await,
        Method::Put => hook.update(path, &body, notify).await,
        Method::Delete => hook.remove(path, notify).await,
    };

    let notification = hook.notification();
    if notification.visible {
        eprintln!("{}", render_notification(&notification));
    }

    let payload = outcome.with_context(|| format!("{} {} failed", method, path))?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
