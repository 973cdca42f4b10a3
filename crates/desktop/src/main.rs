//! `speedorz-orders`: submit one purchase order from an order sheet.
//!
//! ```text
//! speedorz-orders order.json
//! ```
//!
//! Configuration comes from `SPEEDORZ_ENV`, `SPEEDORZ_API_URL` and
//! `SPEEDORZ_AUTH_TOKEN`.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use speedorz_desktop::{ApiClient, ClientConfig, OrderSheet, OrderWorkflow};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    speedorz_observability::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: speedorz-orders <order-sheet.json>")?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read order sheet {path}"))?;
    let sheet = OrderSheet::from_json(&text)
        .with_context(|| format!("invalid order sheet {path}"))?;

    let config = ClientConfig::from_env().context("failed to load client configuration")?;
    tracing::info!(
        environment = ?config.environment,
        api_url = %config.api_url,
        authenticated = config.auth_token.is_some(),
        "configuration loaded"
    );
    let api = Arc::new(ApiClient::from_config(&config));

    let mut workflow = OrderWorkflow::enter(api);
    workflow.wait_for_reference_data().await;

    if workflow.source().vehicles().is_empty() {
        tracing::warn!("no promotional vehicles loaded; the order will have no lines");
    }

    workflow.set_client(sheet.client_id);
    workflow.set_user(sheet.user_id);
    let lines = workflow.update_lines(&sheet.line_inputs()).len();
    tracing::info!(lines, "order lines captured");

    let notice = workflow.save().await;
    println!("{notice}");
    workflow.leave();

    Ok(if notice.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
