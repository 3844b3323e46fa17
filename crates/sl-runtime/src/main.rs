//! Stock-Ledger dispatcher harness.
//!
//! Reads one JSON request envelope per stdin line, routes it through the
//! dispatcher, and writes the JSON reply to stdout. Intended for driving the
//! components from an external ledger-execution environment or from shell
//! scripts during development.
//!
//! ```bash
//! sl-runtime config.json < requests.jsonl
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use shared_types::{Account, AuthenticatedCall, RawRequest};
use sl_runtime::prelude::{ComponentId, Dispatcher, RuntimeConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// One stdin line: routing, identity, and the wire request.
#[derive(Debug, Deserialize)]
struct DriveRequest {
    component: ComponentId,
    caller: Account,
    timestamp: u64,
    #[serde(flatten)]
    raw: RawRequest,
}

fn load_config() -> Result<RuntimeConfig> {
    let path = std::env::args()
        .nth(1)
        .context("usage: sl-runtime <config.json>")?;
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing config {path}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;
    let dispatcher = Dispatcher::new(&config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let drive: DriveRequest = serde_json::from_str(&line).context("parsing request line")?;
        let call = AuthenticatedCall::new(drive.caller, drive.timestamp);
        let reply = dispatcher
            .dispatch(drive.component, &call, &drive.raw)
            .await;
        println!("{}", serde_json::to_string(&reply)?);
    }

    let stats = dispatcher.stats().await;
    info!(
        handled = stats.handled,
        succeeded = stats.succeeded,
        rejected = stats.rejected,
        logs_emitted = stats.logs_emitted,
        "input stream closed"
    );
    Ok(())
}
