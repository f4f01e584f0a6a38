use anyhow::Result;

use crate::command::{fetch_launch, fetch_weather};
use crate::constants::topics;
use crate::fetch::payload::WatchRequest;
use crate::interfaces::mqtt::{self, MqttMessage};

#[derive(Clone, Copy, Debug, PartialEq)]
enum FetchKind {
    Launch,
    Weather,
}

/// Companion event loop: one launch fetch at startup, then every watch
/// request dispatches the matching fetcher. Only returns on channel failure.
pub fn listen() -> Result<()> {
    // The watchface expects fresh launch data as soon as the companion is up
    run_fetch(FetchKind::Launch);

    mqtt::sub_topics(&[topics::REQUEST], Some("wrc-listen"), handle_request)?;
    Ok(())
}

fn handle_request(msg: MqttMessage) {
    run_fetch(selected_fetch(&msg.payload));
}

fn run_fetch(kind: FetchKind) {
    let res = match kind {
        FetchKind::Launch => fetch_launch(),
        FetchKind::Weather => fetch_weather(),
    };
    if let Err(e) = res {
        log::error!("{:?} fetch failed: {:#}", kind, e);
    }
}

/// Requests explicitly asking for weather get it; everything else, including
/// payloads that do not parse, falls back to a launch-data refresh.
fn selected_fetch(payload: &str) -> FetchKind {
    let request: WatchRequest = serde_json::from_str(payload).unwrap_or_default();
    match request.message_type.as_deref() {
        Some("weather") => FetchKind::Weather,
        _ => FetchKind::Launch,
    }
}
