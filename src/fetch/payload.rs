use serde::{Deserialize, Serialize};

use crate::constants::topics;
use crate::interfaces::mqtt::MqttMessage;
use crate::settings::Units;

// Payload keys mirror the MESSAGE_KEY_* identifiers compiled into the
// watchface firmware.

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LaunchPayload {
    pub minutes_to_launch: i64,
    pub rocket: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct WeatherPayload {
    pub units: Units,
    pub temperature: i32,
    pub conditions: u8,
}

/// Request message from the watch. Older watchface builds send an empty
/// payload; the field is optional for that reason.
#[derive(Debug, Default, Deserialize)]
pub struct WatchRequest {
    #[serde(rename = "MESSAGE_TYPE", default)]
    pub message_type: Option<String>,
}

pub fn to_app_message<P: Serialize>(payload: &P) -> MqttMessage {
    MqttMessage::new(topics::APP_MESSAGE, serde_json::to_string(payload).unwrap())
}
