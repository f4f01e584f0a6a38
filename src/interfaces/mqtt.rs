use std::env;
use std::str::{from_utf8, Utf8Error};

use once_cell::sync::Lazy;
use rumqttc::{Client, Connection, Event, MqttOptions, Packet, QoS};
use thiserror::Error;

use crate::constants::{defaults, envvars};
use crate::helpers;

static MQTT_BRIDGE_HOST: Lazy<String> = Lazy::new(|| {
    env::var(envvars::MQTT_BRIDGE_HOST).unwrap_or_else(|_| defaults::MQTT_BRIDGE_HOST.to_string())
});

static MQTT_BRIDGE_PORT: Lazy<u16> = Lazy::new(|| {
    env::var(envvars::MQTT_BRIDGE_PORT)
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(defaults::MQTT_BRIDGE_PORT)
});

#[derive(Debug, Clone, PartialEq)]
pub struct MqttMessage {
    pub topic: String,
    pub payload: String,
}

impl MqttMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        MqttMessage {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MqttError {
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    #[error(transparent)]
    MqttClient(#[from] rumqttc::ClientError),
    #[error(transparent)]
    MqttConnection(#[from] rumqttc::ConnectionError),
}

fn rand_client_id(prefix: Option<&str>) -> String {
    const RAND_ID_BYTES: usize = 3;
    let randhex = helpers::rand_hex(RAND_ID_BYTES);

    match prefix {
        Some(pref) => format!("{pref}-{randhex}"),
        None => randhex,
    }
}

fn client_conn(client_id: String) -> (Client, Connection) {
    let host = MQTT_BRIDGE_HOST.clone();
    let port = *MQTT_BRIDGE_PORT;
    log::info!("Establishing MQTT connection to {host}:{port} as {client_id}");

    let mqttoptions = MqttOptions::new(client_id, host, port);
    Client::new(mqttoptions, 10)
}

/// Publishes the given messages on a short-lived connection and waits until
/// each one has been acknowledged by the bridge.
pub fn publish_msgs(
    messages: &[MqttMessage],
    client_prefix: Option<&str>,
    retain: bool,
) -> Result<(), MqttError> {
    let (mut client, mut connection) = client_conn(rand_client_id(client_prefix));

    let mut expected_msg_acks = messages.len();

    for msg in messages.iter() {
        log::debug!("Publishing to {}: {}", msg.topic, msg.payload);

        client.publish(
            msg.topic.clone(),
            QoS::AtLeastOnce,
            retain,
            msg.payload.as_bytes(),
        )?;
    }

    for notification in connection.iter() {
        log::trace!("Notification = {:?}", notification);
        match notification {
            Ok(Event::Incoming(Packet::PubAck(_))) => expected_msg_acks -= 1,
            Err(e) => return Err(e.into()),
            _ => (),
        }
        if expected_msg_acks == 0 {
            break;
        }
    }
    client.disconnect()?;
    Ok(())
}

/// Subscribes to the given topics and runs `func` on every incoming message.
/// Only returns on connection failure.
pub fn sub_topics<F>(topics: &[&str], client_prefix: Option<&str>, func: F) -> Result<(), MqttError>
where
    F: Fn(MqttMessage),
{
    let (mut client, mut connection) = client_conn(rand_client_id(client_prefix));

    for topic in topics.iter() {
        log::info!("Subscribing to {}", topic);
        client.subscribe(*topic, QoS::AtLeastOnce)?;
    }

    for notification in connection.iter() {
        log::trace!("Notification = {:?}", notification);
        match notification {
            Ok(Event::Incoming(Packet::Publish(r))) => {
                let msg = MqttMessage {
                    topic: r.topic,
                    payload: from_utf8(&r.payload)?.into(),
                };
                func(msg);
            }
            Err(e) => return Err(e.into()),
            _ => (),
        }
    }
    client.disconnect()?;
    Ok(())
}
