use anyhow::Result;
use kvstore::KVDb;

use crate::constants::keys;
use crate::fetch::{self, payload, weather};
use crate::interfaces::mqtt::MqttMessage;
use crate::interfaces::{geoloc, kvpath, mqtt};
use crate::settings;

/// One-shot weather fetch. A no-op unless the settings blob carries a
/// weather API key.
pub fn fetch_weather() -> Result<()> {
    let kvs = KVDb::new(kvpath::SQLITE_STORE.as_path())?;
    let cache = KVDb::new(kvpath::SQLITE_CACHE.as_path())?;
    match weather_app_message(&kvs, &cache)? {
        Some(msg) => {
            mqtt::publish_msgs(&[msg], Some("wrc-weather"), false)?;
            log::info!("Weather data sent to watch");
        }
        None => log::debug!("No weather API key configured; nothing sent"),
    }
    Ok(())
}

/// The full weather pipeline short of the relay itself: settings gate,
/// position, API call, payload. None when the fetch is unconfigured.
fn weather_app_message(kvs: &KVDb, cache: &KVDb) -> Result<Option<MqttMessage>> {
    let settings = settings::load(kvs)?;
    let Some(api_key) = settings.api_key() else {
        return Ok(None);
    };

    let position =
        geoloc::current_position(cache, &fetch::base_url(kvs, keys::GEOIP_API_BASE_URL))?;

    let agent = fetch::http_agent()?;
    let observation = weather::current_weather(
        &agent,
        &fetch::base_url(kvs, keys::WEATHER_API_BASE_URL),
        api_key,
        &position,
        settings.units_param(),
    )?;

    Ok(Some(payload::to_app_message(&payload::WeatherPayload {
        units: settings.units,
        temperature: observation.temperature,
        conditions: observation.conditions,
    })))
}
