use serde::Deserialize;
use url::Url;

use super::FetchError;
use crate::interfaces::geoloc::Position;

/// Icon for condition codes the table does not cover (the generic clouds
/// glyph); the firmware renders it for anything unrecognized.
pub const DEFAULT_CONDITIONS_ICON: u8 = 5;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainReading,
}

#[derive(Debug, Deserialize)]
struct Condition {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Debug, PartialEq)]
pub struct Observation {
    pub temperature: i32,
    pub conditions: u8,
}

/// Current conditions at `position`, reduced to what the watchface renders:
/// a rounded temperature and an icon index.
pub fn current_weather(
    agent: &ureq::Agent,
    base_url: &str,
    api_key: &str,
    position: &Position,
    units_param: &str,
) -> Result<Observation, FetchError> {
    let url = Url::parse_with_params(
        &format!("{base_url}/data/2.5/weather"),
        &[
            ("lat", position.lat.to_string()),
            ("lon", position.lon.to_string()),
            ("appid", api_key.to_string()),
            ("units", units_param.to_string()),
        ],
    )?;
    log::debug!(
        "Fetching current weather for {},{}",
        position.lat,
        position.lon
    );

    let resp: WeatherResponse = agent.get(url.as_str()).call()?.into_json()?;

    let conditions = resp
        .weather
        .first()
        .map(|c| conditions_icon(c.id))
        .ok_or_else(|| FetchError::Malformed("no weather conditions in response".into()))?;

    Ok(Observation {
        temperature: resp.main.temp.round() as i32,
        conditions,
    })
}

/// Maps a weather condition code to the firmware's icon index.
pub fn conditions_icon(weather_id: i64) -> u8 {
    if weather_id > 800 {
        return 5; // cloud cover
    }
    match weather_id / 100 {
        2 => 0,     // thunderstorm
        3 | 5 => 1, // drizzle and rain
        6 => 2,     // snow
        7 => 3,     // mist, fog, ash
        8 => 4,     // clear (exactly 800)
        _ => DEFAULT_CONDITIONS_ICON,
    }
}
