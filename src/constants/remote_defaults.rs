use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::keys;

pub static REMOTE_DEFAULTS: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    HashMap::from([
        (
            keys::LAUNCH_API_BASE_URL,
            "http://homelab.hippogriff-lime.ts.net/v1",
        ),
        (keys::WEATHER_API_BASE_URL, "https://api.openweathermap.org"),
        (keys::GEOIP_API_BASE_URL, "http://ip-api.com"),
    ])
});
