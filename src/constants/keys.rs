/// Watch settings blob, written by the external configuration tool
pub const SETTINGS: &str = "settings";

pub const LAUNCH_API_BASE_URL: &str = "launch_api_base_url";
pub const WEATHER_API_BASE_URL: &str = "weather_api_base_url";
pub const GEOIP_API_BASE_URL: &str = "geoip_api_base_url";

// Cache keys (stored in SQLITE_CACHE)
pub const LAST_POSITION: &str = "last_position";
pub const LAST_POSITION_TS: &str = "last_position_ts";
