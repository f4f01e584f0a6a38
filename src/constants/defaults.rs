use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(15);
// A position resolved within the last minute is reused without a lookup
pub const POSITION_MAX_AGE: Duration = Duration::from_secs(60);

pub const LOG_LEVEL: &str = "info";

pub const MQTT_BRIDGE_HOST: &str = "localhost";
pub const MQTT_BRIDGE_PORT: u16 = 1883;

// Identifiers of the launch-schedule database on the Appwrite host
pub const LAUNCH_PROJECT_ID: &str = "65aad3806c956cf09df4";
pub const LAUNCH_DATABASE_ID: &str = "6689a86c002a9fb1b740";
pub const LAUNCH_COLLECTION_ID: &str = "67b3d257002fbfda61e9";
