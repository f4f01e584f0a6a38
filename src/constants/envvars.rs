pub const DATA_DIR: &str = "WRC_DATA_DIR";
pub const ROOT_DIR: &str = "WRC_ROOT_DIR";
pub const TEMP_DIR: &str = "WRC_TEMP_DIR";

pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const MQTT_BRIDGE_HOST: &str = "MQTT_BRIDGE_HOST";
pub const MQTT_BRIDGE_PORT: &str = "MQTT_BRIDGE_PORT";
