// w/ = published by the watch; c/ = published by the companion

/// Requests from the watch, optionally carrying a MESSAGE_TYPE field
pub const REQUEST: &str = "w/request";
/// App messages relayed to the watch
pub const APP_MESSAGE: &str = "c/appmessage";
