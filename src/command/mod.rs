mod fetch_launch;
mod fetch_weather;
mod kvs;
mod listen;

pub use fetch_launch::fetch_launch;
pub use fetch_weather::fetch_weather;
pub use kvs::{kvs_get, kvs_set};
pub use listen::listen;
