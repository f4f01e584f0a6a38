use std::sync::Arc;

use kvstore::{KVDb, KVStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{defaults, keys};
use crate::helpers;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Error, Debug)]
pub enum GeolocError {
    #[error(transparent)]
    Tls(#[from] native_tls::Error),
    #[error("position lookup failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("could not decode position response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("position unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Cache(#[from] KVStoreError),
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Returns the host's current position. A position resolved no longer than
/// `POSITION_MAX_AGE` ago is served from the cache without a lookup.
pub fn current_position(cache: &KVDb, base_url: &str) -> Result<Position, GeolocError> {
    if let Some(position) = cached_position(cache)? {
        log::debug!("Using cached position: {:?}", position);
        return Ok(position);
    }

    let position = lookup_position(base_url)?;
    cache.set(keys::LAST_POSITION, position)?;
    cache.set(keys::LAST_POSITION_TS, helpers::now_epoch())?;
    Ok(position)
}

fn cached_position(cache: &KVDb) -> Result<Option<Position>, KVStoreError> {
    let cached_ts: Option<i64> = cache.get(keys::LAST_POSITION_TS)?;
    match cached_ts {
        Some(ts) if helpers::now_epoch() - ts <= defaults::POSITION_MAX_AGE.as_secs() as i64 => {
            cache.get(keys::LAST_POSITION)
        }
        _ => Ok(None),
    }
}

fn lookup_position(base_url: &str) -> Result<Position, GeolocError> {
    let agent = ureq::AgentBuilder::new()
        .tls_connector(Arc::new(native_tls::TlsConnector::new()?))
        .timeout(defaults::GEOLOCATION_TIMEOUT)
        .build();

    log::debug!("Looking up position via {base_url}");
    let resp: GeoIpResponse = agent.get(&format!("{base_url}/json")).call()?.into_json()?;

    if resp.status != "success" {
        return Err(GeolocError::Unavailable(
            resp.message.unwrap_or_else(|| resp.status.clone()),
        ));
    }
    match (resp.lat, resp.lon) {
        (Some(lat), Some(lon)) => Ok(Position { lat, lon }),
        _ => Err(GeolocError::Unavailable(
            "response carried no coordinates".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    const SAMPLE_LAT: f64 = 59.3294;
    const SAMPLE_LON: f64 = 18.0687;

    fn temp_cache() -> (tempfile::TempDir, KVDb) {
        let dir = tempfile::tempdir().unwrap();
        let cache = KVDb::new(dir.path().join("cache.db")).unwrap();
        (dir, cache)
    }

    #[test]
    fn lookup_and_cache_position() {
        let (_dir, cache) = temp_cache();
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/json")
            .with_body(
                json!({"status": "success", "lat": SAMPLE_LAT, "lon": SAMPLE_LON}).to_string(),
            )
            .expect(1)
            .create();

        let expected = Position {
            lat: SAMPLE_LAT,
            lon: SAMPLE_LON,
        };
        assert_eq!(current_position(&cache, &server.url()).unwrap(), expected);
        // Second resolution within the max age must not hit the endpoint again
        assert_eq!(current_position(&cache, &server.url()).unwrap(), expected);
        m.assert();
    }

    #[test]
    fn stale_cache_entry_is_ignored() {
        let (_dir, cache) = temp_cache();
        let stale_ts = helpers::now_epoch() - defaults::POSITION_MAX_AGE.as_secs() as i64 - 10;
        cache
            .set(keys::LAST_POSITION, Position { lat: 1.0, lon: 2.0 })
            .unwrap();
        cache.set(keys::LAST_POSITION_TS, stale_ts).unwrap();

        assert!(cached_position(&cache).unwrap().is_none());
    }

    #[test]
    fn fresh_cache_entry_is_used() {
        let (_dir, cache) = temp_cache();
        let position = Position { lat: 1.0, lon: 2.0 };
        cache.set(keys::LAST_POSITION, position).unwrap();
        cache.set(keys::LAST_POSITION_TS, helpers::now_epoch()).unwrap();

        assert_eq!(cached_position(&cache).unwrap(), Some(position));
    }

    #[test]
    fn failed_lookup_is_unavailable() {
        let (_dir, cache) = temp_cache();
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/json")
            .with_body(json!({"status": "fail", "message": "private range"}).to_string())
            .create();

        let err = current_position(&cache, &server.url()).unwrap_err();
        assert!(matches!(err, GeolocError::Unavailable(_)));
    }
}
