use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::FetchError;
use crate::constants::defaults;

#[derive(Debug, Deserialize)]
pub struct Launch {
    pub net: DateTime<Utc>,
    pub rocket: String,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Launch>,
}

/// The soonest not-yet-launched schedule entry, or None when the schedule
/// holds nothing upcoming.
pub fn next_launch(agent: &ureq::Agent, base_url: &str) -> Result<Option<Launch>, FetchError> {
    let url = query_url(base_url)?;
    log::debug!("Fetching launch schedule from {url}");

    let list: DocumentList = agent.get(url.as_str()).call()?.into_json()?;
    Ok(list.documents.into_iter().next())
}

/// Minutes from `now` until `net`, rounded to the nearest whole minute.
/// Negative once the no-earlier-than time has passed.
pub fn minutes_to_launch(net: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((net - now).num_milliseconds() as f64 / 60_000.0).round() as i64
}

// Single soonest document with launched == false, ordered ascending by `net`
fn query_url(base_url: &str) -> Result<Url, url::ParseError> {
    let endpoint = format!(
        "{base_url}/databases/{}/collections/{}/documents",
        defaults::LAUNCH_DATABASE_ID,
        defaults::LAUNCH_COLLECTION_ID,
    );
    Url::parse_with_params(
        &endpoint,
        &[
            ("project", defaults::LAUNCH_PROJECT_ID.to_string()),
            (
                "queries[0]",
                json!({"method": "orderAsc", "attribute": "net"}).to_string(),
            ),
            (
                "queries[1]",
                json!({"method": "equal", "attribute": "launched", "values": [false]}).to_string(),
            ),
            (
                "queries[2]",
                json!({"method": "limit", "values": [1]}).to_string(),
            ),
        ],
    )
}
