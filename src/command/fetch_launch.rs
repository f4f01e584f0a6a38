use anyhow::Result;
use chrono::Utc;
use kvstore::KVDb;

use crate::constants::keys;
use crate::fetch::{self, launch, payload};
use crate::interfaces::mqtt::MqttMessage;
use crate::interfaces::{kvpath, mqtt};

/// One-shot launch-data fetch: query the schedule API and relay the countdown
/// to the watch. Nothing is sent when no launch is pending.
pub fn fetch_launch() -> Result<()> {
    let kvs = KVDb::new(kvpath::SQLITE_STORE.as_path())?;
    match launch_app_message(&kvs)? {
        Some(msg) => {
            mqtt::publish_msgs(&[msg], Some("wrc-launch"), false)?;
            log::info!("Launch data sent to watch");
        }
        None => log::info!("No upcoming launch found; nothing sent"),
    }
    Ok(())
}

fn launch_app_message(kvs: &KVDb) -> Result<Option<MqttMessage>> {
    let base_url = fetch::base_url(kvs, keys::LAUNCH_API_BASE_URL);
    let agent = fetch::http_agent()?;

    Ok(launch::next_launch(&agent, &base_url)?.map(|next| {
        payload::to_app_message(&payload::LaunchPayload {
            minutes_to_launch: launch::minutes_to_launch(next.net, Utc::now()),
            rocket: next.rocket,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use mockito::Matcher;
    use serde_json::{json, Value};

    use crate::constants::defaults;

    fn temp_kvs(base_url: &str) -> (tempfile::TempDir, KVDb) {
        let dir = tempfile::tempdir().unwrap();
        let kvs = KVDb::new(dir.path().join("kvstore.db")).unwrap();
        kvs.set(keys::LAUNCH_API_BASE_URL, base_url).unwrap();
        (dir, kvs)
    }

    #[test]
    fn upcoming_launch_yields_one_countdown_message() {
        let mut server = mockito::Server::new();
        let (_dir, kvs) = temp_kvs(&server.url());

        // 15s past the 90-minute mark keeps the rounded countdown at 90
        // for the duration of the test
        let net = Utc::now() + Duration::minutes(90) + Duration::seconds(15);
        let m = server
            .mock(
                "GET",
                format!(
                    "/databases/{}/collections/{}/documents",
                    defaults::LAUNCH_DATABASE_ID,
                    defaults::LAUNCH_COLLECTION_ID,
                )
                .as_str(),
            )
            .match_query(Matcher::Any)
            .with_body(
                json!({"documents": [{"net": net.to_rfc3339(), "rocket": "Falcon 9"}]}).to_string(),
            )
            .expect(1)
            .create();

        let msg = launch_app_message(&kvs).unwrap().unwrap();
        let value: Value = serde_json::from_str(&msg.payload).unwrap();
        assert_eq!(value["MINUTES_TO_LAUNCH"], 90);
        assert_eq!(value["ROCKET"], "Falcon 9");
        m.assert();
    }

    #[test]
    fn empty_schedule_yields_no_message() {
        let mut server = mockito::Server::new();
        let (_dir, kvs) = temp_kvs(&server.url());

        let _m = server
            .mock("GET", Matcher::Regex("^/databases/.*".to_string()))
            .match_query(Matcher::Any)
            .with_body(json!({"documents": []}).to_string())
            .create();

        assert!(launch_app_message(&kvs).unwrap().is_none());
    }
}
