use std::ffi::OsStr;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use serde_json::{json, Value};

const TEST_KEY: &str = "somekey";
const TEST_VALUE_TEXT: &str = "somevalue";

fn kvs_set_assert(
    data_dir: impl AsRef<OsStr>,
    key: impl AsRef<OsStr>,
    value: impl AsRef<OsStr>,
) -> Assert {
    let mut cmd = Command::cargo_bin("wrc").unwrap();
    cmd.env("WRC_DATA_DIR", data_dir)
        .arg("kvs-set")
        .arg(key)
        .arg(value)
        .assert()
}

fn kvs_get_assert(data_dir: impl AsRef<OsStr>, key: impl AsRef<OsStr>) -> Assert {
    let mut cmd = Command::cargo_bin("wrc").unwrap();
    cmd.env("WRC_DATA_DIR", data_dir)
        .arg("kvs-get")
        .arg(key)
        .assert()
}

#[test]
fn set_and_get_string_value() {
    let tempdir = tempfile::tempdir().unwrap();

    kvs_set_assert(tempdir.path(), TEST_KEY, TEST_VALUE_TEXT).success();
    kvs_get_assert(tempdir.path(), TEST_KEY)
        .success()
        .stdout(TEST_VALUE_TEXT);
}

#[test]
fn set_and_get_watch_settings_blob() {
    let tempdir = tempfile::tempdir().unwrap();
    let settings = json!({"owm_api_key": "key123", "units": "F"});

    kvs_set_assert(tempdir.path(), "settings", settings.to_string()).success();
    kvs_get_assert(tempdir.path(), "settings")
        .success()
        .stdout(settings.to_string());

    // The blob lands in the store the weather fetcher reads
    let kvs = kvstore::KVDb::new(tempdir.path().join("kvs-db/kvstore.db")).unwrap();
    let stored: Value = kvs.get("settings").unwrap().unwrap();
    assert_eq!(stored, settings);
}

#[test]
fn get_unset_value_fails() {
    let tempdir = tempfile::tempdir().unwrap();

    kvs_get_assert(tempdir.path(), TEST_KEY)
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(format!(
            "No value set for key '{TEST_KEY}'"
        )));
}
