use anyhow::{anyhow, Result};
use kvstore::KVDb;
use serde_json::{json, Value};

use crate::argsets::{KvsGetArgs, KvsSetArgs};
use crate::interfaces::kvpath;

pub fn kvs_set(args: KvsSetArgs) -> Result<()> {
    let kvs = KVDb::new(kvpath::SQLITE_STORE.as_path())?;
    // Valid JSON is stored as-is; anything else is stored as a JSON string
    match serde_json::from_str::<Value>(&args.value) {
        Ok(value) => kvs.set(&args.key, value)?,
        Err(_) => kvs.set(&args.key, json!(args.value))?,
    }
    Ok(())
}

pub fn kvs_get(args: KvsGetArgs) -> Result<()> {
    let kvs = KVDb::new(kvpath::SQLITE_STORE.as_path())?;
    let value: Value = kvs
        .get(&args.key)?
        .ok_or_else(|| anyhow!("No value set for key '{}'", &args.key))?;
    // Bare strings print without the surrounding quotes
    match value.as_str() {
        Some(s) => print!("{s}"),
        None => print!("{value}"),
    }
    Ok(())
}
