mod argsets;
mod command;
mod constants;
mod fetch;
mod helpers;
mod interfaces;
mod settings;

use anyhow::{anyhow, Result};
use env_logger::Env;

use crate::constants::{defaults, envvars};

const CMD_LISTEN: &str = "listen";
const CMD_FETCH_LAUNCH: &str = "fetch-launch";
const CMD_FETCH_WEATHER: &str = "fetch-weather";
const CMD_KVS_GET: &str = "kvs-get";
const CMD_KVS_SET: &str = "kvs-set";

fn main() -> Result<()> {
    helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_LISTEN) => command::listen(),
        Some(CMD_FETCH_LAUNCH) => command::fetch_launch(),
        Some(CMD_FETCH_WEATHER) => command::fetch_weather(),
        Some(CMD_KVS_GET) => command::kvs_get(argsets::KvsGetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_KVS_SET) => command::kvs_set(argsets::KvsSetArgs {
            key: args.free_from_str()?,
            value: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'listen', 'fetch-launch', 'fetch-weather', 'kvs-get', 'kvs-set'"
        )),
    }
}
