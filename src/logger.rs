use anyhow::Result;
use simple_logger::init_with_level;
use std::{env, str::FromStr};

const LOG_LEVEL_VAR: &str = "GITHUBCLIENT_LOG";

pub fn init() -> Result<()> {
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|value| log::Level::from_str(&value).ok())
        .unwrap_or(log::Level::Info);

    init_with_level(level)?;

    Ok(())
}
