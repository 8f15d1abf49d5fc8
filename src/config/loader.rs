use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;
use crate::features::home::{DEFAULT_REDIRECT_LOCATION, HomeResponse};

const DEFAULT_PORT: u16 = 8080;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    load_config_from(|key| env::var(key).ok())
}

/// Builds the configuration from an arbitrary key lookup.
///
/// `load_config` passes the process environment; tests pass a map.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("HOME_SERVER_PORT").or_else(|| lookup("PORT")) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid port {value:?}: {err}")))?,
        None => DEFAULT_PORT,
    };

    let kind = lookup("HOME_RESPONSE").unwrap_or_else(|| "redirect".to_string());
    let location =
        lookup("HOME_REDIRECT_LOCATION").unwrap_or_else(|| DEFAULT_REDIRECT_LOCATION.to_string());
    let home = HomeResponse::parse(&kind, &location)?;

    Ok(AppConfig { port, home })
}
