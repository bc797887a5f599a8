use snafu::{OptionExt, ensure};
use std::env;

use crate::Result;
use crate::error::ConfigSnafu;
use crate::services::redirect::EscapeMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub login: LoginConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// Hostname of the login dashboard, without scheme or port
    pub server: String,
    pub escape_mode: EscapeMode,
}

impl Config {
    pub fn build() -> Result<Self> {
        // Build the config from ENV vars
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let login_server = var("LOGIN_SERVER").context(ConfigSnafu {
            msg: "LOGIN_SERVER is required.".to_string(),
        })?;
        let port = var("PORT")
            .context(ConfigSnafu {
                msg: "PORT is required.".to_string(),
            })?
            .parse::<u16>()
            .ok()
            .context(ConfigSnafu {
                msg: "PORT must be a valid u16.".to_string(),
            })?;

        let ip = match var("LISTEN_ADDR") {
            Some(val) if !val.is_empty() => val,
            _ => "127.0.0.1".to_string(),
        };

        let mut escape_mode = EscapeMode::Verbatim;
        if var("ESCAPE_CONTINUE_URL").as_deref() == Some("1") {
            escape_mode = EscapeMode::Escaped;
        }

        // Validate config values
        let login_server = login_server.trim().to_string();
        ensure!(
            !login_server.is_empty(),
            ConfigSnafu {
                msg: "LOGIN_SERVER is required.".to_string()
            }
        );

        ensure!(
            port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );

        Ok(Config {
            server: ServerConfig { ip, port },
            login: LoginConfig {
                server: login_server,
                escape_mode,
            },
        })
    }
}
