use serde::Deserialize;

use crate::http::render::OutputFormat;

/// Runtime configuration, loaded once at startup.
///
/// An optional YAML file named by the `CONFIG` environment variable provides
/// the base values; the `LISTEN` and `FORMAT` environment variables override
/// individual fields on top of it.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the TCP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Response body style. Fixed for the lifetime of the process.
    #[serde(default)]
    pub format: OutputFormat,
    /// Credentials for the wireless network the device joins. Association
    /// happens outside this process; the name is only reported at startup.
    #[serde(default)]
    pub network: Option<NetworkConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkConfig {
    pub ssid: String,
    pub passphrase: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:80".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            format: OutputFormat::default(),
            network: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        if let Ok(format) = std::env::var("FORMAT") {
            cfg.format = format.parse()?;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&text)?;
        Ok(cfg)
    }
}
