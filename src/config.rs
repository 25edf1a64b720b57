use std::time::Duration;

use camino::Utf8Path;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::ApiResult;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BridgeConfig {
    pub host: String,
    pub username: String,
    /// Request timeout, in seconds
    pub timeout: u64,
}

impl BridgeConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub bridge: BridgeConfig,
}

/// Values given on the command line, which take precedence over both the
/// config file and the environment
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub username: Option<String>,
}

pub fn parse(filename: &Utf8Path, overrides: Overrides) -> ApiResult<AppConfig> {
    let settings = Config::builder()
        .set_default("bridge.host", hue::HUE_BRIDGE_DEFAULT_HOSTNAME)?
        .set_default("bridge.timeout", 10)?
        .add_source(File::new(filename.as_str(), FileFormat::Yaml).required(false))
        .add_source(
            Environment::with_prefix("HUECTL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("bridge.host", overrides.host)?
        .set_override_option("bridge.username", overrides.username)?
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use camino::Utf8PathBuf;

    use crate::config::{Overrides, parse};
    use crate::error::ApiError;

    fn write_config(name: &str, contents: &str) -> Utf8PathBuf {
        let dir = Utf8PathBuf::try_from(std::env::temp_dir()).unwrap();
        let path = dir.join(format!("huectl-test-{}-{name}.yaml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn from_file() {
        let path = write_config(
            "file",
            "bridge:\n  host: 192.168.1.20\n  username: abcdef\n  timeout: 3\n",
        );

        let conf = parse(&path, Overrides::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(conf.bridge.host, "192.168.1.20");
        assert_eq!(conf.bridge.username, "abcdef");
        assert_eq!(conf.bridge.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn defaults_and_overrides() {
        let path = Utf8PathBuf::from("/nonexistent/huectl.yaml");
        let overrides = Overrides {
            host: None,
            username: Some("user".to_string()),
        };

        let conf = parse(&path, overrides).unwrap();
        assert_eq!(conf.bridge.host, hue::HUE_BRIDGE_DEFAULT_HOSTNAME);
        assert_eq!(conf.bridge.username, "user");
        assert_eq!(conf.bridge.timeout, 10);
    }

    #[test]
    fn overrides_beat_file() {
        let path = write_config("override", "bridge:\n  host: from-file\n  username: file-user\n");
        let overrides = Overrides {
            host: Some("from-cli".to_string()),
            username: None,
        };

        let conf = parse(&path, overrides).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(conf.bridge.host, "from-cli");
        assert_eq!(conf.bridge.username, "file-user");
    }

    #[test]
    fn missing_username() {
        let path = write_config("nouser", "bridge:\n  host: bridge\n");

        let res = parse(&path, Overrides::default());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(res, Err(ApiError::ConfigError(_))));
    }
}
