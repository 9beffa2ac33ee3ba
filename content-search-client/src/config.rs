use crate::error::Result;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROTOCOL: &str = "http:";
pub const DEFAULT_HOST: &str = "stemincubator.oae-qa1.oaeproject.org";
const ENV_PREFIX: &str = "OAE_";

/// Location of the OAE tenant every collection and model talks to.
///
/// `protocol` keeps its trailing colon (`"http:"`, `"https:"`) so that
/// [`OaeConfig::origin`] can be built as `<protocol>//<host>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct OaeConfig {
    protocol: String,
    host: String,
}

impl Default for OaeConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl OaeConfig {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }

    /// Defaults, then the optional YAML file, then `OAE_*` environment variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(OaeConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::from_figment(&Self::figment(path))?;
        log::info!("Using OAE tenant at {}", config.origin());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_origin() {
        assert_eq!(
            OaeConfig::default().origin(),
            "http://stemincubator.oae-qa1.oaeproject.org"
        );
    }

    #[test]
    fn test_yaml_overrides_host_only() {
        let figment = Figment::from(Serialized::defaults(OaeConfig::default()))
            .merge(Yaml::string("host: oae.example.org"));
        let config = OaeConfig::from_figment(&figment).unwrap();

        assert_eq!(config.protocol(), DEFAULT_PROTOCOL);
        assert_eq!(config.host(), "oae.example.org");
        assert_eq!(config.origin(), "http://oae.example.org");
    }

    #[test]
    fn test_env_overrides_yaml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("oae.yaml", "protocol: \"https:\"\nhost: yaml.example.org")?;
            jail.set_env("OAE_HOST", "env.example.org");

            let config = OaeConfig::load(Some(Path::new("oae.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.protocol(), "https:");
            assert_eq!(config.host(), "env.example.org");
            Ok(())
        });
    }

    #[test]
    fn test_env_without_file_keeps_other_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OAE_PROTOCOL", "https:");

            let config = OaeConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.origin(), format!("https://{}", DEFAULT_HOST));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let figment = Figment::from(Serialized::defaults(OaeConfig::default()))
            .merge(Yaml::string("host: [unterminated"));
        let err = OaeConfig::from_figment(&figment).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
