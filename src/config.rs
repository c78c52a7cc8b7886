use crate::error::{CropAdvisorError, Result};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub openweathermap: Option<OpenWeatherMapConfig>,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherProvider {
    #[default]
    Demo,
    OpenWeatherMap,
}

impl WeatherProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherProvider::Demo => "demo",
            WeatherProvider::OpenWeatherMap => "openweathermap",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub provider: WeatherProvider,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Artificial delay for the demo provider
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: WeatherProvider::Demo,
            timeout_secs: default_timeout_secs(),
            simulated_latency_ms: 0,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Fallbacks for `advise` when flags are omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    pub location: Option<String>,
    pub crop: Option<String>,
}

impl Config {
    /// Load from an explicit path, or search the standard locations.
    /// With no override and no file found, the built-in demo config is used.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropAdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("No config file found - using built-in demo settings");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "loading config");

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropAdvisorError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropAdvisorError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weather.timeout_secs == 0 {
            return Err(CropAdvisorError::Config(
                "weather.timeout_secs must be greater than zero".into(),
            ));
        }

        if self.weather.provider == WeatherProvider::OpenWeatherMap {
            match &self.openweathermap {
                Some(owm) if owm.enabled && !owm.api_key.is_empty() => {}
                _ => {
                    return Err(CropAdvisorError::Config(
                        "weather.provider is openweathermap but no enabled openweathermap.api_key is set"
                            .into(),
                    ))
                }
            }
        }

        Ok(())
    }

    /// First existing config: `config/config.yaml`, then the XDG config dir.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropadvisor").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/cropadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropAdvisorError::Config("Cannot determine config directory".into()))?
            .join("cropadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up CropAdvisor!");
        println!();

        println!("Weather data");
        let providers = ["demo (mock data)", "openweathermap"];
        let choice = Select::new()
            .with_prompt("  Provider")
            .items(&providers)
            .default(0)
            .interact()
            .map_err(|e| CropAdvisorError::Config(format!("Input error: {}", e)))?;

        let (provider, openweathermap) = if choice == 1 {
            let api_key: String = Input::new()
                .with_prompt("  OpenWeatherMap API key (or ${OWM_API_KEY})")
                .interact_text()
                .map_err(|e| CropAdvisorError::Config(format!("Input error: {}", e)))?;
            (
                WeatherProvider::OpenWeatherMap,
                Some(OpenWeatherMapConfig {
                    api_key,
                    enabled: true,
                }),
            )
        } else {
            (WeatherProvider::Demo, None)
        };

        let timeout_secs: u64 = Input::new()
            .with_prompt("  Request timeout (seconds)")
            .default(default_timeout_secs())
            .interact_text()
            .map_err(|e| CropAdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Defaults (leave blank to skip)");
        let location: String = Input::new()
            .with_prompt("  Location")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CropAdvisorError::Config(format!("Input error: {}", e)))?;

        let crop: String = Input::new()
            .with_prompt(format!("  Crop ({})", crate::registry::keys().join(", ")))
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CropAdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            weather: WeatherConfig {
                provider,
                timeout_secs,
                simulated_latency_ms: 0,
            },
            openweathermap,
            defaults: DefaultsConfig {
                location: Some(location).filter(|s| !s.is_empty()),
                crop: Some(crop).filter(|s| !s.is_empty()),
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let content = format!(
            "# CropAdvisor Configuration\n# Generated by `cropadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex_lite::Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.weather.provider, WeatherProvider::Demo);
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.openweathermap.is_none());
        assert!(config.defaults.crop.is_none());
    }

    #[test]
    fn full_document() {
        let yaml = r#"
weather:
  provider: openweathermap
  timeout_secs: 5
openweathermap:
  api_key: abc123
defaults:
  location: Nairobi
  crop: corn
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.weather.provider, WeatherProvider::OpenWeatherMap);
        assert_eq!(config.weather.timeout_secs, 5);
        let owm = config.openweathermap.unwrap();
        assert_eq!(owm.api_key, "abc123");
        assert!(owm.enabled);
        assert_eq!(config.defaults.location.as_deref(), Some("Nairobi"));
    }

    #[test]
    fn example_config_parses() {
        let config = Config::parse(include_str!("../config/config.yaml.example")).unwrap();
        assert_eq!(config.weather.provider, WeatherProvider::Demo);
        assert_eq!(config.weather.simulated_latency_ms, 1000);
        assert_eq!(config.defaults.crop.as_deref(), Some("rice"));
    }

    #[test]
    fn openweathermap_without_key_is_rejected() {
        let yaml = "weather:\n  provider: openweathermap\n";
        assert!(matches!(
            Config::parse(yaml),
            Err(CropAdvisorError::Config(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Config::parse("weather:\n  timeout_secs: 0\n").is_err());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("CROPADVISOR_TEST_OWM_KEY", "from-env");
        let out = Config::substitute_env_vars("api_key: ${CROPADVISOR_TEST_OWM_KEY}");
        assert_eq!(out, "api_key: from-env");

        let untouched = Config::substitute_env_vars("api_key: ${CROPADVISOR_TEST_UNSET_VAR}");
        assert_eq!(untouched, "api_key: ${CROPADVISOR_TEST_UNSET_VAR}");
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let owm = OpenWeatherMapConfig {
            api_key: "secret".into(),
            enabled: true,
        };
        let debug = format!("{:?}", owm);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn missing_override_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/cropadvisor.yaml"))).unwrap_err();
        assert!(matches!(err, CropAdvisorError::Config(_)));
    }
}
