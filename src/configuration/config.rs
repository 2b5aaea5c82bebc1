#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    GeminiToken,
    GeminiURL,
    Model,
    PreferencesFile,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let cache_dir = dirs::cache_dir().unwrap().join("codeshift");
        let config_path = cache_dir.join("config.toml");
        let preferences_path = cache_dir.join("preferences.json");

        let res = match key {
            ConfigKey::ConfigFile => config_path.to_str().unwrap(),
            ConfigKey::GeminiToken => "",
            ConfigKey::GeminiURL => "https://generativelanguage.googleapis.com",
            ConfigKey::Model => "models/gemini-1.5-flash",
            ConfigKey::PreferencesFile => preferences_path.to_str().unwrap(),
        };

        return res.to_string();
    }

    /// Layers configuration: compiled defaults, then config.toml, then CLI
    /// and environment overrides.
    pub async fn load(matches: &ArgMatches) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        if let Some(arg_config_file) = matches
            .try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            .ok()
            .flatten()
        {
            config_file = arg_config_file.to_string();
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_str) = val.as_str() {
                        if !val_str.is_empty() {
                            Config::set(key, val_str);
                        }
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            if let Some(val) = matches
                .try_get_one::<String>(&key.to_string())
                .ok()
                .flatten()
            {
                Config::set(key, val);
            }
        }

        return Ok(());
    }
}
