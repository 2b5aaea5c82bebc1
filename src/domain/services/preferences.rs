#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::LanguagePair;

/// Remembers the last source/target selection across sessions. Loading never
/// fails, and saving is best-effort; the session must not depend on the
/// store working.
#[async_trait]
pub trait PreferenceStore {
    async fn load(&self) -> LanguagePair;
    async fn save(&self, pair: &LanguagePair);
}

pub type PreferenceStoreBox = Box<dyn PreferenceStore + Send + Sync>;

pub struct FilePreferences {
    path: path::PathBuf,
}

impl Default for FilePreferences {
    fn default() -> FilePreferences {
        return FilePreferences::new(path::PathBuf::from(Config::get(ConfigKey::PreferencesFile)));
    }
}

impl FilePreferences {
    pub fn new(path: path::PathBuf) -> FilePreferences {
        return FilePreferences { path };
    }

    async fn write(&self, pair: &LanguagePair) -> Result<()> {
        let payload = serde_json::to_string(pair)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.path).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn load(&self) -> LanguagePair {
        if !self.path.exists() {
            return LanguagePair::default();
        }

        let payload = match fs::read_to_string(&self.path).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read language preferences");
                return LanguagePair::default();
            }
        };

        // Corrupt preferences are the same as absent ones.
        return serde_json::from_str::<LanguagePair>(&payload)
            .unwrap_or_else(|_| return LanguagePair::default());
    }

    async fn save(&self, pair: &LanguagePair) {
        if let Err(err) = self.write(pair).await {
            tracing::warn!(error = ?err, "failed to persist language preferences");
        }
    }
}
