//! Server configuration loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub genai: GenAiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the SQLite database.
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenAiConfig {
    /// Gemini API key. `GEMINI_API_KEY` in the environment overrides this.
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

impl ServerConfig {
    /// Resolve a context name to `/etc/prato/<name>.toml`. Anything
    /// containing `/` or `.` is treated as a literal path.
    pub fn resolve_path(context: &str) -> PathBuf {
        if context.contains('/') || context.contains('.') {
            PathBuf::from(context)
        } else {
            PathBuf::from(format!("/etc/prato/{}.toml", context))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let mut config: ServerConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.genai.api_key = Some(key);
            }
        }
        Ok(config)
    }

    /// Sanity-check the loaded configuration. A missing Gemini key is not
    /// fatal: report generation fails per request instead.
    pub fn verify(&self) -> anyhow::Result<()> {
        if self.storage.data_dir.trim().is_empty() {
            anyhow::bail!("storage.data_dir must not be empty");
        }
        if self.genai.api_key.is_none() {
            tracing::warn!("no Gemini API key configured; report generation will fail");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn context_name_resolves_under_etc() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/prato/prod.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("conf/prato.toml"),
            PathBuf::from("conf/prato.toml")
        );
    }

    #[test]
    fn loads_minimal_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata_dir = \"/tmp/prato\"").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/prato");
        assert_eq!(config.genai.model, "gemini-1.5-pro");
        config.verify().unwrap();
    }

    #[test]
    fn empty_data_dir_fails_verification() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata_dir = \"\"").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert!(config.verify().is_err());
    }
}
