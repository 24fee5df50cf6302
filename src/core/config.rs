use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    /// No timeout when unset
    pub timeout_ms: Option<u64>,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 180,
            min_query_chars: 2,
            timeout_ms: None,
            max_results: 50,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_chars: self.min_query_chars,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkbenchConfig {
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default = "default_workspace")]
    pub default_workspace: String,
    /// Thread file used by `search`; `<config>/threads.json` when unset
    #[serde(default)]
    pub threads_file: Option<PathBuf>,
}

fn default_workspace() -> String {
    "default".to_string()
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            created_at: chrono::Utc::now(),
            search: SearchConfig::default(),
            default_workspace: default_workspace(),
            threads_file: None,
        }
    }
}

impl WorkbenchConfig {
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_in(&get_config_directory()?)
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE);

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            log::debug!("Creating default config at {}", config_file.display());
            let config = Self::default();
            config.save_in(config_dir)?;
            Ok(config)
        }
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn threads_file(&self) -> Result<PathBuf> {
        match &self.threads_file {
            Some(path) => Ok(path.clone()),
            None => Ok(get_config_directory()?.join("threads.json")),
        }
    }
}
