use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_OPENROUTER_MODEL: &str = "deepseek/deepseek-r1-0528-qwen3-8b:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for cantabile.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CANTABILE_* prefix)
/// 3. Config file (~/.config/cantabile/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Gemini API key. Gemini is tried first when present.
    ///
    /// Can be set via:
    /// - ENV: CANTABILE_GEMINI_API_KEY
    /// - Config: gemini_api_key = "..."
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// OpenRouter API key. OpenRouter is tried after Gemini.
    ///
    /// Can be set via:
    /// - ENV: CANTABILE_OPENROUTER_API_KEY
    /// - Config: openrouter_api_key = "..."
    #[serde(default)]
    pub openrouter_api_key: Option<String>,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    #[serde(default = "default_openrouter_model")]
    pub openrouter_model: String,

    /// Per-request timeout for provider calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Path to the prompt history file.
    ///
    /// Can be set via:
    /// - CLI: --history /path/to/history.json
    /// - ENV: CANTABILE_HISTORY_PATH
    /// - Config: history_path = "/path/to/history.json"
    /// - Default: ~/.local/share/cantabile/history.json
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// Logger settings passed to `twyg`.
    #[serde(default)]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            openrouter_api_key: None,
            gemini_model: default_gemini_model(),
            openrouter_model: default_openrouter_model(),
            request_timeout_secs: default_timeout_secs(),
            history_path: default_history_path(),
            logging: twyg::Opts::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/cantabile/config.toml
    /// Reads environment variables with CANTABILE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("cantabile");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom history path.
    ///
    /// This is used when the --history CLI flag is provided.
    pub fn load_with_history_path(history_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.history_path = history_path;
        Ok(config)
    }

    /// The Gemini key, if set and not blank.
    pub fn gemini_key(&self) -> Option<&str> {
        non_blank(self.gemini_api_key.as_deref())
    }

    /// The OpenRouter key, if set and not blank.
    pub fn openrouter_key(&self) -> Option<&str> {
        non_blank(self.openrouter_api_key.as_deref())
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

fn non_blank(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty())
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_openrouter_model() -> String {
    DEFAULT_OPENROUTER_MODEL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Get the default history path.
///
/// Returns: ~/.local/share/cantabile/history.json (or platform equivalent)
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cantabile")
        .join("history.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cantabile/config.toml
/// - macOS: ~/Library/Application Support/cantabile/config.toml
/// - Windows: %APPDATA%\cantabile\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cantabile")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cantabile Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CANTABILE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Google Gemini API key for remote prompt enhancement
# Gemini is tried first; without any key, prompts are optimized locally.
#
# Can also be set via:
# - Environment: CANTABILE_GEMINI_API_KEY=your-key-here
#gemini_api_key = "your-gemini-api-key-here"

# OpenRouter API key, used when Gemini is missing or fails
#
# Can also be set via:
# - Environment: CANTABILE_OPENROUTER_API_KEY=your-key-here
#openrouter_api_key = "your-openrouter-api-key-here"

# Models used by each provider
#gemini_model = "gemini-2.0-flash"
#openrouter_model = "deepseek/deepseek-r1-0528-qwen3-8b:free"

# Timeout for each provider request, in seconds
#request_timeout_secs = 30

# Path to the prompt history file
#
# Can also be set via:
# - CLI: cantabile --history /custom/history.json history list
# - Environment: CANTABILE_HISTORY_PATH=/custom/history.json
#
# Default: Platform-specific data directory
#history_path = "/path/to/custom/history.json"

# Logging (passed to twyg)
#[logging]
#coloured = true
#level = "debug"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
