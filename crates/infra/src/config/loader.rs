//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If no credential is set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AISOCIAL_API_KEY`: API key sent as `X-API-Key`
//! - `AISOCIAL_ACCESS_TOKEN`: Bearer token (wins over the API key)
//! - `AISOCIAL_BASE_URL`: API base URL
//! - `AISOCIAL_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `AISOCIAL_USER_AGENT`: User agent override
//!
//! At least one of the two credential variables must be set for the
//! environment to count as a complete source.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./aisocial.toml` or `./aisocial.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use aisocial_domain::{AiSocialError, ClientConfig, Result};

const ENV_BASE_URL: &str = "AISOCIAL_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "AISOCIAL_TIMEOUT_SECS";
const ENV_API_KEY: &str = "AISOCIAL_API_KEY";
const ENV_ACCESS_TOKEN: &str = "AISOCIAL_ACCESS_TOKEN";
const ENV_USER_AGENT: &str = "AISOCIAL_USER_AGENT";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["aisocial.toml", "aisocial.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If no credential is
/// set there, falls back to loading from a config file.
///
/// # Errors
/// Returns `AiSocialError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Unset optional variables keep their [`ClientConfig::default`] values.
///
/// # Errors
/// Returns `AiSocialError::Config` if neither `AISOCIAL_API_KEY` nor
/// `AISOCIAL_ACCESS_TOKEN` is set, or the timeout is not a number.
pub fn load_from_env() -> Result<ClientConfig> {
    let api_key = env_opt(ENV_API_KEY);
    let access_token = env_opt(ENV_ACCESS_TOKEN);

    if api_key.is_none() && access_token.is_none() {
        return Err(AiSocialError::Config(format!(
            "Missing required environment variable: {ENV_API_KEY} or {ENV_ACCESS_TOKEN}"
        )));
    }

    let mut config = ClientConfig { api_key, access_token, ..ClientConfig::default() };

    if let Some(base_url) = env_opt(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(timeout) = env_opt(ENV_TIMEOUT_SECS) {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| AiSocialError::Config(format!("Invalid timeout: {e}")))?;
    }
    config.user_agent = env_opt(ENV_USER_AGENT);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AiSocialError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AiSocialError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AiSocialError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AiSocialError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AiSocialError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AiSocialError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AiSocialError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Searches the current working directory first, then the directory holding
/// the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 5] =
        [ENV_BASE_URL, ENV_TIMEOUT_SECS, ENV_API_KEY, ENV_ACCESS_TOKEN, ENV_USER_AGENT];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(&format!(".{extension}")).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_BASE_URL, "http://localhost:9000");
        std::env::set_var(ENV_TIMEOUT_SECS, "5");
        std::env::set_var(ENV_API_KEY, "key-1");
        std::env::set_var(ENV_ACCESS_TOKEN, "T1");
        std::env::set_var(ENV_USER_AGENT, "aisocial-cli/0.1");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_key.as_deref(), Some("key-1"));
        assert_eq!(config.access_token.as_deref(), Some("T1"));
        assert_eq!(config.user_agent.as_deref(), Some("aisocial-cli/0.1"));

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_API_KEY, "key-1");

        let config = load_from_env().unwrap();
        assert_eq!(config, ClientConfig::with_api_key("key-1"));

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_credentials() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_BASE_URL, "http://localhost:9000");
        std::env::set_var(ENV_API_KEY, "   ");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, AiSocialError::Config(_)), "Should be a Config error");

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_API_KEY, "key-1");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, AiSocialError::Config(_)), "Should be a Config error");

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let file = temp_config(
            r#"{
                "base_url": "https://staging.example.com",
                "timeout_secs": 10,
                "api_key": "file-key"
            }"#,
            "json",
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.base_url, "https://staging.example.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(
            r#"
access_token = "file-token"
user_agent = "aisocial-tests"
"#,
            "toml",
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("file-token"));
        assert_eq!(config.user_agent.as_deref(), Some("aisocial-tests"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/aisocial.toml")));
        assert!(matches!(result, Err(AiSocialError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let file = temp_config(r#"{ "this is": "not valid json" "#, "json");

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_load_prefers_environment() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_ACCESS_TOKEN, "env-token");

        let config = load().unwrap();
        assert_eq!(config.access_token.as_deref(), Some("env-token"));

        clear_env();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("api_key: x", Path::new("aisocial.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_parse_config_wrong_field_type() {
        let result = parse_config(r#"{ "timeout_secs": "thirty" }"#, Path::new("aisocial.json"));
        assert!(matches!(result, Err(AiSocialError::Config(_))));
    }
}
