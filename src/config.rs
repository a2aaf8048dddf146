use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Built-in defaults, also used to seed the user config on first run.
pub const BLUEPRINT: &str = include_str!("../storefront.toml");

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub base_url: String,
    pub currency_symbol: String,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let user_config_path = get_user_config_path();
        if let Some(path) = &user_config_path {
            seed_user_config(path).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        }
        Self::load(user_config_path.as_deref(), Path::new("storefront.toml"))
    }

    /// Blueprint, then user config, then a local override, then `STOREFRONT_*` env vars.
    pub fn load(user_config: Option<&Path>, local_config: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(File::from_str(BLUEPRINT, FileFormat::Toml));
        if let Some(path) = user_config {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(File::from(local_config).required(false))
            .add_source(Environment::with_prefix("STOREFRONT"))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".config");
    path.push("storefront");
    path.push("storefront.toml");
    Some(path)
}

fn seed_user_config(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, BLUEPRINT)
}

pub fn save_base_url(base_url: &str) -> Result<PathBuf, anyhow::Error> {
    let user_config_path =
        get_user_config_path().ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?;
    write_key(&user_config_path, "base_url", toml::Value::String(base_url.to_string()))?;
    Ok(user_config_path)
}

fn write_key(path: &Path, key: &str, value: toml::Value) -> Result<(), anyhow::Error> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let mut doc = config_str.parse::<toml::Table>()?;

    doc.insert(key.to_string(), value);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, doc.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("storefront-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn blueprint_alone_is_a_complete_config() {
        let dir = scratch_dir("blueprint");
        let settings = Settings::load(None, &dir.join("missing.toml")).unwrap();
        assert!(!settings.base_url.is_empty());
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = scratch_dir("layers");
        let user = dir.join("user.toml");
        let local = dir.join("local.toml");
        fs::write(&user, "base_url = \"http://user.test\"\ncurrency_symbol = \"$\"\n").unwrap();
        fs::write(&local, "base_url = \"http://local.test\"\n").unwrap();

        let settings = Settings::load(Some(&user), &local).unwrap();
        assert_eq!(settings.base_url, "http://local.test");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn saving_keeps_other_keys() {
        let dir = scratch_dir("save");
        let user = dir.join("nested").join("user.toml");
        fs::create_dir_all(user.parent().unwrap()).unwrap();
        fs::write(&user, "currency_symbol = \"€\"\n").unwrap();

        write_key(&user, "base_url", toml::Value::String("http://saved.test".into())).unwrap();

        let settings = Settings::load(Some(&user), &dir.join("missing.toml")).unwrap();
        assert_eq!(settings.base_url, "http://saved.test");
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn zero_timeout_means_none() {
        let dir = scratch_dir("timeout");
        let local = dir.join("local.toml");
        fs::write(&local, "request_timeout_secs = 0\n").unwrap();
        let settings = Settings::load(None, &local).unwrap();
        assert_eq!(settings.request_timeout(), None);
    }

    #[test]
    fn log_path_expands_home() {
        let dir = scratch_dir("logpath");
        let local = dir.join("local.toml");
        fs::write(&local, "log_file = \"~/shop.log\"\n").unwrap();
        let settings = Settings::load(None, &local).unwrap();
        let path = settings.log_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("shop.log"));
    }
}
