use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram bot token
    pub token: String,
    /// Sqlite file with the dialogue state of every chat
    pub db_path: String,
    /// Directory with the pictures used as answer options
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            db_path: "db.sqlite".to_string(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            token: lookup("TELOXIDE_TOKEN")
                .filter(|t| !t.is_empty())
                .ok_or(ConfigError::Missing("TELOXIDE_TOKEN"))?,
            db_path: lookup("QUIZ_DB_PATH").unwrap_or(default.db_path),
            assets_dir: lookup("QUIZ_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.assets_dir),
        })
    }
}
