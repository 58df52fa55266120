use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DB_PATH: &str = "data/db.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a number between 0 and 65535, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            host: lookup("HOST").filter(|h| !h.is_empty()).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            db_path: lookup("DB_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        })
    }
}
