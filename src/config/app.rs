use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RECOMMENDER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_FRONTEND_DIR: &str = "client/build";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub recommender_url: String,
    pub frontend_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            recommender_url: DEFAULT_RECOMMENDER_URL.to_string(),
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            recommender_url: lookup("RECOMMENDER_URL").unwrap_or(defaults.recommender_url),
            frontend_dir: lookup("FRONTEND_DIR").map(PathBuf::from).unwrap_or(defaults.frontend_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Entry document of the front-end bundle
    pub fn index_file(&self) -> PathBuf {
        self.frontend_dir.join("index.html")
    }
}
