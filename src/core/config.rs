use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub dataset: DatasetConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

/// Location of the static region dataset read on every page request
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

/// Location of the file-backed key-value store holding the persisted filter
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            dataset: DatasetConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        Ok(Self { host, port })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatasetConfig {
    const DEFAULT_DATASET_PATH: &'static str = "data/indonesia_regions.json";

    pub fn from_env() -> Result<Self, String> {
        let path = env::var("REGION_DATASET_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_DATASET_PATH.to_string());

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}

impl StorageConfig {
    const DEFAULT_STORE_PATH: &'static str = "data/filter_store.json";

    pub fn from_env() -> Result<Self, String> {
        let path =
            env::var("FILTER_STORE_PATH").unwrap_or_else(|_| Self::DEFAULT_STORE_PATH.to_string());

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}
