use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => anyhow::bail!("unknown EMPLOYEE_STORE `{other}` (expected mongo or memory)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub mongodb_uri: String,
    pub mongodb_database: Option<String>,
    pub mongodb_connect_timeout_secs: u64,
    pub store_backend: StoreBackend,
    pub body_max_bytes: usize,
    pub is_production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_port: 3000,
            frontend_url: None,
            mongodb_uri: "mongodb://localhost:27017/fiber-hrms".into(),
            mongodb_database: None,
            mongodb_connect_timeout_secs: 10,
            store_backend: StoreBackend::Mongo,
            body_max_bytes: 1024 * 1024,
            is_production: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let api_port = get("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.api_port);
        let frontend_url = get("FRONTEND_URL").filter(|s| !s.trim().is_empty());
        let mongodb_uri = get("MONGODB_URI").unwrap_or(defaults.mongodb_uri);
        let mongodb_database = get("MONGODB_DATABASE").filter(|s| !s.trim().is_empty());
        let mongodb_connect_timeout_secs = get("MONGODB_CONNECT_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(defaults.mongodb_connect_timeout_secs);
        let store_backend = match get("EMPLOYEE_STORE") {
            Some(v) => v.parse()?,
            None => defaults.store_backend,
        };
        let body_max_bytes = get("BODY_MAX_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.body_max_bytes);
        let is_production = matches!(
            get("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if is_production {
            if store_backend == StoreBackend::Memory {
                anyhow::bail!("EMPLOYEE_STORE=memory is not allowed in production");
            }
            if let Some(url) = frontend_url.as_deref() {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    anyhow::bail!(
                        "FRONTEND_URL must be a full origin in production (e.g., https://hr.example.com)"
                    );
                }
            }
        }

        Ok(Self {
            api_port,
            frontend_url,
            mongodb_uri,
            mongodb_database,
            mongodb_connect_timeout_secs,
            store_backend,
            body_max_bytes,
            is_production,
        })
    }
}
