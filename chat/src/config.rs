use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("CHAT_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8002);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            app_env: AppEnv::from_env(),
        }
    }
}
