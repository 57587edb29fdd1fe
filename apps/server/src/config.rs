//! Server configuration from environment variables.

/// Default port when `PORT` is unset or empty.
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
}

impl Config {
    /// Read configuration from the environment, honoring a `.env` file.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self {
            listen_addr: format!("0.0.0.0:{}", port),
        }
    }
}
