use clap::Parser;

use crate::utils::logging::LogLevel;

// ================================
// Global service-wide settings
// ================================
//
// Every knob is a CLI flag with an environment variable fallback,
// read once at startup.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Base URL of the GitLab instance
    #[arg(long, env = "GITLAB_URL", default_value = "https://gitlab.com")]
    pub gitlab_url: String,

    /// Bearer credential sent as the PRIVATE-TOKEN header
    #[arg(long, env = "GITLAB_API_TOKEN", hide_env_values = true)]
    pub gitlab_api_token: String,

    /// Address the metrics server binds to
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the metrics server binds to
    #[arg(long, env = "LISTEN_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Seconds between refresh cycles
    #[arg(long, env = "REFRESH_INTERVAL_SECONDS", default_value_t = 300)]
    pub refresh_interval_seconds: u64,

    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
