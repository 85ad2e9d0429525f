use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub http: HttpConfig,
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub throttle: ThrottleConfig,
    pub io: IoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub max_results: usize,
    pub allowed_suffixes: Vec<String>,
    pub blacklist: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThrottleConfig {
    pub delay_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IoConfig {
    pub input_path: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            // Browser-like UA; search engines reply differently to bare clients
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/115.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.bing.com/search".to_string(),
            timeout_seconds: 10,
            max_results: 10,
            allowed_suffixes: vec![
                ".edu".to_string(),
                ".org".to_string(),
                ".ac.in".to_string(),
                ".edu.in".to_string(),
            ],
            blacklist: vec![
                "linkedin.com".to_string(),
                "facebook.com".to_string(),
                "wikipedia.org".to_string(),
                "youtube.com".to_string(),
            ],
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
        }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self { delay_seconds: 2 }
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: "us_lead_list.csv".to_string(),
            output_path: "college_info_output.csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            search: SearchConfig::default(),
            fetch: FetchConfig::default(),
            throttle: ThrottleConfig::default(),
            io: IoConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
