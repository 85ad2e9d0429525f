// src/main.rs
use college_scraper::config::{load_config, Config};
use college_scraper::models::Result;
use college_scraper::pipeline::BatchDriver;
use college_scraper::store;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// A bad level in a user-supplied config.yml should not abort the run.
fn log_directive(level: &str) -> tracing_subscriber::filter::Directive {
    format!("college_scraper={}", level).parse().unwrap_or_else(|e| {
        warn!("Invalid logging level '{}': {}. Falling back to info.", level, e);
        "college_scraper=info".parse().unwrap()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    std::env::set_var("RUST_LOG", "college_scraper=info,hyper=warn");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_directive(&config.logging.level)))
        .init();

    let names = store::load_names(&config.io.input_path)?;
    info!(
        "📊 Loaded {} college names from {}",
        names.len(),
        config.io.input_path
    );

    let driver = BatchDriver::new(&config);

    // Add graceful shutdown
    tokio::select! {
        result = driver.run(&names) => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_logging_level_is_used() {
        assert_eq!(log_directive("debug").to_string(), "college_scraper=debug");
    }

    #[test]
    fn malformed_logging_level_falls_back_to_info() {
        assert_eq!(
            log_directive("not a level!").to_string(),
            "college_scraper=info"
        );
    }
}
