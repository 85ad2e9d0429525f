// src/pipeline.rs
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::models::{CollegeRecord, Result};
use crate::scrape::{ContactExtractor, WebsiteResolver};
use crate::store::OutputStore;

/// Pause applied between names. A constant today; the driver only knows
/// about `pause`, so an adaptive policy can slot in without touching the
/// loop.
#[derive(Debug, Clone)]
pub struct DelayPolicy {
    delay: Duration,
}

impl DelayPolicy {
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Sequential end-to-end pipeline: resolve → extract → persist, one name at
/// a time. No failure aborts the batch.
pub struct BatchDriver {
    resolver: WebsiteResolver,
    extractor: ContactExtractor,
    store: OutputStore,
    delay: DelayPolicy,
}

impl BatchDriver {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: WebsiteResolver::new(&config.http, &config.search),
            extractor: ContactExtractor::new(&config.http, &config.fetch),
            store: OutputStore::new(config.io.output_path.clone()),
            delay: DelayPolicy::fixed(Duration::from_secs(config.throttle.delay_seconds)),
        }
    }

    pub async fn run(&self, names: &[String]) -> Result<()> {
        for (i, name) in names.iter().enumerate() {
            info!("Processing: {} ({}/{})", name, i + 1, names.len());

            let record = match self.resolver.resolve(name).await {
                Some(website) => {
                    let contact = self.extractor.extract(&website).await;
                    CollegeRecord::resolved(name, contact)
                }
                None => {
                    info!("Website not found for {}", name);
                    CollegeRecord::unresolved(name)
                }
            };

            // A locked or unwritable output file costs one record, not the batch.
            if let Err(e) = self.store.append(&record) {
                warn!("❌ Failed to write record for {}: {}", name, e);
            }

            if i < names.len() - 1 {
                self.delay.pause().await;
            }
        }

        info!(
            "✅ All records saved incrementally to {}",
            self.store.path().display()
        );
        Ok(())
    }
}
