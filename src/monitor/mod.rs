//! Market monitoring
//!
//! Polling service over an injected [`MarketDataSource`]. The original
//! platform generated synthetic ticks on a timer; here the source is an
//! explicit seam so tests drive [`MarketMonitor::poll_once`] directly and
//! never wait on wall-clock timers.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// A single market observation for one asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    pub asset_id: String,
    pub price: Decimal,
    /// 24h change as a fraction, e.g. 0.02 for +2%
    pub change_24h: f64,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot broadcast to subscribers after each successful poll
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub quotes: Vec<MarketQuote>,
    pub polled_at: DateTime<Utc>,
}

/// Source of market quotes. Implementations may call an exchange API,
/// replay a file, or serve scripted data in tests.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<MarketQuote>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub poll_interval: Duration,
    /// Broadcast channel capacity; slow subscribers drop old snapshots
    pub channel_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(300),
            channel_capacity: 64,
        }
    }
}

/// Polls a data source on an interval and fans quotes out to subscribers.
/// The latest quote per asset is also kept for synchronous lookup.
pub struct MarketMonitor {
    source: Arc<dyn MarketDataSource>,
    config: MonitorConfig,
    latest: RwLock<HashMap<String, MarketQuote>>,
    tx: broadcast::Sender<MarketSnapshot>,
}

impl MarketMonitor {
    pub fn new(source: Arc<dyn MarketDataSource>, config: MonitorConfig) -> Self {
        let (tx, _) = broadcast::channel(config.channel_capacity);
        Self {
            source,
            config,
            latest: RwLock::new(HashMap::new()),
            tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MarketSnapshot> {
        self.tx.subscribe()
    }

    /// Most recent quote seen for an asset, if any
    pub fn latest(&self, asset_id: &str) -> Option<MarketQuote> {
        self.latest.read().get(asset_id).cloned()
    }

    /// Fetch once from the source, update state and notify subscribers.
    /// Returns the number of quotes received.
    pub async fn poll_once(&self) -> Result<usize> {
        let quotes = self.source.fetch().await?;

        {
            let mut latest = self.latest.write();
            for quote in &quotes {
                latest.insert(quote.asset_id.clone(), quote.clone());
            }
        }

        let count = quotes.len();
        // Send fails only when nobody is subscribed; that is fine
        let _ = self.tx.send(MarketSnapshot {
            quotes,
            polled_at: Utc::now(),
        });

        tracing::debug!(source = self.source.name(), count, "poll complete");
        Ok(count)
    }

    /// Poll forever on the configured interval. Source errors are logged
    /// and the loop continues; cancel by dropping the task.
    pub async fn run(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        tracing::info!(
            source = self.source.name(),
            interval_secs = self.config.poll_interval.as_secs(),
            "market monitor started"
        );

        loop {
            ticker.tick().await;
            if let Err(e) = self.poll_once().await {
                tracing::warn!(source = self.source.name(), error = %e, "poll failed");
            }
        }
    }
}

/// Replays a fixed set of quotes on every poll. Backs the CLI monitor
/// command and doubles as a test source.
pub struct ReplaySource {
    quotes: Vec<MarketQuote>,
}

impl ReplaySource {
    pub fn new(quotes: Vec<MarketQuote>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl MarketDataSource for ReplaySource {
    async fn fetch(&self) -> Result<Vec<MarketQuote>> {
        Ok(self.quotes.clone())
    }

    fn name(&self) -> &str {
        "replay"
    }
}
