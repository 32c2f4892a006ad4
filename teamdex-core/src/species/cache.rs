///! Memoizing species lookup cache.
///!
///! One in-memory map from normalized name to fetched record, owned by an
///! explicitly constructed cache instance (no globals, so tests get a
///! fresh cache each). Failures are absorbed here: callers always get
///! `Some(record)` or `None`, never an error.

use futures::future::join_all;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::client::SpeciesFetcher;
use super::types::SpeciesRecord;
use crate::team::parser::normalize_name;

pub struct SpeciesCache<F: SpeciesFetcher> {
    fetcher: F,
    records: RwLock<HashMap<String, SpeciesRecord>>,
}

impl<F: SpeciesFetcher> SpeciesCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a species by display name. A hit never touches the network.
    /// On a miss the record is fetched and cached under the normalized
    /// key; a failed fetch is logged, reported as `None`, and NOT cached,
    /// so the next lookup for the same name tries again.
    ///
    /// Overlapping lookups for the same uncached name may each fetch;
    /// sprite lookups are not a hot path and the duplicates are harmless.
    pub async fn lookup(&self, name: &str) -> Option<SpeciesRecord> {
        let key = normalize_name(name);

        if let Some(record) = self.records.read().await.get(&key) {
            debug!("Species cache hit for '{}'", key);
            return Some(record.clone());
        }

        match self.fetcher.fetch(&key).await {
            Ok(record) => {
                debug!("Species cache store for '{}'", key);
                self.records
                    .write()
                    .await
                    .insert(key, record.clone());
                Some(record)
            }
            Err(e) => {
                warn!("Species lookup failed for '{}': {:#}", key, e);
                None
            }
        }
    }

    /// Look up several names together, e.g. one render pass over a roster.
    /// All lookups are awaited as a group and the results come back in
    /// input order regardless of completion order.
    pub async fn lookup_all(&self, names: &[String]) -> Vec<Option<SpeciesRecord>> {
        join_all(names.iter().map(|name| self.lookup(name))).await
    }
}
