//! Read-through cache of parsed tables keyed by sub-sheet id.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::client::TableSource;
use crate::error::SheetError;
use crate::table::Table;

struct CacheEntry {
    table: Arc<Table>,
    loaded_at: Instant,
}

/// Tables are cached per gid; failed loads are never stored.
pub struct TableCache {
    source: Arc<dyn TableSource>,
    ttl: Option<Duration>,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TableCache {
    #[must_use]
    pub fn new(source: Arc<dyn TableSource>, ttl: Option<Duration>) -> Self {
        Self { source, ttl, entries: RwLock::new(HashMap::new()) }
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.ttl.is_none_or(|ttl| entry.loaded_at.elapsed() < ttl)
    }

    /// Returns the cached table for `gid`, loading it on a miss or after expiry.
    ///
    /// # Errors
    /// Propagates the source's fetch or parse error; nothing is cached then.
    pub async fn get_or_load(&self, gid: &str) -> Result<Arc<Table>, SheetError> {
        if let Some(entry) = self.entries.read().await.get(gid) {
            if self.is_fresh(entry) {
                tracing::debug!(gid, "table cache hit");
                return Ok(Arc::clone(&entry.table));
            }
        }

        tracing::debug!(gid, "table cache miss");
        let table = Arc::new(self.source.load(gid).await?);
        self.entries.write().await.insert(
            gid.to_owned(),
            CacheEntry { table: Arc::clone(&table), loaded_at: Instant::now() },
        );
        Ok(table)
    }

    /// Drops the entry for `gid`. Returns whether one was cached.
    pub async fn invalidate(&self, gid: &str) -> bool {
        let removed = self.entries.write().await.remove(gid).is_some();
        if removed {
            tracing::info!(gid, "table cache entry invalidated");
        }
        removed
    }

    /// Drops every entry. Returns how many were cached.
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        tracing::info!(count, "table cache cleared");
        count
    }

    pub async fn cached_gids(&self) -> Vec<String> {
        let mut gids: Vec<String> = self.entries.read().await.keys().cloned().collect();
        gids.sort();
        gids
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use folio_lookup_core::Row;

    use super::*;

    #[derive(Default)]
    struct CountingSource {
        calls: Mutex<Vec<String>>,
    }

    impl CountingSource {
        fn calls_for(&self, gid: &str) -> usize {
            self.calls.lock().expect("lock").iter().filter(|g| *g == gid).count()
        }
    }

    #[async_trait]
    impl TableSource for CountingSource {
        async fn load(&self, gid: &str) -> Result<Table, SheetError> {
            self.calls.lock().expect("lock").push(gid.to_owned());
            if gid == "broken" {
                return Err(SheetError::HttpStatus { code: 500, url: "test://broken".to_owned() });
            }
            let row = Row::new(
                gid.to_owned(),
                format!("row from {gid}"),
                String::new(),
                String::new(),
                None,
            );
            Ok(Table::new(gid, vec![row]))
        }
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), None);

        let first = cache.get_or_load("11").await.expect("load");
        let second = cache.get_or_load("11").await.expect("load");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls_for("11"), 1);
    }

    #[tokio::test]
    async fn locations_are_cached_independently() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), None);

        let a = cache.get_or_load("11").await.expect("load");
        let b = cache.get_or_load("22").await.expect("load");
        assert_eq!(a.rows[0].folio, "11");
        assert_eq!(b.rows[0].folio, "22");
        cache.get_or_load("11").await.expect("load");
        assert_eq!(source.calls_for("11"), 1);
        assert_eq!(source.calls_for("22"), 1);
        assert_eq!(cache.cached_gids().await, vec!["11".to_owned(), "22".to_owned()]);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), None);

        assert!(cache.get_or_load("broken").await.is_err());
        assert!(cache.get_or_load("broken").await.is_err());
        assert_eq!(source.calls_for("broken"), 2);
        assert!(cache.cached_gids().await.is_empty());
    }

    #[tokio::test]
    async fn invalidate_forces_reload_of_one_location() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), None);

        cache.get_or_load("11").await.expect("load");
        cache.get_or_load("22").await.expect("load");
        assert!(cache.invalidate("11").await);
        assert!(!cache.invalidate("11").await);
        cache.get_or_load("11").await.expect("load");
        cache.get_or_load("22").await.expect("load");
        assert_eq!(source.calls_for("11"), 2);
        assert_eq!(source.calls_for("22"), 1);
    }

    #[tokio::test]
    async fn invalidate_all_clears_everything() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), None);

        cache.get_or_load("11").await.expect("load");
        cache.get_or_load("22").await.expect("load");
        assert_eq!(cache.invalidate_all().await, 2);
        assert!(cache.cached_gids().await.is_empty());
    }

    #[tokio::test]
    async fn expired_entries_are_reloaded() {
        let source = Arc::new(CountingSource::default());
        let cache = TableCache::new(source.clone(), Some(Duration::ZERO));

        cache.get_or_load("11").await.expect("load");
        cache.get_or_load("11").await.expect("load");
        assert_eq!(source.calls_for("11"), 2);
    }
}
