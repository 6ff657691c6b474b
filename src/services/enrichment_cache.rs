use std::collections::HashMap;
use std::time::Duration;

use crate::stores::DirectoryLookup;
use crate::types::internal::LookupKind;

/// Request-scoped memo of directory display names
///
/// Built at the start of one search/recent/export call and dropped with it.
/// Every distinct `(kind, id)` hits the directory at most once, whatever the
/// outcome. Lookup failures and timeouts resolve to `None`.
pub struct EnrichmentCache<'a> {
    directory: &'a dyn DirectoryLookup,
    lookup_timeout: Duration,
    names: HashMap<(LookupKind, i64), Option<String>>,
}

impl<'a> EnrichmentCache<'a> {
    pub fn new(directory: &'a dyn DirectoryLookup, lookup_timeout: Duration) -> Self {
        Self {
            directory,
            lookup_timeout,
            names: HashMap::new(),
        }
    }

    /// Display name for `id`, fetching it on first use
    ///
    /// A `None` id returns `None` without touching the directory.
    pub async fn get_or_fetch(&mut self, kind: LookupKind, id: Option<i64>) -> Option<String> {
        let id = id?;

        if let Some(cached) = self.names.get(&(kind, id)) {
            return cached.clone();
        }

        let fetched = tokio::time::timeout(self.lookup_timeout, self.directory.lookup_name(kind, id)).await;
        let name = match fetched {
            Ok(Ok(Some(name))) => Some(name),
            Ok(Ok(None)) => {
                tracing::debug!(%kind, id, "No directory name found");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(%kind, id, "Directory lookup failed: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!(%kind, id, timeout_ms = self.lookup_timeout.as_millis() as u64, "Directory lookup timed out");
                None
            }
        };

        self.names.insert((kind, id), name.clone());
        name
    }

    /// Number of distinct ids resolved so far
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::CountingDirectory;

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn test_null_id_never_calls_directory() {
        let directory = CountingDirectory::new().with_store(10, "Downtown");
        let mut cache = EnrichmentCache::new(&directory, TIMEOUT);

        assert_eq!(cache.get_or_fetch(LookupKind::Store, None).await, None);
        assert!(directory.calls().is_empty());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_ids_are_fetched_once() {
        let directory = CountingDirectory::new()
            .with_store(10, "Downtown")
            .with_company(1, "Acme Foods");
        let mut cache = EnrichmentCache::new(&directory, TIMEOUT);

        for _ in 0..3 {
            assert_eq!(cache.get_or_fetch(LookupKind::Store, Some(10)).await, Some("Downtown".to_string()));
            assert_eq!(cache.get_or_fetch(LookupKind::Company, Some(1)).await, Some("Acme Foods".to_string()));
        }

        assert_eq!(directory.call_count(LookupKind::Store), 1);
        assert_eq!(directory.call_count(LookupKind::Company), 1);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_same_id_different_kind_is_separate() {
        let directory = CountingDirectory::new()
            .with_store(1, "Store One")
            .with_company(1, "Company One");
        let mut cache = EnrichmentCache::new(&directory, TIMEOUT);

        assert_eq!(cache.get_or_fetch(LookupKind::Store, Some(1)).await, Some("Store One".to_string()));
        assert_eq!(cache.get_or_fetch(LookupKind::Company, Some(1)).await, Some("Company One".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_and_failing_ids_resolve_to_none_once() {
        let directory = CountingDirectory::new().with_failing(7);
        let mut cache = EnrichmentCache::new(&directory, TIMEOUT);

        assert_eq!(cache.get_or_fetch(LookupKind::Store, Some(99)).await, None);
        assert_eq!(cache.get_or_fetch(LookupKind::Store, Some(99)).await, None);
        assert_eq!(cache.get_or_fetch(LookupKind::Company, Some(7)).await, None);
        assert_eq!(cache.get_or_fetch(LookupKind::Company, Some(7)).await, None);

        assert_eq!(directory.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_lookup_times_out() {
        let directory = CountingDirectory::new().with_slow(5).with_company(5, "Never Seen");
        let mut cache = EnrichmentCache::new(&directory, TIMEOUT);

        assert_eq!(cache.get_or_fetch(LookupKind::Company, Some(5)).await, None);
        assert_eq!(directory.call_count(LookupKind::Company), 1);
    }
}
