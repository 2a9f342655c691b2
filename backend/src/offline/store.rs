use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A cached (or live) response, the value stored under a request key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        FetchResponse {
            status,
            content_type: content_type.to_string(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

type Bucket = HashMap<String, FetchResponse>;

/// Named, versioned buckets of request-key → response pairs.
///
/// Cloning shares the underlying storage; per-key put/lookup is atomic under
/// the lock, which is all the fetch strategies rely on.
#[derive(Clone, Default)]
pub struct CacheStore {
    buckets: Arc<RwLock<HashMap<String, Bucket>>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, bucket: &str, key: &str, response: FetchResponse) {
        let mut buckets = self.buckets.write().await;
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), response);
    }

    pub async fn lookup(&self, bucket: &str, key: &str) -> Option<FetchResponse> {
        let buckets = self.buckets.read().await;
        buckets.get(bucket).and_then(|b| b.get(key)).cloned()
    }

    pub async fn bucket_names(&self) -> Vec<String> {
        self.buckets.read().await.keys().cloned().collect()
    }

    pub async fn delete_bucket(&self, name: &str) -> bool {
        self.buckets.write().await.remove(name).is_some()
    }

    /// Deletes every bucket that carries `prefix` but not the exact
    /// `-{version}` suffix. Returns the deleted names; all deletions are
    /// complete when this returns.
    pub async fn purge_stale(&self, prefix: &str, version: &str) -> Vec<String> {
        let suffix = format!("-{}", version);
        let mut buckets = self.buckets.write().await;
        let stale: Vec<String> = buckets
            .keys()
            .filter(|name| name.starts_with(prefix) && !name.ends_with(&suffix))
            .cloned()
            .collect();
        for name in &stale {
            buckets.remove(name);
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(body: &str) -> FetchResponse {
        FetchResponse::new(200, "text/plain", body.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn put_overwrites_by_key() {
        let store = CacheStore::new();
        store.put("sgm-api-v1", "/api/pocos", resp("old")).await;
        store.put("sgm-api-v1", "/api/pocos", resp("new")).await;
        let cached = store.lookup("sgm-api-v1", "/api/pocos").await.unwrap();
        assert_eq!(cached.body, b"new");
    }

    #[tokio::test]
    async fn purge_keeps_current_version_and_foreign_buckets() {
        let store = CacheStore::new();
        store.put("sgm-static-v1", "/", resp("a")).await;
        store.put("sgm-static-v2", "/", resp("b")).await;
        store.put("other-cache", "/", resp("c")).await;

        let mut deleted = store.purge_stale("sgm-", "v2").await;
        deleted.sort();
        assert_eq!(deleted, vec!["sgm-static-v1".to_string()]);

        let mut names = store.bucket_names().await;
        names.sort();
        assert_eq!(names, vec!["other-cache".to_string(), "sgm-static-v2".to_string()]);
    }

    #[tokio::test]
    async fn purge_does_not_treat_a_version_substring_as_current() {
        let store = CacheStore::new();
        store.put("sgm-static-v1", "/", resp("current")).await;
        store.put("sgm-static-v10", "/", resp("stale")).await;

        let deleted = store.purge_stale("sgm-", "v1").await;
        assert_eq!(deleted, vec!["sgm-static-v10".to_string()]);
        assert!(store.lookup("sgm-static-v1", "/").await.is_some());
    }
}
