use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Parsed translation documents keyed by language code.
///
/// Entries are written at most once and never evicted.
#[derive(Debug, Default)]
pub struct ResourceCache {
    /// 言語コード → パース済みドキュメント
    documents: RwLock<HashMap<String, Arc<Value>>>,
}

impl ResourceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, lang: &str) -> Option<Arc<Value>> {
        self.documents.read().await.get(lang).cloned()
    }

    /// Stores `document` unless `lang` already has an entry.
    ///
    /// Returns `true` when this call populated the entry.
    pub async fn insert_if_absent(&self, lang: &str, document: Arc<Value>) -> bool {
        let mut documents = self.documents.write().await;
        if documents.contains_key(lang) {
            return false;
        }
        documents.insert(lang.to_string(), document);
        true
    }

    pub async fn contains(&self, lang: &str) -> bool {
        self.documents.read().await.contains_key(lang)
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn first_insert_wins() {
        let cache = ResourceCache::new();
        let first = Arc::new(json!({ "title": "first" }));
        let second = Arc::new(json!({ "title": "second" }));

        assert_that!(cache.insert_if_absent("en", Arc::clone(&first)).await, eq(true));
        assert_that!(cache.insert_if_absent("en", second).await, eq(false));

        let cached = cache.get("en").await;
        assert_that!(cached.is_some_and(|doc| Arc::ptr_eq(&doc, &first)), eq(true));
        assert_that!(cache.len().await, eq(1));
    }

    #[tokio::test]
    async fn missing_language_is_absent() {
        let cache = ResourceCache::new();

        assert_that!(cache.is_empty().await, eq(true));
        assert_that!(cache.contains("hi").await, eq(false));
        assert_that!(cache.get("hi").await.is_none(), eq(true));
    }
}
