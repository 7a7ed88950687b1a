// In-memory translation cache using DashMap
use crate::domain::model::{Backend, TranslationRequest};
use dashmap::DashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    backend: Backend,
    request: TranslationRequest,
}

/// Thread-safe translation cache, one entry per backend and request
pub struct MemoryCache {
    map: DashMap<CacheKey, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get(&self, backend: Backend, request: &TranslationRequest) -> Option<String> {
        let key = CacheKey {
            backend,
            request: request.clone(),
        };
        self.map.get(&key).map(|entry| entry.value().clone())
    }

    /// Empty translations are never cached
    pub fn insert(&self, backend: Backend, request: &TranslationRequest, translation: &str) {
        if translation.is_empty() {
            return;
        }
        let key = CacheKey {
            backend,
            request: request.clone(),
        };
        self.map.insert(key, translation.to_string());
    }

    pub fn clear(&self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_per_backend() {
        let cache = MemoryCache::new();
        let request = TranslationRequest::new("en", "fr", "Hello");
        cache.insert(Backend::Azure, &request, "Bonjour");

        assert_eq!(cache.get(Backend::Azure, &request).as_deref(), Some("Bonjour"));
        assert_eq!(cache.get(Backend::Mtuoc, &request), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_translation_not_cached() {
        let cache = MemoryCache::new();
        let request = TranslationRequest::new("en", "fr", "Hello");
        cache.insert(Backend::Mtuoc, &request, "");
        assert!(cache.is_empty());
    }
}
