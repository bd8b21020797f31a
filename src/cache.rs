//! Compiled pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::codec::NumberCodec;
use crate::options::SeparatorConfig;

/// Capacity used by `PatternCache::default()`.
pub const DEFAULT_CACHE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    config: SeparatorConfig,
}

/// LRU cache of compiled codecs keyed by pattern text and separators.
///
/// The cache is owned by the caller; wrap it in a lock to share it.
pub struct PatternCache {
    entries: LruCache<CacheKey, NumberCodec>,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl PatternCache {
    /// Create a cache holding up to `capacity` codecs (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        PatternCache {
            entries: LruCache::new(capacity),
        }
    }

    /// Get the codec for a pattern, compiling it on a miss.
    pub fn get_or_compile(&mut self, pattern: &str, config: &SeparatorConfig) -> NumberCodec {
        let key = CacheKey {
            pattern: pattern.to_string(),
            config: config.clone(),
        };

        if let Some(codec) = self.entries.get(&key) {
            return codec.clone();
        }

        let codec = NumberCodec::new(pattern, config);
        self.entries.put(key, codec.clone());
        codec
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
