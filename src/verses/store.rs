//! Verse-store collaborator seam.
//!
//! [`VerseStore`] is the contract for whatever supplies verse candidates
//! (database, remote API, fixture data). The scoring/ranking core performs
//! no I/O itself; this trait is its only asynchronous boundary.
//!
//! Caching wraps a store explicitly via [`CachedVerseStore`]: the cache is
//! owned by the decorated store instance and configured at construction,
//! never a process-wide mutable global.

use std::collections::HashMap;
use std::time::Duration;

use moka::future::Cache;

use crate::error::Result;
use crate::normalize::normalize;
use crate::types::VerseCandidate;

/// A pluggable source of relevance-weighted verse candidates.
///
/// Implementors look up verses associated with an emotion name in a given
/// bible version. An empty result is a valid outcome and must not be
/// reported as an error. All implementations must be `Send + Sync` so
/// stores can be shared across request handlers.
pub trait VerseStore: Send + Sync {
    /// Fetch up to `limit` candidates for the emotion.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Store`] when the underlying
    /// source fails (connection loss, malformed payload). "No verses for
    /// this emotion" is `Ok(vec![])`, not an error.
    fn find_by_emotion(
        &self,
        emotion: &str,
        version: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<VerseCandidate>>> + Send;
}

/// In-memory verse store keyed by emotion name.
///
/// Intended for tests and embedded fixture data. The bible `version`
/// argument is ignored; a static store holds a single translation.
#[derive(Debug, Clone, Default)]
pub struct StaticVerseStore {
    verses: HashMap<String, Vec<VerseCandidate>>,
}

impl StaticVerseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register candidates for an emotion, replacing any existing entry.
    /// The emotion name is normalised, so lookups are case- and
    /// accent-insensitive.
    pub fn insert(&mut self, emotion: &str, candidates: Vec<VerseCandidate>) {
        self.verses.insert(normalize(emotion), candidates);
    }
}

impl VerseStore for StaticVerseStore {
    async fn find_by_emotion(
        &self,
        emotion: &str,
        _version: &str,
        limit: usize,
    ) -> Result<Vec<VerseCandidate>> {
        Ok(self
            .verses
            .get(&normalize(emotion))
            .map(|candidates| candidates.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

/// Composite cache key: normalised emotion + version + limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VerseCacheKey {
    emotion: String,
    version: String,
    limit: usize,
}

impl VerseCacheKey {
    fn new(emotion: &str, version: &str, limit: usize) -> Self {
        Self {
            emotion: normalize(emotion),
            version: version.trim().to_lowercase(),
            limit,
        }
    }
}

/// Caching decorator around any [`VerseStore`].
///
/// Successful lookups (including empty ones) are cached under the
/// (emotion, version, limit) key; errors are never cached, so a transient
/// store failure does not poison subsequent requests.
pub struct CachedVerseStore<S> {
    inner: S,
    cache: Cache<VerseCacheKey, Vec<VerseCandidate>>,
}

impl<S> CachedVerseStore<S> {
    /// Wrap `inner` with a cache holding at most `max_entries` result sets.
    ///
    /// Entries expire after `ttl_seconds`; a TTL of 0 means entries never
    /// expire and are only displaced by capacity.
    pub fn new(inner: S, ttl_seconds: u64, max_entries: u64) -> Self {
        let mut builder = Cache::builder().max_capacity(max_entries);
        if ttl_seconds > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_seconds));
        }
        Self {
            inner,
            cache: builder.build(),
        }
    }
}

impl<S: VerseStore> VerseStore for CachedVerseStore<S> {
    async fn find_by_emotion(
        &self,
        emotion: &str,
        version: &str,
        limit: usize,
    ) -> Result<Vec<VerseCandidate>> {
        let key = VerseCacheKey::new(emotion, version, limit);

        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(emotion = %key.emotion, version = %key.version, "verse cache hit");
            return Ok(hit);
        }

        let candidates = self.inner.find_by_emotion(emotion, version, limit).await?;
        self.cache.insert(key, candidates.clone()).await;
        Ok(candidates)
    }
}
