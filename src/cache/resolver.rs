// src/cache/resolver.rs
//
// Tiered resolution: remote, then cache, then a static fallback.
//
// RULES:
// - resolve never fails
// - a remote success overwrites the cache entry before returning
// - reading the cache never writes it
// - the static fallback is never persisted

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, CacheStore};
use crate::error::AppResult;
use crate::events::{EventBus, FallbackServed};

/// Tier that produced a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Remote,
    Cache,
    Static,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Remote => "remote",
            Provenance::Cache => "cache",
            Provenance::Static => "static",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Provenance::Remote)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Resolved<T> {
    pub fn remote(value: T) -> Self {
        Self { value, provenance: Provenance::Remote }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            provenance: self.provenance,
        }
    }
}

#[derive(Clone)]
pub struct TieredResolver {
    store: Arc<dyn CacheStore>,
    event_bus: Option<EventBus>,
}

impl TieredResolver {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store, event_bus: None }
    }

    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Resolve a value across the three tiers.
    ///
    /// `remote` is awaited first. On success its value is written under
    /// `key` (write failures are logged and dropped) and returned. On
    /// failure the entry under `key` is read back; a missing or
    /// undecodable entry falls through to `fallback`, returned as given.
    pub async fn resolve<T, F>(&self, remote: F, key: Option<CacheKey>, fallback: T) -> Resolved<T>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = AppResult<T>>,
    {
        self.resolve_with(remote, key, || fallback).await
    }

    /// Like [`resolve`](Self::resolve), with a static tier that is only
    /// built once the remote and cache tiers have both failed
    pub async fn resolve_with<T, F, S>(
        &self,
        remote: F,
        key: Option<CacheKey>,
        fallback: S,
    ) -> Resolved<T>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = AppResult<T>>,
        S: FnOnce() -> T,
    {
        let remote_error = match remote.await {
            Ok(value) => {
                if let Some(key) = key {
                    self.persist(&key, &value).await;
                }
                return Resolved::remote(value);
            }
            Err(e) => e,
        };

        let label = key.map(|k| k.to_string());
        log::warn!(
            "Remote fetch failed for {}: {}",
            label.as_deref().unwrap_or("<uncached>"),
            remote_error
        );

        if let Some(key) = key {
            if let Some(value) = self.read_cached::<T>(&key).await {
                log::info!("Serving cached {}", key);
                self.announce(label, Provenance::Cache);
                return Resolved { value, provenance: Provenance::Cache };
            }
        }

        log::info!(
            "Serving static fallback for {}",
            label.as_deref().unwrap_or("<uncached>")
        );
        self.announce(label, Provenance::Static);
        Resolved { value: fallback(), provenance: Provenance::Static }
    }

    /// Like [`resolve`](Self::resolve), without the provenance
    pub async fn resolve_value<T, F>(&self, remote: F, key: Option<CacheKey>, fallback: T) -> T
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = AppResult<T>>,
    {
        self.resolve(remote, key, fallback).await.value
    }

    /// Cached value under `key`, if present and decodable
    pub async fn read_cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring unreadable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    /// Serialize and store `value`; failures are logged only
    pub async fn persist<T: Serialize>(&self, key: &CacheKey, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Could not serialize {} for caching: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store.set(key, raw).await {
            log::warn!("Cache write failed for {}: {}", key, e);
        }
    }

    fn announce(&self, cache_key: Option<String>, provenance: Provenance) {
        if let Some(bus) = &self.event_bus {
            bus.emit(FallbackServed::new(cache_key, provenance.as_str()));
        }
    }
}
