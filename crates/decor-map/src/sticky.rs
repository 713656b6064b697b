use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::Result;
use crate::map_of::MapOf;

/// Map whose entries are computed on first access and cached afterwards.
///
/// If the computation fails, the error goes to that caller and nothing is
/// cached, so the next access tries again.
pub struct StickyMap<K, V, F> {
    source: F,
    cache: OnceLock<MapOf<K, V>>,
}

impl<K, V, F> StickyMap<K, V, F>
where
    K: Ord,
    F: Fn() -> Result<Vec<(K, V)>>,
{
    pub fn new(source: F) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// The cached map, computing it if this is the first successful access.
    pub fn map(&self) -> Result<&MapOf<K, V>> {
        if let Some(map) = self.cache.get() {
            return Ok(map);
        }
        let map: MapOf<K, V> = (self.source)()?.into_iter().collect();
        debug!(entries = map.len(), "sticky map computed");
        Ok(self.cache.get_or_init(|| map))
    }

    /// Whether the entries have been computed yet.
    pub fn is_computed(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, F> fmt::Debug for StickyMap<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyMap")
            .field("cache", &self.cache.get())
            .finish_non_exhaustive()
    }
}
