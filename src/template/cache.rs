//! Render cache.
//!
//! Rendered output is memoized per (template name, template fingerprint,
//! context). The context part is a canonical encoding: entries are sorted
//! by name and each name and value is length-prefixed and type-tagged, so
//! the encoding does not depend on the order the caller built the context in.

use std::collections::HashMap;

use super::context::Context;

/// Key identifying one rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    template: String,
    fingerprint: String,
    context: String,
}

impl CacheKey {
    /// Derive the key for rendering `template` (whose raw text has
    /// `fingerprint`) with `context`.
    pub fn new(template: &str, fingerprint: &str, context: &Context) -> Self {
        Self {
            template: template.to_string(),
            fingerprint: fingerprint.to_string(),
            context: encode_context(context),
        }
    }

    /// Template name this key belongs to.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Canonical context encoding.
    pub fn context_encoding(&self) -> &str {
        &self.context
    }
}

/// Canonical, order-independent serialization of a context.
pub fn encode_context(context: &Context) -> String {
    let mut out = String::new();
    for (name, value) in context.sorted_entries() {
        out.push_str(&format!("{}:{}={};", name.len(), name, value.cache_repr()));
    }
    out
}

/// Counters describing cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Renders that ran both substitution passes.
    pub computed: u64,
    /// Renders answered from the cache.
    pub hits: u64,
}

/// In-memory map from [`CacheKey`] to rendered output.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: HashMap<CacheKey, String>,
    stats: CacheStats,
}

impl RenderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a rendered output, counting a hit when found.
    pub fn get(&mut self, key: &CacheKey) -> Option<&String> {
        let found = self.entries.get(key);
        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    /// Store a freshly computed output.
    pub fn insert(&mut self, key: CacheKey, rendered: String) {
        self.entries.insert(key, rendered);
    }

    /// Record a render that bypassed or missed the cache.
    pub fn record_computed(&mut self) {
        self.stats.computed += 1;
    }

    /// Drop every entry for `template`. Returns how many were removed.
    pub fn evict_template(&mut self, template: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.template != template);
        before - self.entries.len()
    }

    /// Drop all entries. Stats are kept.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Number of cached outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
