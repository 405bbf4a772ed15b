//! The template engine.
//!
//! [`TemplateEngine`] owns the registered templates and the render cache.
//! It is a plain single-owner value: every method runs to completion before
//! the next one starts, and callers that want to share an engine across
//! threads must wrap it in a `Mutex` themselves.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::cache::{CacheKey, CacheStats, RenderCache};
use super::compiled::CompiledTemplate;
use super::context::Context;
use super::lint::{check_template, Diagnostic};
use super::render::render_compiled;
use crate::error::{Result, TallyError};

/// Engine construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Memoize rendered output per (template, context).
    pub cache: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { cache: true }
    }
}

/// Loads named templates and renders them against contexts.
///
/// # Example
///
/// ```
/// use tallyplate::template::{Context, TemplateEngine};
///
/// let mut engine = TemplateEngine::new();
/// engine.load_template("greeting", "Hello {{ name }}{% if excited %}!{% endif %}");
///
/// let ctx = Context::new().with("name", "world").with("excited", true);
/// assert_eq!(engine.render("greeting", &ctx), "Hello world!");
/// assert_eq!(engine.render("nope", &ctx), "Template 'nope' not found");
/// ```
#[derive(Debug, Default)]
pub struct TemplateEngine {
    templates: HashMap<String, CompiledTemplate>,
    cache: RenderCache,
    options: EngineOptions,
}

impl TemplateEngine {
    /// Create an engine with caching enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Register `content` under `name`, replacing any previous template.
    ///
    /// The text is compiled immediately. No syntax validation happens here;
    /// use [`TemplateEngine::diagnose`] for that. Cached renders of a
    /// replaced template are evicted.
    pub fn load_template(&mut self, name: &str, content: impl Into<String>) {
        let compiled = CompiledTemplate::compile(content);
        debug!(
            "Compiled template '{}' ({} bytes, fingerprint {})",
            name,
            compiled.source().len(),
            compiled.fingerprint()
        );

        if let Some(previous) = self.templates.insert(name.to_string(), compiled) {
            let evicted = self.cache.evict_template(name);
            debug!(
                "Replaced template '{}' (was {}), evicted {} cached renders",
                name,
                previous.fingerprint(),
                evicted
            );
        }
    }

    /// Read a template from `path` and register it under `name`.
    ///
    /// On failure the previously registered template (if any) is untouched,
    /// a warning naming the template and the error is logged, and `false`
    /// is returned so the caller can install a fallback.
    pub fn load_from_path(&mut self, name: &str, path: impl AsRef<Path>) -> bool {
        match self.try_load_from_path(name, path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to load template {}: {}", name, e);
                false
            }
        }
    }

    /// Like [`TemplateEngine::load_from_path`] but returns the typed error.
    pub fn try_load_from_path(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TallyError::ResourceLoad {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        self.load_template(name, content);
        Ok(())
    }

    /// Render the template registered under `name` with `context`.
    ///
    /// Unknown names produce the string `Template '<name>' not found`
    /// rather than an error.
    pub fn render(&mut self, name: &str, context: &Context) -> String {
        let Some(template) = self.templates.get(name) else {
            debug!("Render of unknown template '{}'", name);
            return not_found(name);
        };

        if !self.options.cache {
            self.cache.record_computed();
            return render_compiled(template, context);
        }

        let key = CacheKey::new(name, template.fingerprint(), context);
        if let Some(hit) = self.cache.get(&key) {
            debug!("Render cache hit for '{}'", name);
            return hit.clone();
        }

        let rendered = render_compiled(template, context);
        self.cache.record_computed();
        self.cache.insert(key, rendered.clone());
        rendered
    }

    /// Empty the render cache. Templates stay loaded.
    pub fn clear_cache(&mut self) {
        let dropped = self.cache.clear();
        debug!("Cleared {} cached renders", dropped);
    }

    /// Whether a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// The compiled form of `name`, if registered.
    pub fn template(&self, name: &str) -> Option<&CompiledTemplate> {
        self.templates.get(name)
    }

    /// Registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Syntax diagnostics for a registered template.
    pub fn diagnose(&self, name: &str) -> Option<Vec<Diagnostic>> {
        self.templates.get(name).map(|t| check_template(t.source()))
    }

    /// Number of cached renders.
    pub fn cached_renders(&self) -> usize {
        self.cache.len()
    }

    /// Cache counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Options this engine was built with.
    pub fn options(&self) -> EngineOptions {
        self.options
    }
}

fn not_found(name: &str) -> String {
    format!("Template '{}' not found", name)
}
