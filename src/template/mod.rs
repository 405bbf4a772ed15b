//! The templating engine.
//!
//! Templates are plain text with two constructs:
//!
//! - `{{ name }}` placeholders, replaced by the context value's display form
//!   (or echoed back unchanged when the name is missing)
//! - `{% if name %}...{% endif %}` blocks, kept when `name` is truthy and
//!   removed otherwise; blocks do not nest
//!
//! Everything else is passed through verbatim.
//!
//! - [`engine`] - [`TemplateEngine`]: registration, rendering, cache control
//! - [`compiled`] - raw text paired with its structural matchers
//! - [`render`] - the variable and block substitution passes
//! - [`cache`] - canonical cache keys and the render cache
//! - [`context`] / [`value`] - what callers render with
//! - [`lint`] - diagnostics for malformed or nested syntax

pub mod cache;
pub mod compiled;
pub mod context;
pub mod engine;
pub mod lint;
pub mod render;
pub mod value;

pub use cache::{CacheKey, CacheStats, RenderCache};
pub use compiled::CompiledTemplate;
pub use context::Context;
pub use engine::{EngineOptions, TemplateEngine};
pub use lint::{check_template, Diagnostic, DiagnosticKind};
pub use value::Value;
