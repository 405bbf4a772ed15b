//! Tallyplate - a minimal string templating engine.
//!
//! Templates are plain text with `{{ name }}` placeholders and non-nesting
//! `{% if name %}...{% endif %}` blocks. The engine registers templates by
//! name, renders them against a per-call context, and memoizes rendered
//! output per (template, context).
//!
//! # Modules
//!
//! - [`template`] - The engine: registration, rendering, caching, diagnostics
//! - [`app`] - The counter widget built on the engine
//! - [`config`] - Project configuration loading
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use tallyplate::template::{Context, TemplateEngine};
//!
//! let mut engine = TemplateEngine::new();
//! engine.load_template("counter", "{{ count }}");
//!
//! assert_eq!(engine.render("counter", &Context::new().with("count", 0)), "0");
//! assert_eq!(engine.render("counter", &Context::new().with("count", 1)), "1");
//! assert_eq!(engine.stats().computed, 2);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod template;
pub mod ui;

pub use error::{Result, TallyError};
