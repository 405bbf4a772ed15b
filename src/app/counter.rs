//! Counter widget logic.
//!
//! The widget shows a number and a button; each click increments the number
//! and re-renders it. Display wiring lives with the caller. Here the widget
//! is the state it renders from plus the two templates it renders with.

use std::path::Path;

use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::template::{Context, TemplateEngine};

static FALLBACK_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template name for the counter display.
pub const COUNTER_TEMPLATE: &str = "counter";

/// Template name for the increment button.
pub const BUTTON_TEMPLATE: &str = "button";

/// The widget's state. Owned by the caller and passed into every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: u64,
}

impl CounterState {
    /// Bump the count by one.
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Render context for the counter template.
    pub fn context(&self) -> Context {
        Context::new().with("count", i64::try_from(self.count).unwrap_or(i64::MAX))
    }
}

/// Button attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Element id the caller attaches its click handler to.
    pub id: String,
    /// Button label.
    pub text: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            id: "increment-btn".to_string(),
            text: "Increment".to_string(),
        }
    }
}

impl ButtonConfig {
    /// Render context for the button template.
    pub fn context(&self) -> Context {
        Context::new()
            .with("button_id", self.id.as_str())
            .with("button_text", self.text.as_str())
    }
}

/// Built-in template text for `name`, trimmed.
pub fn fallback_template(name: &str) -> Option<&'static str> {
    FALLBACK_TEMPLATES
        .get_file(format!("{}.tpl", name))
        .and_then(|f| f.contents_utf8())
        .map(str::trim)
}

/// The counter widget: an engine, the count, and the button attributes.
///
/// # Example
///
/// ```
/// use tallyplate::app::CounterApp;
/// use tallyplate::template::TemplateEngine;
///
/// let mut app = CounterApp::new(TemplateEngine::new());
/// app.load_fallback_templates();
/// assert!(app.render_counter().contains("\n  0\n"));
/// assert!(app.increment().contains("\n  1\n"));
/// ```
#[derive(Debug)]
pub struct CounterApp {
    engine: TemplateEngine,
    state: CounterState,
    button: ButtonConfig,
}

impl CounterApp {
    /// Create a widget at count zero with the default button.
    pub fn new(engine: TemplateEngine) -> Self {
        Self {
            engine,
            state: CounterState::default(),
            button: ButtonConfig::default(),
        }
    }

    /// Replace the button attributes.
    pub fn with_button(mut self, button: ButtonConfig) -> Self {
        self.button = button;
        self
    }

    /// Load `counter.tpl` and `button.tpl` from `dir`.
    ///
    /// If either file fails to load, both templates are replaced by the
    /// built-in fallbacks. Returns whether both files loaded.
    pub fn load_templates(&mut self, dir: &Path) -> bool {
        let mut success = true;
        for name in [COUNTER_TEMPLATE, BUTTON_TEMPLATE] {
            let path = dir.join(format!("{}.tpl", name));
            success &= self.engine.load_from_path(name, &path);
        }

        if !success {
            warn!(
                "Using built-in templates; could not load all templates from {}",
                dir.display()
            );
            self.load_fallback_templates();
        }
        success
    }

    /// Install the built-in `counter` and `button` templates.
    pub fn load_fallback_templates(&mut self) {
        for name in [COUNTER_TEMPLATE, BUTTON_TEMPLATE] {
            match fallback_template(name) {
                Some(content) => self.engine.load_template(name, content),
                None => warn!("No built-in template named '{}'", name),
            }
        }
    }

    /// Render the counter display for the current state.
    pub fn render_counter(&mut self) -> String {
        let ctx = self.state.context();
        self.engine.render(COUNTER_TEMPLATE, &ctx)
    }

    /// Render the increment button.
    pub fn render_button(&mut self) -> String {
        let ctx = self.button.context();
        self.engine.render(BUTTON_TEMPLATE, &ctx)
    }

    /// Handle a click: bump the count and return the re-rendered counter.
    pub fn increment(&mut self) -> String {
        self.state.increment();
        debug!("Counter incremented to {}", self.state.count);
        self.render_counter()
    }

    /// Current state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Button attributes.
    pub fn button(&self) -> &ButtonConfig {
        &self.button
    }

    /// The underlying engine.
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Mutable access to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut TemplateEngine {
        &mut self.engine
    }
}
