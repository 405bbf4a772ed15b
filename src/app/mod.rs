//! Applications built on the template engine.
//!
//! - [`counter`] - the click counter widget

pub mod counter;

pub use counter::{
    fallback_template, ButtonConfig, CounterApp, CounterState, BUTTON_TEMPLATE, COUNTER_TEMPLATE,
};
