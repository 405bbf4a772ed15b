//! The two substitution passes.
//!
//! Rendering is variable substitution over the raw text followed by block
//! resolution over the *result*. Placeholders inside an `{% if %}` body are
//! therefore already substituted when the block is kept, and a value that
//! itself contains block syntax is resolved as if it were template text.

use regex::Captures;

use super::compiled::CompiledTemplate;
use super::context::Context;

/// Run both passes over a compiled template.
pub fn render_compiled(template: &CompiledTemplate, context: &Context) -> String {
    let substituted = substitute_variables(template, template.source(), context);
    resolve_blocks(template, &substituted, context)
}

/// Replace every `{{ name }}` with the context value's display form.
///
/// Names missing from the context are echoed back as `{{ name }}` in
/// normalized spacing, so rendering with a partial context is harmless.
pub fn substitute_variables(template: &CompiledTemplate, input: &str, context: &Context) -> String {
    template
        .variable_matcher()
        .replace_all(input, |caps: &Captures| {
            let name = &caps[1];
            match context.get(name) {
                Some(value) => value.to_string(),
                None => format!("{{{{ {} }}}}", name),
            }
        })
        .into_owned()
}

/// Keep the body of each truthy `{% if name %}` block and drop falsy ones
/// entirely, delimiters included.
///
/// Blocks do not nest: the first `{% endif %}` after an opener closes it.
pub fn resolve_blocks(template: &CompiledTemplate, input: &str, context: &Context) -> String {
    template
        .block_matcher()
        .replace_all(input, |caps: &Captures| {
            if context.is_truthy(&caps[1]) {
                caps[2].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}
