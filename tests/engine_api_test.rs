//! Integration tests for the template engine's public API.

use std::fs;

use tallyplate::app::{CounterApp, CounterState};
use tallyplate::template::{check_template, Context, DiagnosticKind, TemplateEngine, Value};
use tempfile::TempDir;

#[test]
fn full_context_leaves_no_placeholder_tokens() {
    let mut engine = TemplateEngine::new();
    engine.load_template(
        "button",
        "<button id=\"{{ button_id }}\">\n  {{button_text}}\n</button>",
    );

    let ctx = Context::new()
        .with("button_id", "increment-btn")
        .with("button_text", "Increment");
    let out = engine.render("button", &ctx);

    assert!(!out.contains("{{"));
    assert!(!out.contains("}}"));
    insta::assert_snapshot!(out, @r#"
    <button id="increment-btn">
      Increment
    </button>
    "#);
}

#[test]
fn empty_context_reproduces_placeholders() {
    let mut engine = TemplateEngine::new();
    engine.load_template("counter", "{{ count }}");
    assert_eq!(engine.render("counter", &Context::new()), "{{ count }}");
}

#[test]
fn conditional_truthiness() {
    let mut engine = TemplateEngine::new();
    engine.load_template("t", "{% if show %}X{% endif %}");

    assert_eq!(engine.render("t", &Context::new().with("show", true)), "X");
    assert_eq!(engine.render("t", &Context::new().with("show", false)), "");
    assert_eq!(engine.render("t", &Context::new()), "");
}

#[test]
fn cache_reuse_across_key_order() {
    let mut engine = TemplateEngine::new();
    engine.load_template("t", "{{ a }}{{ b }}{{ c }}");

    let forward: Context = vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let backward: Context = vec![("c", 3), ("b", 2), ("a", 1)].into_iter().collect();

    let first = engine.render("t", &forward);
    let second = engine.render("t", &backward);
    assert_eq!(first, second);
    assert_eq!(engine.stats().computed, 1);
    assert_eq!(engine.stats().hits, 1);
}

#[test]
fn cache_key_sensitivity() {
    let mut engine = TemplateEngine::new();
    engine.load_template("t", "{{ label }}");

    engine.render("t", &Context::new().with("label", "a"));
    engine.render("t", &Context::new().with("label", "b"));
    assert_eq!(engine.stats().computed, 2);
    assert_eq!(engine.cached_renders(), 2);
}

#[test]
fn string_and_number_contexts_do_not_share_cache_entries() {
    let mut engine = TemplateEngine::new();
    engine.load_template("t", "{% if n %}on{% endif %}");

    assert_eq!(engine.render("t", &Context::new().with("n", 0)), "");
    assert_eq!(engine.render("t", &Context::new().with("n", "0")), "on");
}

#[test]
fn unknown_template_sentinel() {
    let mut engine = TemplateEngine::new();
    assert_eq!(
        engine.render("missing", &Context::new()),
        "Template 'missing' not found"
    );
}

#[test]
fn reload_overwrite_is_visible_immediately() {
    let mut engine = TemplateEngine::new();
    let ctx = Context::new().with("count", 1);
    engine.load_template("counter", "v1:{{ count }}");
    assert_eq!(engine.render("counter", &ctx), "v1:1");

    engine.load_template("counter", "v2:{{ count }}");
    assert_eq!(engine.render("counter", &ctx), "v2:1");
}

#[test]
fn reload_from_disk_after_edit() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counter.tpl");
    let mut engine = TemplateEngine::new();
    let ctx = Context::new().with("count", 7);

    fs::write(&path, "<i>{{ count }}</i>").unwrap();
    assert!(engine.load_from_path("counter", &path));
    assert_eq!(engine.render("counter", &ctx), "<i>7</i>");

    fs::write(&path, "<b>{{ count }}</b>").unwrap();
    assert!(engine.load_from_path("counter", &path));
    assert_eq!(engine.render("counter", &ctx), "<b>7</b>");
}

#[test]
fn end_to_end_counter_scenario() {
    let mut engine = TemplateEngine::new();
    engine.load_template("counter", "{{ count }}");

    let mut state = CounterState::default();
    assert_eq!(engine.render("counter", &state.context()), "0");
    state.increment();
    assert_eq!(engine.render("counter", &state.context()), "1");

    assert_eq!(engine.cached_renders(), 2);
    assert_eq!(engine.render("counter", &Context::new().with("count", 0)), "0");
    assert_eq!(engine.stats().hits, 1);
}

#[test]
fn counter_app_with_fallbacks_renders_markup() {
    let mut app = CounterApp::new(TemplateEngine::new());
    let temp = TempDir::new().unwrap();
    assert!(!app.load_templates(temp.path()));

    app.increment();
    let counter = app.render_counter();
    insta::assert_snapshot!(counter, @r#"
    <div class="text-6xl font-bold mb-8 text-[#89b4fa] bg-[#11111b] px-6 py-4 rounded-lg border border-[#45475a]">
      1
    </div>
    "#);
}

#[test]
fn nested_blocks_are_diagnosable_not_rejected() {
    let src = "{% if a %}[{% if b %}B{% endif %}]{% endif %}";
    let mut engine = TemplateEngine::new();
    engine.load_template("nested", src);

    let ctx = Context::new().with("a", true).with("b", true);
    assert_eq!(engine.render("nested", &ctx), "[{% if b %}B]{% endif %}");

    let kinds: Vec<_> = check_template(src).into_iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::NestedBlock]);
}

#[test]
fn values_convert_from_common_types() {
    let ctx = Context::new()
        .with("i", 3u8)
        .with("f", 0.25)
        .with("s", String::from("x"))
        .with("o", None::<i32>);
    assert_eq!(ctx.get("i"), Some(&Value::Int(3)));
    assert_eq!(ctx.get("f"), Some(&Value::Float(0.25)));
    assert_eq!(ctx.get("s"), Some(&Value::Str("x".into())));
    assert_eq!(ctx.get("o"), Some(&Value::Null));
}

#[test]
fn values_render_in_their_display_form() {
    let mut engine = TemplateEngine::new();
    engine.load_template("t", "{{ b }}|{{ f }}|{{ n }}|{{ g }}");
    let ctx = Context::new()
        .with("b", true)
        .with("f", 1.0)
        .with("n", None::<i32>)
        .with("g", 0.25);
    assert_eq!(engine.render("t", &ctx), "True|1.0|None|0.25");
}
