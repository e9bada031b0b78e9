use breeze_core::load_from_json;
use breeze_css::emit_css;
use breeze_theme::{generate_layout, generate_palette, generate_spacing, generate_utilities};

const REM_CONFIG: &str = r##"{
    "colors": { "brand": "#7c3aed", "ink": "#0f172a" },
    "typography": { "main": "system-ui", "headlines": "serif" },
    "layout": { "container": "72rem", "cols": 3, "breakpoints": { "md": "48rem", "2xl": "96rem" } },
    "spacing": { "baseUnit": "1rem" },
    "utilities": ["spacing"]
}"##;

#[test]
fn test_rem_spacing_values() {
    let config = load_from_json(REM_CONFIG).unwrap();
    let css = emit_css(&generate_spacing(&config));

    assert!(css.contains(".m-0 { margin: 0rem; }"));
    assert!(css.contains(".m-1 { margin: 0.25rem; }"));
    assert!(css.contains(".p-x-6 { padding-left: 2rem; padding-right: 2rem; }"));
    assert!(css.contains("@media (min-width: 48rem) {\n  .md\\:m-0 { margin: 0rem; }"));
}

#[test]
fn test_leading_digit_breakpoint_is_escaped() {
    let config = load_from_json(REM_CONFIG).unwrap();
    let sheet = generate_layout(&config);
    let css = emit_css(&sheet);

    assert!(css.contains("@media (min-width: 96rem) {\n  .\\32 xl\\:col-1 { flex: 0 0 33.3333%; max-width: 33.3333%; }"));
    // container + row + 3 列 × 3
    assert_eq!(sheet.class_names().len(), 2 + 3 * 3);
}

#[test]
fn test_palette_without_standard_names() {
    let config = load_from_json(REM_CONFIG).unwrap();
    let css = emit_css(&generate_palette(&config));

    assert!(css.contains("--color-brand: #7c3aed;"));
    assert!(css.contains(".text-ink-dark { color: var(--color-ink-dark); }"));
    assert!(!css.contains("prefers-color-scheme"));
}

#[test]
fn test_only_requested_utilities() {
    let config = load_from_json(REM_CONFIG).unwrap();
    let sheets = generate_utilities(&config);

    assert_eq!(sheets.len(), 1);
    assert!(emit_css(&sheets[0]).starts_with("/* Spacing */"));
}
