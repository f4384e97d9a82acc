use std::fs;

use roastlint::core::engine::RoastEngine;
use roastlint::{RoastCatalog, SavageLevel};

fn write_catalog(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, contents).expect("write catalog");
    (dir, path)
}

#[test]
fn user_rules_replace_the_builtin_table() {
    let (_dir, path) = write_catalog(
        r#"
[[rule]]
pattern = "borrowed value does not live long enough"
mild = ["that borrow fell through"]
savage = ["the borrow checker said no"]
nuclear = ["LIFETIMES. LEARN THEM."]
fix = "extend the owner's scope"
"#,
    );

    let catalog = RoastCatalog::from_toml_file(&path).expect("loads");
    assert_eq!(catalog.rules().len(), 1);
    // Pools not present in the file inherit the builtin ones.
    assert!(!catalog.markers(SavageLevel::Savage).is_empty());
    assert!(!catalog.fallbacks(SavageLevel::Nuclear).is_empty());

    let engine = RoastEngine::with_picker(catalog, Box::new(|_| 0));
    let m = engine
        .translate(
            "error[E0597]: borrowed value does not live long enough",
            SavageLevel::Savage,
        )
        .expect("user rule matches");
    assert_eq!(m.roast, "the borrow checker said no");
    assert_eq!(m.fix_suggestion.as_deref(), Some("extend the owner's scope"));
}

#[test]
fn empty_rule_table_falls_back_to_builtin() {
    let (_dir, path) = write_catalog("# nothing here\n");
    let catalog = RoastCatalog::from_toml_file(&path).expect("loads");
    assert_eq!(catalog.rules().len(), RoastCatalog::builtin().rules().len());
}

#[test]
fn marker_override_is_honored() {
    let (_dir, path) = write_catalog(
        r#"
[[rule]]
pattern = "oops"
mild = ["m"]
savage = ["s"]
nuclear = ["n"]

[markers]
mild = ["(m)"]
savage = ["(s)"]
nuclear = ["(n)"]
"#,
    );
    let catalog = RoastCatalog::from_toml_file(&path).expect("loads");
    let engine = RoastEngine::with_picker(catalog, Box::new(|_| 0));
    let m = engine.translate("oops", SavageLevel::Nuclear).expect("matches");
    assert_eq!(m.marker, "(n)");
    assert_eq!(m.fix_suggestion, None);
}

#[test]
fn bad_pattern_is_rejected_at_load_time() {
    let (_dir, path) = write_catalog(
        r#"
[[rule]]
pattern = "(unclosed"
mild = ["m"]
savage = ["s"]
nuclear = ["n"]
"#,
    );
    let err = RoastCatalog::from_toml_file(&path).expect_err("bad regex");
    assert!(format!("{:#}", err).contains("(unclosed"));
}

#[test]
fn missing_level_variants_are_rejected_at_load_time() {
    let (_dir, path) = write_catalog(
        r#"
[[rule]]
pattern = "oops"
mild = ["m"]
nuclear = ["n"]
"#,
    );
    let err = RoastCatalog::from_toml_file(&path).expect_err("savage pool missing");
    assert!(format!("{:#}", err).contains("savage"));
}

#[test]
fn unreadable_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");
    let err = RoastCatalog::from_toml_file(&path).expect_err("no such file");
    assert!(format!("{:#}", err).contains("missing.toml"));
}
