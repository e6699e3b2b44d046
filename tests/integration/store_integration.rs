//! File-level behaviour of the property store and merge engine.

use prefmerge::{merge, Entry, PropertyStore};
use std::fs;
use tempfile::TempDir;

const WORKBENCH_PREFS: &str = "\
#Sat Jan 02 12:00:00 EST 2016
ENABLE_ANIMATIONS=false
PLUGINS_NOT_ACTIVATED_ON_STARTUP=;org.eclipse.m2e.discovery;
RUN_IN_BACKGROUND=true
; trailing note
eclipse.preferences.version=1
";

#[test]
fn test_real_world_file_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("org.eclipse.ui.workbench.prefs");
    fs::write(&path, WORKBENCH_PREFS).unwrap();

    let store = PropertyStore::load(&path, "=").unwrap().unwrap();
    assert_eq!(
        store.get("PLUGINS_NOT_ACTIVATED_ON_STARTUP"),
        Some(";org.eclipse.m2e.discovery;")
    );
    assert_eq!(store.len(), 4);

    store.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), WORKBENCH_PREFS);
}

#[test]
fn test_merge_then_save_then_reload() {
    let temp = TempDir::new().unwrap();
    let target_path = temp.path().join("target.prefs");
    fs::write(&target_path, "# mine\np=1\nq=2\n").unwrap();

    let target = PropertyStore::load(&target_path, "=").unwrap();
    let source = PropertyStore::parse("q=20\nx=3\ny=4\n", "=").unwrap();
    let merged = merge(target, source);
    merged.save_atomic(&target_path).unwrap();

    let reloaded = PropertyStore::load(&target_path, "=").unwrap().unwrap();
    assert_eq!(reloaded, merged);
    assert_eq!(
        reloaded.entries(),
        &[
            Entry::Comment("# mine".to_string()),
            Entry::Key("p".to_string()),
            Entry::Key("q".to_string()),
            Entry::Key("x".to_string()),
            Entry::Key("y".to_string()),
        ]
    );
    assert_eq!(reloaded.get("q"), Some("20"));
}

#[test]
fn test_malformed_lines_vanish_from_saved_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("target.prefs");
    fs::write(&path, "a=1\ngarbage line\nb=2\n").unwrap();

    let store = PropertyStore::load(&path, "=").unwrap().unwrap();
    assert!(!store.contains_key("garbage line"));
    store.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a=1\nb=2\n");
}
