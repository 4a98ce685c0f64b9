use gridlife_engine::PatternLibrary;

const BUNDLE_JSON: &str = r#"{
    "formatVersion": 1,
    "patterns": [
        { "key": "pack:glider", "name": "Glider", "rle": "bo$2bo$3o!" },
        { "key": "pack:block", "name": "Block", "rle": "2o$2o!" },
        { "key": "pack:lwss", "rle": "bo2bo$o4b$o3bo$4o!" }
    ]
}"#;

#[test]
fn bundle_smoke_parses_and_has_core_invariants() {
    let library = PatternLibrary::from_bundle_json(BUNDLE_JSON).expect("bundle should parse");

    assert_eq!(library.len(), 3);
    assert!(!library.is_empty());

    let glider = library.get("pack:glider").expect("glider should be present");
    assert_eq!(glider.width(), 3);
    assert_eq!(glider.height(), 3);
    assert_eq!(glider.alive_count(), 5);

    let lwss = library.get("pack:lwss").expect("lwss should be present");
    assert_eq!(lwss.width(), 5);
    assert_eq!(lwss.height(), 4);
    assert_eq!(lwss.alive_count(), 9);

    assert!(library.get("pack:missing").is_none());

    // Missing display name falls back to the key in the manifest
    let manifest = library.manifest_json();
    assert!(manifest.contains("\"formatVersion\":1"));
    assert!(manifest.contains("pack:lwss"));
    assert!(manifest.contains("Glider"));
}

#[test]
fn bundle_smoke_bad_bundle_is_rejected_whole() {
    let broken = r#"{
        "patterns": [
            { "key": "ok", "rle": "o!" },
            { "key": "bad", "rle": "!" }
        ]
    }"#;
    let err = PatternLibrary::from_bundle_json(broken).unwrap_err();
    assert!(err.contains("bad"));
}
