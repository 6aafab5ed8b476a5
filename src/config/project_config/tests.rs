use super::*;
use serde_json::json;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write fixture");
}

#[test]
fn test_candidate_order() {
    assert_eq!(
        CONFIG_FILENAMES,
        &[
            "vue-doctor.config.json",
            "vue-doctor.config.js",
            "vue-doctor.config.mjs",
            ".vue-doctor.json",
        ]
    );
}

#[test]
fn test_loads_dedicated_json_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.json", r#"{"rules":{"x":1}}"#);

    let config = load_config(dir.path()).unwrap().expect("config found");
    assert_eq!(config.as_value(), &json!({"rules": {"x": 1}}));
}

#[test]
fn test_manifest_fallback() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{"name":"app","vue-doctor":{"a":1}}"#,
    );

    let config = load_config(dir.path()).unwrap().expect("config found");
    assert_eq!(config.into_value(), json!({"a": 1}));
}

#[test]
fn test_nothing_found_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(dir.path()).unwrap().is_none());

    write(dir.path(), "package.json", r#"{"name":"app"}"#);
    assert!(load_config(dir.path()).unwrap().is_none());
}

#[test]
fn test_first_json_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.json", r#"{"from":"config"}"#);
    write(dir.path(), ".vue-doctor.json", r#"{"from":"dotfile"}"#);
    write(dir.path(), "package.json", r#"{"vue-doctor":{"from":"manifest"}}"#);

    let config = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.as_value()["from"], "config");
}

#[test]
fn test_script_configs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.js", "export default { broken");
    write(dir.path(), "vue-doctor.config.mjs", "export default {}");
    write(dir.path(), ".vue-doctor.json", r#"{"from":"dotfile"}"#);

    let config = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.as_value()["from"], "dotfile");
}

#[test]
fn test_script_config_alone_falls_back_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.js", "module.exports = {}");
    write(dir.path(), "package.json", r#"{"vue-doctor":{"from":"manifest"}}"#);

    let config = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.as_value()["from"], "manifest");
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.json", "{ not json");
    write(dir.path(), ".vue-doctor.json", r#"{"ok":true}"#);

    let err = load_config(dir.path()).unwrap_err();
    match err {
        ConfigError::Parse { path, .. } => {
            assert!(path.ends_with("vue-doctor.config.json"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_malformed_manifest_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "package.json", "{,}");

    let err = load_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("package.json"));
}

#[test]
fn test_falsy_manifest_field_is_absent() {
    for falsy in ["null", "false", "0", "\"\""] {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "package.json",
            &format!(r#"{{"vue-doctor":{falsy}}}"#),
        );
        assert!(
            load_config(dir.path()).unwrap().is_none(),
            "{falsy} should not count as config"
        );
    }
}

#[test]
fn test_empty_object_in_manifest_is_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "package.json", r#"{"vue-doctor":{}}"#);
    assert_eq!(
        load_config(dir.path()).unwrap().unwrap().as_value(),
        &json!({})
    );
}

#[test]
fn test_ignore_accessors() {
    let config = VueDoctorConfig::new(json!({
        "ignore": {
            "rules": ["vue/no-v-html", 3, "no-console"],
            "files": ["src/legacy/"]
        }
    }));
    assert_eq!(config.ignored_rules(), vec!["vue/no-v-html", "no-console"]);
    assert_eq!(config.ignored_files(), vec!["src/legacy/"]);

    let opaque = VueDoctorConfig::new(json!(["not", "an", "object"]));
    assert!(opaque.ignored_rules().is_empty());
    assert!(opaque.ignored_files().is_empty());
}

#[test]
fn test_non_object_manifest_is_an_error() {
    for manifest in ["null", "[]", "\"app\"", "42"] {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "package.json", manifest);

        let err = load_config(dir.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidManifest { ref path } if path.ends_with("package.json")),
            "{manifest} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_unreadable_config_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    // exists, but reading a directory fails
    std::fs::create_dir(dir.path().join("vue-doctor.config.json")).unwrap();
    write(dir.path(), ".vue-doctor.json", r#"{"ok":true}"#);

    let err = load_config(dir.path()).unwrap_err();
    match err {
        ConfigError::Read { path, .. } => {
            assert!(path.ends_with("vue-doctor.config.json"));
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_malformed_dotfile_after_skipped_script_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vue-doctor.config.js", "module.exports = {}");
    write(dir.path(), ".vue-doctor.json", "{ broken");
    write(dir.path(), "package.json", r#"{"vue-doctor":{"from":"manifest"}}"#);

    let err = load_config(dir.path()).unwrap_err();
    match err {
        ConfigError::Parse { path, .. } => {
            assert!(path.ends_with(".vue-doctor.json"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
