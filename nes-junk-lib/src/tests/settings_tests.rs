use super::*;

fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.check.hashes, HashAlgorithm::all());
    assert_eq!(settings.split.output_dir, None);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = write_settings("[split]\noutput_dir = \"/tmp/out\"\n");
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.split.output_dir, Some(PathBuf::from("/tmp/out")));
    assert_eq!(settings.check.hashes, HashAlgorithm::all());
}

#[test]
fn test_hash_selection() {
    let (_dir, path) = write_settings("[check]\nhashes = [\"sha1\", \"crc32\"]\n");
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(
        settings.check.hashes,
        vec![HashAlgorithm::Sha1, HashAlgorithm::Crc32]
    );
}

#[test]
fn test_malformed_file_is_error() {
    let (_dir, path) = write_settings("[check]\nhashes = [\"whirlpool\"]\n");
    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn test_output_dir_priority() {
    let settings = Settings {
        split: SplitSettings {
            output_dir: Some(PathBuf::from("from-settings")),
        },
        ..Default::default()
    };
    assert_eq!(
        settings.resolve_output_dir(Some(PathBuf::from("from-cli"))),
        Some(PathBuf::from("from-cli"))
    );
    assert_eq!(
        settings.resolve_output_dir(None),
        Some(PathBuf::from("from-settings"))
    );
    assert_eq!(Settings::default().resolve_output_dir(None), None);
}

#[test]
fn test_toml_round_trip() {
    let settings = Settings::default();
    let text = settings.to_toml_string().unwrap();
    assert!(text.contains("hashes"));
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_hashes_priority() {
    let settings = Settings::default();
    assert_eq!(
        settings.resolve_hashes(Some(vec![HashAlgorithm::Md5])),
        vec![HashAlgorithm::Md5]
    );
    assert_eq!(settings.resolve_hashes(Some(Vec::new())), Vec::new());
    assert_eq!(settings.resolve_hashes(None), HashAlgorithm::all());
}

#[cfg(unix)]
#[test]
fn test_toml_render_error_is_reported() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let settings = Settings {
        split: SplitSettings {
            output_dir: Some(PathBuf::from(OsString::from_vec(vec![b'o', 0xFF]))),
        },
        ..Default::default()
    };
    let err = settings.to_toml_string().unwrap_err();
    assert!(matches!(err, SettingsError::Serialize(_)));
}
