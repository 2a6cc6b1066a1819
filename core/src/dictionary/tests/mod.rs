use super::*;
use nexx_shared::params;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) {
    fs::write(dir.path().join(name), body).unwrap();
}

#[test]
fn test_bundled_dictionary_has_default_bucket() {
    let dictionary = Dictionary::bundled();
    assert!(dictionary.locale().is_default());
    assert_eq!(dictionary.get_message("999", None).as_deref(), Some("Unknown error"));
    assert!(!dictionary.contains(&Locale::from("vi"), "999"));
}

#[test]
fn test_later_resource_wins() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "framework.toml", "\"100\" = \"framework says required\"\n\"150\" = \"only in framework\"");
    write(&dir, "app.toml", "\"100\" = \"app says required\"");

    let config = DictionaryConfig::default()
        .with_base_path(dir.path())
        .with_path("framework")
        .with_path("app");
    let dictionary = Dictionary::load(&config).unwrap();

    assert_eq!(dictionary.get_message("100", None).as_deref(), Some("app says required"));
    assert_eq!(dictionary.get_message("150", None).as_deref(), Some("only in framework"));
}

#[test]
fn test_caller_resources_override_bundled() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "errors.json", r#"{"999": "Something went wrong"}"#);

    let config = DictionaryConfig::default().with_path(dir.path().join("errors").display().to_string());
    let dictionary = Dictionary::load(&config).unwrap();
    assert_eq!(dictionary.get_message("999", None).as_deref(), Some("Something went wrong"));
}

#[test]
fn test_missing_resource_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "app.toml", "\"300\" = \"Order closed\"");

    let config = DictionaryConfig::new(Locale::from("fr"))
        .with_base_path(dir.path())
        .with_path("app")
        .with_path("missing");
    let dictionary = Dictionary::load(&config).unwrap();

    assert_eq!(dictionary.len(&Locale::from("fr")), 0);
    assert_eq!(dictionary.get_ui_message("300", None).as_deref(), Some("Order closed"));
}

#[test]
fn test_ui_message_uses_active_locale_then_default() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "app.toml", "\"300\" = \"Order closed\"\n\"301\" = \"Order paid\"");
    write(&dir, "app_vi.toml", "\"300\" = \"Đơn hàng đã đóng\"");

    let config = DictionaryConfig::new(Locale::from("vi"))
        .with_base_path(dir.path())
        .with_path("app");
    let dictionary = Dictionary::load(&config).unwrap();

    assert_eq!(dictionary.get_ui_message("300", None).as_deref(), Some("Đơn hàng đã đóng"));
    assert_eq!(dictionary.get_message("300", None).as_deref(), Some("Order closed"));
    assert_eq!(dictionary.get_ui_message("301", None).as_deref(), Some("Order paid"));
    assert_eq!(dictionary.get_ui_message("999", None).as_deref(), Some("Lỗi không xác định"));
    assert_eq!(dictionary.get_ui_message("555", None), None);
}

#[test]
fn test_translate_in_extra_locale() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "app.toml", "\"300\" = \"Order closed\"");
    write(&dir, "app_ja.toml", "\"300\" = \"注文は終了しました\"");

    let config = DictionaryConfig::new(Locale::from("vi"))
        .with_extra_locale(Locale::from("ja"))
        .with_base_path(dir.path())
        .with_path("app");
    let dictionary = Dictionary::load(&config).unwrap();

    let ja = Locale::from("ja");
    assert_eq!(dictionary.translate_in("300", &ja, None).as_deref(), Some("注文は終了しました"));
    assert_eq!(dictionary.translate_in("999", &ja, None).as_deref(), Some("Unknown error"));
    assert_eq!(
        dictionary.locales().iter().map(|l| l.as_str()).collect::<Vec<_>>(),
        vec!["default", "ja", "vi"]
    );
}

#[test]
fn test_params_are_rendered() {
    let dictionary = Dictionary::bundled();
    let p = params([("field", "email")]);
    assert_eq!(dictionary.get_message("100", Some(&p)).as_deref(), Some("email is required"));
    assert_eq!(dictionary.get_message("100", None).as_deref(), Some("{{field}} is required"));
}

#[test]
fn test_empty_dictionary_has_no_messages() {
    let dictionary = Dictionary::empty(Locale::default());
    assert_eq!(dictionary.get_message("999", None), None);
    assert_eq!(dictionary.get_ui_message("999", None), None);
    assert_eq!(dictionary.locales().len(), 1);
}

#[test]
fn test_malformed_resource_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "app.json", "{not json");

    let config = DictionaryConfig::default().with_base_path(dir.path()).with_path("app");
    assert!(matches!(Dictionary::load(&config), Err(DictionaryError::Json { .. })));
}

#[test]
fn test_config_from_i18n() {
    let i18n = I18nConfig::default()
        .with_language("vi")
        .with_resource("errors/app")
        .with_base_path("/srv/resources");
    let config = DictionaryConfig::from_i18n(&i18n).unwrap();
    assert_eq!(config.locale.as_str(), "vi");
    assert_eq!(config.paths, vec!["errors/app".to_string()]);
    assert_eq!(config.base_path, Some(PathBuf::from("/srv/resources")));

    let unset = DictionaryConfig::from_i18n(&I18nConfig::default()).unwrap();
    assert!(unset.locale.is_default());

    let invalid = I18nConfig::default().with_language("not a locale");
    assert!(matches!(
        DictionaryConfig::from_i18n(&invalid),
        Err(DictionaryError::InvalidLocale(_))
    ));
}

#[test]
fn test_empty_template_is_configured() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "app.toml", "\"300\" = \"\"");

    let config = DictionaryConfig::new(Locale::from("vi"))
        .with_base_path(dir.path())
        .with_path("app");
    let dictionary = Dictionary::load(&config).unwrap();

    assert!(dictionary.contains(&Locale::default(), "300"));
    assert_eq!(dictionary.get_message("300", None).as_deref(), Some(""));
    assert_eq!(dictionary.get_ui_message("300", None).as_deref(), Some(""));
    assert_eq!(dictionary.get_message("301", None), None);
}
