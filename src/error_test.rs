use super::*;

#[test]
fn missing_element_names_the_id() {
    let err = SceneError::MissingElement("theme-toggle".into());
    assert_eq!(err.to_string(), "required element not found: #theme-toggle");
}

#[test]
fn config_error_converts_from_serde() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SceneError = parse.into();
    assert!(matches!(err, SceneError::Config(_)));
    assert!(err.to_string().starts_with("invalid scene config:"));
}

#[test]
fn host_error_display() {
    let err = SceneError::Host("storage quota".into());
    assert_eq!(err.to_string(), "host call failed: storage quota");
}
