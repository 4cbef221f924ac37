use super::*;

#[test]
fn default_strings() {
    let cfg = PinboardConfig::default();
    assert_eq!(cfg.title, DEFAULT_TITLE);
    assert_eq!(cfg.placeholder_message, DEFAULT_PLACEHOLDER_MESSAGE);
    assert_eq!(cfg.no_sort_label, DEFAULT_NO_SORT_LABEL);
    assert_eq!(cfg.drop_indicator_label, DEFAULT_DROP_INDICATOR_LABEL);
}

#[test]
fn from_json_empty_object_uses_defaults() {
    assert_eq!(PinboardConfig::from_json("{}").unwrap(), PinboardConfig::default());
}

#[test]
fn from_json_overrides_given_fields() {
    let cfg = PinboardConfig::from_json(r#"{"title":"Pins"}"#).unwrap();
    assert_eq!(cfg.title, "Pins");
    assert_eq!(cfg.placeholder_message, DEFAULT_PLACEHOLDER_MESSAGE);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PinboardConfig::from_json("{title").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse pinboard config"));
}

#[test]
fn from_json_rejects_blank_title() {
    let err = PinboardConfig::from_json(r#"{"title":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("title")));
}

#[test]
fn from_json_rejects_blank_placeholder() {
    let err = PinboardConfig::from_json(r#"{"placeholder_message":""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("placeholder_message")));
}

#[test]
fn from_json_rejects_blank_no_sort_label() {
    let err = PinboardConfig::from_json(r#"{"no_sort_label":" "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("no_sort_label")));
}

#[test]
fn from_json_reads_drop_indicator_label() {
    let cfg = PinboardConfig::from_json(r#"{"drop_indicator_label":"Pin here"}"#).unwrap();
    assert_eq!(cfg.drop_indicator_label, "Pin here");

    let err = PinboardConfig::from_json(r#"{"drop_indicator_label":""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("drop_indicator_label")));
}
