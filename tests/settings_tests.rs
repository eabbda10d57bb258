use std::path::PathBuf;

use sea_chart::ChartError;
use sea_chart::SessionSettings;
use sea_chart::api::{DEFAULT_STORE_FILE, DEFAULT_WINDOW_TITLE_PREFIX};
use sea_chart::core::ChartProfile;
use sea_chart::interaction::{KeyBindings, KeyCommand};

#[test]
fn empty_document_yields_defaults() {
    let settings = SessionSettings::from_json_str("{}").expect("parse");

    assert_eq!(settings, SessionSettings::default());
    assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_FILE));
    assert_eq!(settings.window_title_prefix, DEFAULT_WINDOW_TITLE_PREFIX);
    assert_eq!(settings.chart, ChartProfile::britannia());
    assert_eq!(settings.marker_hit_half_extent, 5);
}

#[test]
fn partial_key_bindings_keep_remaining_defaults() {
    let settings =
        SessionSettings::from_json_str(r#"{ "key_bindings": { "clear_all": "c" } }"#).expect("parse");

    assert_eq!(settings.key_bindings.clear_all, 'c');
    assert_eq!(settings.key_bindings.mark_current_position, 'o');
}

#[test]
fn settings_survive_json_round_trip() {
    let settings = SessionSettings::default()
        .with_store_path("charts/britannia.json")
        .with_key_bindings(KeyBindings {
            clear_all: 'k',
            mark_current_position: 'm',
        });

    let json = settings.to_json_pretty().expect("serialize");
    let parsed = SessionSettings::from_json_str(&json).expect("parse");

    assert_eq!(parsed, settings);
}

#[test]
fn clashing_key_bindings_are_rejected() {
    let err = SessionSettings::from_json_str(
        r#"{ "key_bindings": { "clear_all": "o", "mark_current_position": "O" } }"#,
    )
    .expect_err("same key twice");

    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_store_path_is_rejected() {
    let settings = SessionSettings::default().with_store_path("");
    assert!(matches!(settings.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn malformed_document_is_invalid_data() {
    let err = SessionSettings::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn key_resolution_ignores_ascii_case() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.resolve('x'), Some(KeyCommand::ClearAll));
    assert_eq!(bindings.resolve('X'), Some(KeyCommand::ClearAll));
    assert_eq!(bindings.resolve('O'), Some(KeyCommand::MarkCurrentPosition));
    assert_eq!(bindings.resolve('z'), None);
}
