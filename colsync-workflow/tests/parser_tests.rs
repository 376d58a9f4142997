use colsync_types::{GroupRecord, IncomingMessage, MessageKind, UserSettingsRecord};
use colsync_workflow::{parse, parse_group, parse_settings, ParsedRecord, WorkflowError};
use serde_json::json;

fn usual(data: serde_json::Value) -> IncomingMessage {
    IncomingMessage::new("usual", data.to_string())
}

fn settings(data: serde_json::Value) -> IncomingMessage {
    IncomingMessage::new("settings", data.to_string())
}

#[test]
fn parse_group_record() {
    let msg = usual(json!({ "groupId": "one", "groupColumns": ["one"] }));
    assert_eq!(parse_group(&msg).unwrap(), GroupRecord::new("one", ["one"]));
}

#[test]
fn parse_settings_record() {
    let msg = settings(json!({ "groupId": "one", "settingColumns": ["one", "two"] }));
    assert_eq!(
        parse_settings(&msg).unwrap(),
        UserSettingsRecord::new("one", ["one", "two"])
    );
}

#[test]
fn parse_ignores_unknown_fields() {
    let msg = usual(json!({ "groupId": "g", "groupColumns": [], "extra": 1 }));
    assert_eq!(parse_group(&msg).unwrap().column_count(), 0);
}

#[test]
fn parse_dispatches_by_kind() {
    let msg = usual(json!({ "groupId": "g", "groupColumns": ["a"] }));
    let parsed = parse(MessageKind::Usual, &msg).unwrap();
    assert_eq!(parsed.kind(), MessageKind::Usual);
    assert!(matches!(parsed, ParsedRecord::Group(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let msg = IncomingMessage::new("usual", "{not json");
    let err = parse_group(&msg).unwrap_err();
    assert!(err.is_parse());
    match err {
        WorkflowError::Parse { kind, .. } => assert_eq!(kind, MessageKind::Usual),
        other => panic!("Expected Parse, got {other:?}"),
    }
}

#[test]
fn wrong_shape_is_parse_error() {
    // A group body sent as settings lacks `settingColumns`.
    let msg = settings(json!({ "groupId": "g", "groupColumns": ["a"] }));
    let err = parse_settings(&msg).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse settings message"));
}

#[test]
fn parse_error_through_dispatch() {
    let msg = IncomingMessage::new("settings", "");
    assert!(parse(MessageKind::Settings, &msg).unwrap_err().is_parse());
}
