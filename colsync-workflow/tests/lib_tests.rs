use colsync_types::GroupId;
use colsync_workflow::{WorkflowConfig, WorkflowEngine, WorkflowEvent};
use serde_json::json;

#[tokio::test]
async fn engine_creation() {
    let engine = WorkflowEngine::new(&WorkflowConfig::default());
    assert!(engine.listening().await.is_empty());
    assert_eq!(engine.snapshot().await.group_count(), 0);
}

#[test]
fn event_wire_shape() {
    let event = WorkflowEvent::GroupsRedrawRequired(vec![GroupId::new("one")]);
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "event": "groups_redraw_required", "payload": ["one"] })
    );
    assert!(event.notices().is_none());
}
