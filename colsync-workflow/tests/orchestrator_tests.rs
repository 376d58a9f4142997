use colsync_types::{GroupRecord, IncomingMessage, UserSettingsRecord};
use colsync_workflow::{
    create_orchestrator, create_orchestrator_with_engine, WorkflowConfig, WorkflowEngine,
    WorkflowError, WorkflowEvent,
};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::timeout;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn listening_config() -> WorkflowConfig {
    WorkflowConfig::default().with_listening(["usual", "settings"])
}

fn group_msg(id: &str, n: usize) -> IncomingMessage {
    let cols: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    IncomingMessage::usual(&GroupRecord::new(id, cols)).unwrap()
}

fn settings_msg(id: &str, n: usize) -> IncomingMessage {
    let cols: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    IncomingMessage::settings(&UserSettingsRecord::new(id, cols)).unwrap()
}

fn drain_notices(rx: &mut broadcast::Receiver<WorkflowEvent>) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Some(notices) = event.notices() {
            out.push(notices.iter().map(|n| n.to_string()).collect());
        }
    }
    out
}

#[tokio::test]
async fn dispatcher_reports_mismatch() {
    init_tracing();
    let (handle, orchestrator) = create_orchestrator(listening_config()).unwrap();
    let mut rx = handle.subscribe();
    let task = tokio::spawn(orchestrator.run());

    handle.send_message(group_msg("one", 1)).await.unwrap();
    handle.send_message(settings_msg("one", 2)).await.unwrap();

    let notices = timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Ok(WorkflowEvent::ColumnListChanged(notices)) => break notices,
                Ok(_) => continue,
                Err(e) => panic!("event channel failed: {e}"),
            }
        }
    })
    .await
    .expect("no column list event");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0], "one is not synced");

    handle.shutdown().await.unwrap();
    task.await.unwrap();
}

#[tokio::test]
async fn dispatcher_processes_in_arrival_order() {
    let (handle, orchestrator) = create_orchestrator(listening_config()).unwrap();
    let mut rx = handle.subscribe();
    let task = tokio::spawn(orchestrator.run());

    handle.send_message(group_msg("g", 1)).await.unwrap();
    handle.send_message(group_msg("g", 3)).await.unwrap();
    handle.send_message(settings_msg("g", 3)).await.unwrap();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    // The settings message saw the second group layout, so nothing is out of sync.
    assert!(drain_notices(&mut rx).is_empty());
    let state = handle.snapshot().await;
    assert_eq!(state.group("g").unwrap().column_count(), 3);
}

#[tokio::test]
async fn malformed_message_does_not_stop_the_loop() {
    init_tracing();
    let (handle, orchestrator) = create_orchestrator(listening_config()).unwrap();
    let mut rx = handle.subscribe();
    let task = tokio::spawn(orchestrator.run());

    handle
        .send_message(IncomingMessage::new("settings", "not json"))
        .await
        .unwrap();
    handle.send_message(group_msg("g", 1)).await.unwrap();
    handle.send_message(settings_msg("g", 4)).await.unwrap();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    assert_eq!(drain_notices(&mut rx), vec![vec!["g is not synced".to_string()]]);
}

#[tokio::test]
async fn listening_commands_are_ordered_with_messages() {
    let (handle, orchestrator) = create_orchestrator(WorkflowConfig::default()).unwrap();
    let task = tokio::spawn(orchestrator.run());

    handle.send_message(group_msg("dropped", 1)).await.unwrap();
    handle.listen("usual").await.unwrap();
    handle.send_message(group_msg("kept", 1)).await.unwrap();
    handle.unlisten("usual").await.unwrap();
    handle.send_message(group_msg("late", 1)).await.unwrap();
    handle.set_listening(["settings"]).await.unwrap();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    let state = handle.snapshot().await;
    assert!(state.group("dropped").is_none());
    assert!(state.group("kept").is_some());
    assert!(state.group("late").is_none());
    let listening = handle.listening().await;
    assert!(listening.includes("settings"));
    assert_eq!(listening.len(), 1);
}

#[tokio::test]
async fn unlistened_messages_emit_nothing() {
    let (handle, orchestrator) =
        create_orchestrator(WorkflowConfig::default().with_listening(["usual"])).unwrap();
    let mut rx = handle.subscribe();
    let task = tokio::spawn(orchestrator.run());

    handle.send_message(settings_msg("g", 2)).await.unwrap();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    assert!(rx.try_recv().is_err());
    assert_eq!(handle.snapshot().await.settings_count(), 0);
}

#[tokio::test]
async fn send_after_shutdown_is_channel_closed() {
    let (handle, orchestrator) = create_orchestrator(listening_config()).unwrap();
    let task = tokio::spawn(orchestrator.run());
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    let err = handle.send_message(group_msg("g", 1)).await.unwrap_err();
    assert!(matches!(err, WorkflowError::ChannelClosed));
}

#[tokio::test]
async fn loop_ends_when_handles_drop() {
    let (handle, orchestrator) = create_orchestrator(listening_config()).unwrap();
    let task = tokio::spawn(orchestrator.run());
    drop(handle);

    timeout(Duration::from_secs(5), task)
        .await
        .expect("dispatcher did not stop")
        .unwrap();
}

#[tokio::test]
async fn orchestrator_around_existing_engine() {
    let engine = WorkflowEngine::new(&listening_config());
    let (handle, orchestrator) = create_orchestrator_with_engine(engine.clone(), 4);
    assert!(orchestrator.engine().listening().await.includes("usual"));
    let task = tokio::spawn(orchestrator.run());

    handle.send_message(group_msg("g", 2)).await.unwrap();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    assert_eq!(engine.group("g").await.unwrap().column_count(), 2);
}

#[test]
fn zero_capacity_config_is_rejected() {
    let config = WorkflowConfig {
        command_capacity: 0,
        ..listening_config()
    };
    assert!(matches!(
        create_orchestrator(config),
        Err(WorkflowError::Config(_))
    ));
}
