//! Tests for the blocking-loop-to-async bridge and the notifier task.

use std::time::Duration;

use camowatch_types::UnlockEvent;
use kanal::bounded_async;
use tokio::time::timeout;

use crate::notify::notifier_loop;

#[tokio::test]
async fn spawn_blocking_bridges_events_to_async() {
    let (tx, rx) = bounded_async::<UnlockEvent>(8);

    tokio::task::spawn_blocking(move || {
        tx.try_send(UnlockEvent::now("New Camo Unlocked: Gold"))
            .unwrap();
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.line, "New Camo Unlocked: Gold");
}

#[tokio::test]
async fn notifier_exits_when_senders_drop() {
    let (tx, rx) = bounded_async::<UnlockEvent>(4);
    let task = tokio::spawn(notifier_loop(rx, false));

    tx.send(UnlockEvent::now("Gold Camo")).await.unwrap();
    tx.send(UnlockEvent::now("Diamond Camo")).await.unwrap();
    drop(tx);

    let result = timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[test]
fn unlock_events_serialize_to_json_lines() {
    let event = UnlockEvent::now("New Camo Unlocked: Gold");
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("New Camo Unlocked: Gold"));
    assert!(json.contains("\"at\""));
}
