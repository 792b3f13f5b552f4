use anyhow::Result;
use camowatch_types::UnlockEvent;
use kanal::AsyncReceiver;

/// Drains unlock events to the operator until every sender is gone.
pub async fn notifier_loop(events: AsyncReceiver<UnlockEvent>, json_output: bool) -> Result<()> {
    while let Ok(event) = events.recv().await {
        announce(&event, json_output)?;
    }
    Ok(())
}

fn announce(event: &UnlockEvent, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!("[camowatch] Camo Unlocked: {}", event.line);
    }
    Ok(())
}
