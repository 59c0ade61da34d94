use super::types::{ControlEvent, ScheduledEvent};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Feeds scheduled control events into the simulation at their offsets.
pub async fn replay_schedule(mut events: Vec<ScheduledEvent>, control_tx: mpsc::Sender<ControlEvent>) {
    events.sort_by_key(|scheduled| scheduled.at);
    let start = Instant::now();

    for scheduled in events {
        tokio::time::sleep_until(start + scheduled.at).await;
        debug!(at_ms = scheduled.at.as_millis() as u64, event = ?scheduled.event, "replaying control event");

        if control_tx.send(scheduled.event).await.is_err() {
            warn!("simulation stopped before the schedule finished");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Environment;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn when_events_are_out_of_order_then_they_are_sent_by_offset() {
        let (control_tx, mut control_rx) = mpsc::channel(8);
        let events = vec![
            ScheduledEvent {
                at: Duration::from_secs(2),
                event: ControlEvent::SetActive(false),
            },
            ScheduledEvent {
                at: Duration::from_secs(1),
                event: ControlEvent::SetEnvironment(Environment::Moon),
            },
        ];

        let start = Instant::now();
        replay_schedule(events, control_tx).await;

        assert_eq!(
            control_rx.recv().await,
            Some(ControlEvent::SetEnvironment(Environment::Moon))
        );
        assert_eq!(control_rx.recv().await, Some(ControlEvent::SetActive(false)));
        assert_eq!(control_rx.recv().await, None);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn when_receiver_is_gone_then_replay_stops_quietly() {
        let (control_tx, control_rx) = mpsc::channel(1);
        drop(control_rx);

        replay_schedule(
            vec![ScheduledEvent {
                at: Duration::ZERO,
                event: ControlEvent::SetActive(true),
            }],
            control_tx,
        )
        .await;
    }
}
