use super::protocol::TelemetryDto;
use crate::use_cases::SimulationUpdate;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{error, warn};

/// Writes every `every_n_ticks`-th update as one JSON line until the update channel
/// closes. Returns the number of lines written.
pub async fn telemetry_writer<W>(
    mut update_rx: broadcast::Receiver<SimulationUpdate>,
    writer: &mut W,
    every_n_ticks: u64,
) -> std::io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let every_n_ticks = every_n_ticks.max(1);
    let mut written = 0;

    loop {
        match update_rx.recv().await {
            Ok(update) => {
                if update.tick % every_n_ticks != 0 {
                    continue;
                }

                let mut line = match serde_json::to_string(&TelemetryDto::from(update)) {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize telemetry");
                        continue;
                    }
                };
                line.push('\n');

                writer.write_all(line.as_bytes()).await?;
                writer.flush().await?;
                written += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "telemetry writer lagged; skipping to latest update");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    Ok(written)
}
