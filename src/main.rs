use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the runner framework entry point.
    match hub_sim::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
