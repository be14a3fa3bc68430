use std::process::ExitCode;

use labelscan_core::domain::health::ports::BackendHealthCheck;

/// Prints the backend greeting, or the error on stderr.
pub async fn execute<H: BackendHealthCheck>(client: &H) -> ExitCode {
    match client.health().await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
