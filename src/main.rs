use log_sentinel::app;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    app::main().await
}
