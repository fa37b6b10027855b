use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match seoscope_server::start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("seoscope-server: {e}");
            ExitCode::FAILURE
        }
    }
}
