// Server module entry point
// Accept loop for the demo server

pub mod connection;
pub mod listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::demo::DemoState;
use webhelpers::logger;

pub use listener::bind;

/// Accept connections until Ctrl-C
pub async fn serve(
    listener: TcpListener,
    state: Arc<DemoState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_info("Shutdown signal received, stopping accept loop");
                return Ok(());
            }
        }
    }
}
