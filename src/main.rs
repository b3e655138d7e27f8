use std::sync::Arc;

use webhelpers::config::HelperConfig;
use webhelpers::logger;

mod demo;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = HelperConfig::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: HelperConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::bind(&cfg.server, addr)?;
    let state = Arc::new(demo::DemoState::new(&cfg));

    logger::log_server_start(&addr, &cfg);

    // Connections are served with spawn_local
    let local = tokio::task::LocalSet::new();
    local.run_until(server::serve(listener, state)).await
}
