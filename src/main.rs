use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::{error::Error, sync::Arc};
use swap_sim_rs::{
    components::oracle::{BinanceOracle, PriceOracle},
    config::server::DEFAULT_PORT,
    models::wallet::WalletSession,
    server::run_server,
};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .init()?;

    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let oracle: Arc<dyn PriceOracle> = Arc::new(BinanceOracle::new());
    let mut session = WalletSession::new();
    let report = session.revalue(oracle.as_ref()).await;

    if !report.is_complete() {
        warn!("initial revaluation missed: {:?}", report.failed);
    }

    info!("wallet total: {} USD", session.snapshot().total);

    run_server(Arc::new(RwLock::new(session)), oracle, port).await?;

    Ok(())
}
