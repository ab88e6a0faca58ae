use roomsense::config::Config;
use roomsense::sensor::sim::SimulatedSensor;
use roomsense::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Association with the wireless network happens before this process
    // starts; the credentials are configuration only.
    if let Some(network) = &cfg.network {
        tracing::info!("Expecting to be associated with network {}", network.ssid);
    }

    let mut sensor = SimulatedSensor::default();

    tokio::select! {
        res = server::listener::run(&cfg, &mut sensor) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
