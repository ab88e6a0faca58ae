use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::render::OutputFormat;
use crate::sensor::SensorReader;

pub async fn run(cfg: &Config, sensor: &mut dyn SensorReader) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg.format, sensor).await
}

/// Accept loop. One client at a time: the current connection is driven to
/// completion before the next accept, so the sensor and the wire are never
/// shared. Both awaits double as the loop's yield points.
pub async fn serve(
    listener: TcpListener,
    format: OutputFormat,
    sensor: &mut dyn SensorReader,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket);
        if let Err(e) = conn.run(format, sensor).await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
