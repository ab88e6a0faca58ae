use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::render::{OutputFormat, render};
use crate::http::scanner::RequestScanner;
use crate::http::writer::ResponseWriter;
use crate::sensor::SensorReader;

pub struct Connection {
    stream: TcpStream,
    scanner: RequestScanner,
    state: ConnectionState,
}

enum ConnectionState {
    Scanning,
    Responding(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            scanner: RequestScanner::new(),
            state: ConnectionState::Scanning,
        }
    }

    /// Drives this connection to completion: scan for the end of the
    /// request, take one sensor reading, send it, close.
    pub async fn run(
        &mut self,
        format: OutputFormat,
        sensor: &mut dyn SensorReader,
    ) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Scanning => {
                    if self.request_ready().await? {
                        tracing::debug!("Request complete, reading sensor");

                        let reading = sensor.read();
                        if reading.is_failed() {
                            tracing::warn!("Sensor read failed");
                        }

                        let response = render(&reading, format);
                        self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                    } else {
                        // Disconnect before the blank line: no response.
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Responding(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Consumes request bytes until the terminating blank line or
    /// disconnect. Returns true once the request is complete.
    ///
    /// The await on `read` is the only suspension point: there is no
    /// timeout, so a client that trickles bytes (or sends nothing) parks
    /// the whole server here until it completes or hangs up.
    async fn request_ready(&mut self) -> anyhow::Result<bool> {
        let mut buf = [0u8; 1024];

        loop {
            let n = self.stream.read(&mut buf).await?;

            if n == 0 {
                // Client closed connection
                return Ok(false);
            }

            // Bytes past the terminating newline are ignored; the
            // connection closes right after the response anyway.
            if self.scanner.feed(&buf[..n]).is_some() {
                return Ok(true);
            }
        }
    }
}
