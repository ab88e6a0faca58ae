//! Roomsense - Network-Attached Temperature/Humidity Sensor
//!
//! Core library for the single-connection sensor web server.

pub mod config;
pub mod http;
pub mod sensor;
pub mod server;
