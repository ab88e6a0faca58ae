//! HTTP request/response cycle for the sensor endpoint.
//!
//! This is deliberately not a general HTTP implementation. The server has a
//! single implicit endpoint and answers every completed request the same way,
//! so the request is never parsed: the scanner only watches for the blank
//! line that ends the header block.
//!
//! # Submodules
//!
//! - **`scanner`**: Detects the end of a request without parsing it
//! - **`render`**: Renders a sensor reading into an HTML or JSON response
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//! - **`connection`**: The per-connection state machine tying it together
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Scanning   │ ← Consume request bytes until a blank line
//!        └──────┬──────┘
//!               │ Blank line seen: read sensor, render response
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent (or client disconnected early)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! A client that disconnects before sending the blank line goes straight to
//! Closed and receives no bytes at all.

pub mod connection;
pub mod render;
pub mod response;
pub mod scanner;
pub mod writer;
