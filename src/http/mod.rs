//! HTTP server startup and shutdown.
//!
//! Binds the listener eagerly so a port conflict fails startup immediately,
//! then serves until SIGTERM/SIGINT triggers a graceful drain.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
