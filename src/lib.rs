//! devops-demo: a minimal HTTP endpoint service.
//!
//! Exposes three static routes used by external tooling: `/health` for
//! liveness probes, `/version` for deployment verification, and `/error` as a
//! canned failure for exercising downstream error handling. The service holds
//! no mutable state; configuration is resolved once at startup.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
