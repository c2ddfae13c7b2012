//! HTTP lookup API for the Verigate gateway.
//!
//! One externally-consumed endpoint: `GET /api/user/{uuid}` resolves a
//! verification session and returns it in the `{success, data}` envelope the
//! browser page consumes. Plus a `/health` liveness probe.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{AppState, RpcServer};
