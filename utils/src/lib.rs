//! Shared utilities for the Verigate gateway.

pub mod logging;

pub use logging::init_tracing;
