//! Fundamental types for the Verigate verification gateway.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet addresses, timestamps, the normalized verification
//! session, proof requests with their disclosure policy, and the static
//! deployment configuration.

pub mod address;
pub mod config;
pub mod request;
pub mod session;
pub mod time;

pub use address::{AddressError, WalletAddress};
pub use config::ProofConfig;
pub use request::{DisclosurePolicy, ProofRequest, UniversalLink};
pub use session::{Gender, SessionStatus, VerificationSession};
pub use time::Timestamp;
