//! Session resolution and proof-request construction.
//!
//! The pipeline this crate owns: an opaque session UUID goes in, a normalized
//! [`VerificationSession`](verigate_types::VerificationSession) and a
//! user-scoped [`ProofRequest`](verigate_types::ProofRequest) with its
//! universal link come out. Lookup errors and construction errors are kept
//! distinct so operators can tell the two failure classes apart.

pub mod builder;
pub mod capability;
pub mod error;
pub mod resolver;

pub use builder::{BuiltRequest, RequestBuilder};
pub use capability::{DeepLinkDeriver, ProofCapability};
pub use error::{BuildError, CapabilityError, ResolveError};
pub use resolver::SessionResolver;
