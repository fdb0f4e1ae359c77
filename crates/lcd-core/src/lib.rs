#![deny(missing_docs)]
#![doc = "Core parameter, policy and error types for the Hermitian LCD code search."]

pub mod errors;
pub mod params;
pub mod policy;
pub mod provenance;

pub use errors::{ErrorInfo, LcdError};
pub use params::{Base, CodeParameters, PACKED_CAPACITY};
pub use policy::ValidatorConfig;
pub use provenance::{RunProvenance, SchemaVersion};
