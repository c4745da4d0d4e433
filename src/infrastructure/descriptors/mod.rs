//! Descriptor loading
//!
//! Reads `VCAP_APPLICATION` and `VCAP_SERVICES` through an environment source
//! and decodes them into domain models.

pub mod loader;

pub use loader::{load_application, load_services, VcapLoader};
