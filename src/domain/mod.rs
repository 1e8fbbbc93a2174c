//! Domain logic - pure rules for turning a release reference into a dispatch body

pub mod payload;
pub mod reference;
pub mod version;

pub use payload::{DispatchInputs, DispatchPayload, LATEST_FLAG};
pub use reference::{derive_version, TagRef};
pub use version::ReleaseVersion;
