//! Service credentials used to authenticate every call to the provider.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
