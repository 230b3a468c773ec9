//! Domain types.

mod identity;
mod secrets;
mod variant;

pub use identity::SigningIdentity;
pub use secrets::SigningSecrets;
pub use variant::BuildVariant;
