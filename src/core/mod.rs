//! Core library components.
//!
//! This module contains the reusable logic for loading signing secrets and
//! resolving release signing identities.

pub mod config;
pub mod constants;
pub mod domain;
pub mod properties;
pub mod resolver;

pub use domain::{BuildVariant, SigningIdentity, SigningSecrets};
pub use resolver::Resolver;
