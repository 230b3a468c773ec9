//! relsign - Resolve release signing credentials for a build.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Print the identity for a variant
//! │   ├── check         # Validate the secrets file
//! │   ├── init          # Write a new secrets file
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .relsign.toml management
//!     ├── properties    # key=value secrets format
//!     ├── domain/       # SigningSecrets, SigningIdentity, BuildVariant
//!     └── resolver      # Variant -> signing identity decision
//! ```
//!
//! # Example
//!
//! ```no_run
//! use relsign::core::{BuildVariant, Resolver};
//!
//! let resolver = Resolver::open("android")?;
//! match resolver.resolve(&BuildVariant::Release)? {
//!     Some(identity) => println!("signing with {}", identity.key_alias()),
//!     None => println!("default signing"),
//! }
//! # Ok::<(), relsign::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
