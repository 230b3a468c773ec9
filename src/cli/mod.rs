//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::Resolver;
use crate::error::Result;

/// relsign - Resolve release signing credentials for a build.
#[derive(Parser)]
#[command(
    name = "relsign",
    about = "Resolve release signing credentials from a local key.properties file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Where the project and its secrets live.
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", env = "RELSIGN_ROOT")]
    pub root: Option<PathBuf>,

    /// Secrets file, relative to the project root
    #[arg(long, global = true, value_name = "FILE")]
    pub secrets: Option<PathBuf>,

    /// Directory relative keystore paths resolve against, relative to the project root
    #[arg(long, global = true, value_name = "DIR")]
    pub store_base: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the signing identity for a build variant
    Resolve {
        /// Build variant (debug, profile, release, or a custom name)
        #[arg(default_value = "release")]
        variant: String,
        /// Fail a release build that has no secrets
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show passwords instead of redacting them
        #[arg(long)]
        reveal: bool,
    },

    /// Validate the secrets file for a release build
    Check,

    /// Write a new secrets file
    Init {
        /// Keystore path, relative to the store base
        #[arg(long)]
        store_file: Option<String>,
        /// Key alias inside the keystore
        #[arg(long)]
        key_alias: Option<String>,
        /// Keystore password
        #[arg(long, env = "RELSIGN_STORE_PASSWORD", hide_env_values = true)]
        store_password: Option<String>,
        /// Key password
        #[arg(long, env = "RELSIGN_KEY_PASSWORD", hide_env_values = true)]
        key_password: Option<String>,
        /// Overwrite an existing secrets file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl ProjectArgs {
    /// Build a resolver from `.relsign.toml` plus command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the root is invalid or the config cannot be loaded.
    pub fn resolver(&self) -> Result<Resolver> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut resolver = Resolver::open(root)?;

        if let Some(secrets) = &self.secrets {
            resolver = resolver.with_secrets_file(secrets);
        }
        if let Some(dir) = &self.store_base {
            resolver = resolver.with_store_base(dir);
        }

        Ok(resolver)
    }
}

/// Execute a command.
pub fn execute(command: Command, project: &ProjectArgs) -> Result<()> {
    match command {
        Command::Resolve {
            variant,
            strict,
            json,
            reveal,
        } => {
            let resolver = project.resolver()?;
            let resolver = if strict { resolver.strict(true) } else { resolver };
            resolve::execute(&resolver, &variant, json, reveal)
        }
        Command::Check => check::execute(&project.resolver()?),
        Command::Init {
            store_file,
            key_alias,
            store_password,
            key_password,
            force,
        } => init::execute(
            &project.resolver()?,
            init::Values {
                store_file,
                key_alias,
                store_password,
                key_password,
            },
            force,
        ),
        Command::Completions { shell } => completions::execute(shell),
    }
}
