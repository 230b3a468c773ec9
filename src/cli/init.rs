//! Init command - write a new secrets file.

use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};
use tracing::info;

use crate::cli::output;
use crate::core::config;
use crate::core::constants::{KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD};
use crate::core::{BuildVariant, Resolver, SigningSecrets};
use crate::error::{ConfigError, Result, ValidationError};

/// Conventional alias for a Play upload key.
const DEFAULT_ALIAS: &str = "upload";

/// Values supplied on the command line. Missing ones are prompted for.
#[derive(Debug, Default)]
pub struct Values {
    pub store_file: Option<String>,
    pub key_alias: Option<String>,
    pub store_password: Option<String>,
    pub key_password: Option<String>,
}

/// Write the secrets file and make sure git ignores it.
pub fn execute(resolver: &Resolver, values: Values, force: bool) -> Result<()> {
    let path = resolver.secrets_path();

    if path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(path.to_path_buf()).into());
    }

    let interactive = io::stdin().is_terminal();

    let store_file = text(values.store_file, STORE_FILE, None, interactive)?;
    let key_alias = text(values.key_alias, KEY_ALIAS, Some(DEFAULT_ALIAS), interactive)?;
    let store_password = secret(values.store_password, STORE_PASSWORD, interactive)?;
    let key_password = secret(values.key_password, KEY_PASSWORD, interactive)?;

    let secrets = SigningSecrets::from_pairs([
        (STORE_FILE, store_file),
        (STORE_PASSWORD, store_password),
        (KEY_ALIAS, key_alias),
        (KEY_PASSWORD, key_password),
    ]);

    // Validate before anything touches disk.
    let identity = resolver
        .resolve_identity(&secrets, &BuildVariant::Release)?
        .ok_or(ValidationError::EmptyValue(STORE_FILE.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    secrets.save(path)?;
    info!(path = %path.display(), "secrets file written");
    output::success(&format!("wrote {}", output::path(path.display())));

    if let Ok(relative) = path.strip_prefix(resolver.root()) {
        let entry = relative.to_string_lossy().replace('\\', "/");
        if config::ensure_gitignore(resolver.root(), &entry)? {
            output::success(&format!("added {} to .gitignore", entry));
        }
    }

    if !identity.store_path().is_file() {
        output::warn(&format!(
            "keystore not found yet: {}",
            identity.store_path().display()
        ));
    }

    Ok(())
}

fn text(
    given: Option<String>,
    name: &'static str,
    default: Option<&str>,
    interactive: bool,
) -> Result<String> {
    let value = match given {
        Some(v) => v,
        None if interactive => {
            let mut input = Input::<String>::new().with_prompt(output::key(name));
            if let Some(d) = default {
                input = input.default(d.to_string());
            }
            input.interact_text()?
        }
        None => return Err(ValidationError::NonInteractive(name).into()),
    };

    non_empty(name, value.trim().to_string())
}

fn secret(given: Option<String>, name: &'static str, interactive: bool) -> Result<String> {
    let value = match given {
        Some(v) => v,
        None if interactive => Password::new()
            .with_prompt(output::key(name))
            .with_confirmation("Repeat", "values do not match")
            .interact()?,
        None => return Err(ValidationError::NonInteractive(name).into()),
    };

    non_empty(name, value)
}

fn non_empty(name: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }
    Ok(value)
}
