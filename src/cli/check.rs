//! Check command - validate the secrets file for a release build.

use tracing::debug;

use crate::cli::output;
use crate::core::config;
use crate::core::constants::SIGNING_KEYS;
use crate::core::{BuildVariant, Resolver, SigningSecrets};
use crate::error::Result;

/// Report on the secrets file and resolve it for `release`.
///
/// Only errors fail the command; a missing keystore or an unignored
/// secrets file are warnings.
pub fn execute(resolver: &Resolver) -> Result<()> {
    let path = resolver.secrets_path();
    let secrets = SigningSecrets::load(path)?;

    output::kv("secrets", output::path(path.display()));

    if secrets.path().is_none() {
        if resolver.is_strict() {
            resolver.resolve_identity(&secrets, &BuildVariant::Release)?;
        }
        output::kv("status", "not found, release builds use default signing");
        output::hint("run: relsign init");
        return Ok(());
    }

    for key in SIGNING_KEYS {
        output::check_item(key, secrets.get_non_empty(key).is_some());
    }

    let extra: Vec<&str> = secrets
        .keys()
        .filter(|k| !SIGNING_KEYS.iter().any(|known| known == k))
        .collect();
    if !extra.is_empty() {
        debug!(?extra, "unrecognized keys in secrets file");
        output::kv("ignored", extra.join(", "));
    }

    warn_if_tracked(resolver);

    let Some(identity) = resolver.resolve_identity(&secrets, &BuildVariant::Release)? else {
        return Ok(());
    };

    output::kv("keystore", output::path(identity.store_path().display()));
    if !identity.store_path().is_file() {
        output::warn(&format!(
            "keystore not found: {}",
            identity.store_path().display()
        ));
    } else {
        output::success(&format!(
            "release builds sign with {}",
            output::key(identity.key_alias())
        ));
    }

    Ok(())
}

fn warn_if_tracked(resolver: &Resolver) {
    let Ok(relative) = resolver.secrets_path().strip_prefix(resolver.root()) else {
        return;
    };
    let entry = relative.to_string_lossy().replace('\\', "/");

    if !config::is_gitignored(resolver.root(), &entry) {
        output::warn(&format!("{} is not listed in .gitignore", entry));
    }
}
