//! Resolve command - print the signing identity for a build variant.

use serde::Serialize;
use tracing::info;

use crate::cli::output;
use crate::core::{BuildVariant, Resolver, SigningIdentity};
use crate::error::Result;

const REDACTED: &str = "********";

#[derive(Serialize)]
struct Report<'a> {
    variant: &'a str,
    identity: Option<IdentityReport<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdentityReport<'a> {
    store_file: String,
    store_password: &'a str,
    key_alias: &'a str,
    key_password: &'a str,
}

impl<'a> IdentityReport<'a> {
    fn new(identity: &'a SigningIdentity, reveal: bool) -> Self {
        let mask = |s: &'a str| if reveal { s } else { REDACTED };
        Self {
            store_file: identity.store_path().display().to_string(),
            store_password: mask(identity.store_password()),
            key_alias: identity.key_alias(),
            key_password: mask(identity.key_password()),
        }
    }
}

/// Resolve and print the identity for `variant`.
pub fn execute(resolver: &Resolver, variant: &str, json: bool, reveal: bool) -> Result<()> {
    let variant: BuildVariant = variant.parse()?;
    info!(%variant, secrets = %resolver.secrets_path().display(), "resolving");

    let identity = resolver.resolve(&variant)?;

    let report = Report {
        variant: variant.as_str(),
        identity: identity.as_ref().map(|id| IdentityReport::new(id, reveal)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::kv("variant", report.variant);
    match report.identity {
        None => {
            output::kv("signing", "default");
            if variant.is_release() {
                output::hint("run: relsign init");
            }
        }
        Some(id) => {
            output::kv("signing", "release");
            output::kv("storeFile", output::path(&id.store_file));
            output::kv("keyAlias", id.key_alias);
            output::kv("storePass", id.store_password);
            output::kv("keyPass", id.key_password);
        }
    }

    Ok(())
}
