//! Check command - Verifies that a variant is safe to run.

use std::io::Write;

use settings::Settings;

use crate::errors::CliResult;

/// Execute the check command
///
/// Production requires every secret from the environment; development only
/// warns about placeholders.
pub fn execute(settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    if settings.variant.is_production() {
        settings.ensure_secrets()?;
    } else {
        for name in settings.insecure_settings() {
            tracing::warn!("{} uses a placeholder value", name);
        }
    }

    writeln!(out, "Settings OK ({})", settings.variant)?;
    Ok(())
}
