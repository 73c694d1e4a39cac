//! Get command - Prints the raw value of a single setting.

use std::io::Write;

use settings::Settings;

use crate::cli::args::GetArgs;
use crate::errors::CliResult;

/// Execute the get command
pub fn execute(args: GetArgs, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    let name = args.name.to_ascii_uppercase();
    let value = settings.require(&name)?;
    writeln!(out, "{}", value)?;
    Ok(())
}
