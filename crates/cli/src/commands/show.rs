//! Show command - Prints every setting with secrets redacted.

use std::io::Write;

use settings::Settings;

use crate::cli::args::ShowArgs;
use crate::errors::CliResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        writeln!(out)?;
    } else {
        for (name, value) in settings.redacted_entries() {
            writeln!(out, "{}={}", name, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use settings::{load_with, Variant, RECOGNIZED_SETTINGS};

    use super::*;

    fn settings() -> Settings {
        let env: HashMap<String, String> = [("SECRET_KEY", "top-secret")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_with(Variant::Production, &env)
    }

    #[test]
    fn test_show_lines() {
        let mut out = Vec::new();
        execute(ShowArgs { json: false }, &settings(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), RECOGNIZED_SETTINGS.len());
        assert!(text.starts_with("DEBUG=false\n"));
        assert!(text.contains("SECRET_KEY=[REDACTED]\n"));
        assert!(!text.contains("top-secret"));
    }

    #[test]
    fn test_show_json() {
        let mut out = Vec::new();
        execute(ShowArgs { json: true }, &settings(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["SERVICE_BUS_QUEUE_NAME"], "notificationqueue");
        assert_eq!(json["SECRET_KEY"], "[REDACTED]");
    }
}
