//! `tsel` - validate telescope selector files.
//!
//! The validation core never prints or chooses exit codes; this binary is
//! the caller responsible for presentation. It validates each file, prints
//! either a human-readable report or structured JSON, and exits non-zero
//! when any file fails.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ts_selector::encode::encode_selector;
use ts_selector::{Selector, StructuredError, ValidationError};

#[derive(Parser, Debug)]
#[command(
    name = "tsel",
    about = "Validate telescope selector files",
    version
)]
struct Cli {
    /// Selector files to validate.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Emit machine-readable JSON: the re-encoded selector on stdout for
    /// valid files, a structured error on stderr for invalid ones.
    #[arg(long)]
    json: bool,

    /// Suppress per-file success output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut failed = false;

    for path in &cli.files {
        match Selector::from_file(path) {
            Ok(selector) => report_success(&cli, path, &selector),
            Err(err) => {
                failed = true;
                report_failure(&cli, path, &err);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_success(cli: &Cli, path: &Path, selector: &Selector) {
    if cli.json {
        let encoded = encode_selector(selector);
        println!(
            "{}",
            serde_json::to_string_pretty(&encoded).unwrap_or_else(|_| encoded.to_string())
        );
    } else if !cli.quiet {
        println!("{}", describe(path, selector));
    }
}

fn report_failure(cli: &Cli, path: &Path, err: &ValidationError) {
    if cli.json {
        eprintln!("{}", StructuredError::from(err).to_json());
    } else {
        eprintln!("{}", format_error_human(path, err));
    }
}

fn describe(path: &Path, selector: &Selector) -> String {
    let mut line = format!(
        "ok {}: {} over {} day(s), {} subset(s)",
        path.display(),
        selector.metric,
        selector.duration_days,
        selector.subsets.len()
    );
    if let Some(dimension) = selector.varying_dimension {
        line.push_str(&format!(", varying by {}", dimension));
    }
    line
}

fn format_error_human(path: &Path, err: &ValidationError) -> String {
    format!(
        "x {} in {}\n  Reason: {}\n  Fix: {}",
        err.headline(),
        path.display(),
        err,
        err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_selector() -> Selector {
        Selector::from_json(
            r#"{
                "file_format_version": 1,
                "duration": "30d",
                "metric": "average_rtt",
                "ip_translation": { "strategy": "maxmind" },
                "subsets": [
                    { "site": "lga01", "client_provider": "Verizon",
                      "start_time": "2014-07-01T00:00:00Z" },
                    { "site": "lga02", "client_provider": "Verizon",
                      "start_time": "2014-07-01T00:00:00Z" }
                ]
            }"#,
        )
        .expect("valid selector")
    }

    #[test]
    fn test_describe_names_varying_dimension() {
        let line = describe(Path::new("a.json"), &sample_selector());
        assert!(line.contains("average_rtt"));
        assert!(line.contains("varying by site"));
    }

    #[test]
    fn test_format_error_human_has_reason_and_fix() {
        let err = ValidationError::UnknownIpStrategy {
            field: "ip_translation.strategy".into(),
            value: "ripe".into(),
        };
        let text = format_error_human(Path::new("a.json"), &err);
        assert!(text.contains("Unknown IP Translation Strategy"));
        assert!(text.contains("Reason:"));
        assert!(text.contains("Fix:"));
    }
}
