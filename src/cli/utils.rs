use serde_json::json;

use crate::cli::OutputFormat;
use crate::contract::{ContractReport, ContractStatus, Outcome};

/// Output a contract report in the appropriate format.
///
/// Fail reasons are printed verbatim; in text mode they go to stderr so a
/// test runner surfaces them next to the nonzero exit status.
pub fn output_report(output_format: &OutputFormat, report: &ContractReport) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": report.is_satisfied(),
                "data": report,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            for result in report.results() {
                match &result.outcome {
                    Outcome::Pass => println!("✓ {}", result.name),
                    Outcome::Fail(reason) => eprintln!("✗ {}", reason),
                }
            }
            match report.status() {
                ContractStatus::Satisfied => {
                    println!("Contract '{}' satisfied", report.profile())
                }
                ContractStatus::Violated => eprintln!(
                    "Error: contract '{}' violated ({} of {} checks failed)",
                    report.profile(),
                    report.failures().count(),
                    report.results().len()
                ),
                ContractStatus::Absent => eprintln!(
                    "Error: contract '{}' is absent; none of its variables are set (not running under the provisioner?)",
                    report.profile()
                ),
            }
        }
    }
    Ok(())
}
