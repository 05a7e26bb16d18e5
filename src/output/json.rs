use serde::Serialize;

use crate::checker::{Finding, InspectionResult};
use crate::error::Result;
use crate::scanner::normalize_path;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct Summary {
    files_inspected: usize,
    files_with_findings: usize,
    total_findings: usize,
    skipped_entries: Vec<String>,
}

#[derive(Serialize)]
struct JsonFinding {
    path: String,
    line: usize,
    rule: &'static str,
    code: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &InspectionResult) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_inspected: result.files_inspected(),
                files_with_findings: result.files_with_findings(),
                total_findings: result.findings().len(),
                skipped_entries: result
                    .skipped()
                    .iter()
                    .map(|path| normalize_path(path))
                    .collect(),
            },
            findings: result.findings().iter().map(convert_finding).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding {
    JsonFinding {
        path: normalize_path(&finding.path),
        line: finding.line,
        rule: finding.rule.name(),
        code: finding.rule.code(),
        message: finding.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
