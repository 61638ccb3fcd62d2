// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Formats the results printed by the samples.

use dlp::model::{DlpJob, Finding};

/// Formats the findings of a content inspection request.
///
/// Quotes are only included when `include_quote` is set. Each line ends
/// with a newline.
pub fn findings_report(findings: &[Finding], include_quote: bool) -> String {
    if findings.is_empty() {
        return "Findings: None\n".to_string();
    }
    let mut report = String::from("Findings:\n");
    for finding in findings {
        if include_quote {
            report.push_str(&format!("\tQuote: {}\n", finding.quote));
        }
        let info_type = finding
            .info_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or_default();
        report.push_str(&format!("\tInfo type: {info_type}\n"));
        report.push_str(&format!("\tLikelihood: {}\n", finding.likelihood));
    }
    report
}

/// Formats the state and per info type counts of a completed job.
pub fn job_report(job: &DlpJob) -> String {
    let mut report = format!("Job {} status: {}\n", job.name, job.state);
    let stats = job.info_type_stats();
    if stats.is_empty() {
        report.push_str("No findings.\n");
        return report;
    }
    for stat in stats {
        let name = stat
            .info_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or_default();
        report.push_str(&format!(
            "  Found {} instance(s) of infoType {name}.\n",
            stat.count
        ));
    }
    report
}
